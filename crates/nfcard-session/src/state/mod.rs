//! # State Module
//!
//! Session state, split by concern so commands name what they touch.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │   DraftState     │  │   PreviewView    │  │  ConfiguratorConfig  │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  Arc<Mutex<      │  │  Mutex<          │  │  currency            │  │
//! │  │    OrderDraft    │  │    PreviewState  │  │  price list          │  │
//! │  │  >>              │  │  >               │  │  preview defaults    │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DraftState: exclusive access per command                            │
//! │  • PreviewView: view-only, never touches the draft                     │
//! │  • ConfiguratorConfig: read-only after load                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod draft;
mod preview;

pub use draft::DraftState;
pub use preview::PreviewView;
