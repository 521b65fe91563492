//! # nfcard-core: Pure Business Logic for the NFC Card Configurator
//!
//! This crate prices NFC business card orders and models where the buyer's
//! logo sits on the card. Everything here is a pure function with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Configurator Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront (web UI)                          │   │
//! │  │   Quantity picker ─► Logo editor ─► Print preview ─► Checkout   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    nfcard-session                               │   │
//! │  │   DraftState, command entry points, config, logging             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nfcard-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌──────────────────┐  │   │
//! │  │   │ pricing │  │ layout  │  │ geometry │  │ draft / command  │  │   │
//! │  │   │ tiers   │  │ clamp   │  │ preview  │  │ checkout         │  │   │
//! │  │   └─────────┘  └─────────┘  └──────────┘  └──────────────────┘  │   │
//! │  │   NO I/O • NO LOGGING • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic
//! - [`order`] - What the buyer picked (quantity, type, color, printed text)
//! - [`pricing`] - Discount ladder, B2B surcharge, quote cutover
//! - [`layout`] - Logo position/scale/full-bleed with clamping
//! - [`gesture`] - Transient drag state, committed on gesture end
//! - [`geometry`] - Logo footprint, brand mark, safe zone, bleed
//! - [`preview`] - Editor and print preview scenes
//! - [`command`] / [`draft`] - Command pattern over the order draft
//! - [`checkout`] - Submission preconditions
//! - [`validation`] / [`error`] - Input checks and domain errors
//!
//! ## Example Usage
//!
//! ```rust
//! use nfcard_core::command::DraftCommand;
//! use nfcard_core::draft::OrderDraft;
//! use nfcard_core::pricing::PriceList;
//!
//! let (draft, _released) = OrderDraft::replay([
//!     DraftCommand::SetQuantity { quantity: 25 },
//!     DraftCommand::DragLogo { dx: -60.0, dy: 0.0 },
//! ]);
//!
//! let price = draft.price(&PriceList::default());
//! assert_eq!(price.discount_percent, 20);
//! assert_eq!(draft.layout().position(), (15.0, 50.0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod command;
pub mod draft;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod money;
pub mod order;
pub mod preview;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{prepare_checkout, CheckoutSubmission, QuoteRequest};
pub use command::{CommandOutcome, DraftCommand};
pub use draft::OrderDraft;
pub use error::{CoreError, CoreResult, ValidationError};
pub use layout::{AssetRef, LayoutModel, PrintPlacement};
pub use money::Money;
pub use order::{CardColor, CardType, OrderConfiguration, PrintedFields};
pub use preview::{compose, CardFace, CardScene, PreviewState, Surface};
pub use pricing::{compute_price, compute_price_with, PriceBreakdown, PriceList};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest order that may add B2B personalization (same breakpoint as the
/// 15% discount tier).
pub const B2B_MIN_QUANTITY: u32 = 10;

/// Orders of this many cards or more are quote-only.
pub const QUOTE_ONLY_QUANTITY: u32 = 50;

/// Largest quantity the order form accepts.
///
/// Quote-only orders still need a sane upper bound for the contact flow.
pub const MAX_ORDER_QUANTITY: u32 = 9_999;
