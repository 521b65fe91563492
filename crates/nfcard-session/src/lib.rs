//! # nfcard-session: Configurator Session Layer
//!
//! Wraps `nfcard-core` for a storefront: configuration loading, the current
//! draft behind a lock, command entry points with serializable responses,
//! asset release, and structured logging.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. telemetry::init_tracing()                                           │
//! │     • tracing-subscriber with env filter (RUST_LOG)                     │
//! │                                                                         │
//! │  2. ConfiguratorConfig::load_or_default(None)                           │
//! │     • configurator.toml ─► NFCARD_* env ─► validate                     │
//! │                                                                         │
//! │  3. ConfiguratorSession::try_new(config, releaser)                      │
//! │     • invalid config ─► CONFIG_ERROR                                    │
//! │     • fresh draft: 1 × standard card, black                             │
//! │                                                                         │
//! │  4. commands::* for every storefront interaction                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use nfcard_session::assets::NoopReleaser;
//! use nfcard_session::commands::order::set_quantity;
//! use nfcard_session::config::ConfiguratorConfig;
//! use nfcard_session::session::ConfiguratorSession;
//!
//! let session = ConfiguratorSession::new(ConfiguratorConfig::default(), Arc::new(NoopReleaser));
//! let draft = set_quantity(&session, 25).unwrap();
//! assert_eq!(draft.formatted_total.as_deref(), Some("€580.00"));
//! ```

pub mod assets;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod state;
pub mod telemetry;

pub use assets::{AssetReleaser, NoopReleaser, ReleaseError};
pub use config::ConfiguratorConfig;
pub use error::{ApiError, ConfigError, ErrorCode};
pub use session::ConfiguratorSession;
