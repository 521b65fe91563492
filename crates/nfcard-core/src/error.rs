//! # Error Types
//!
//! Domain-specific error types for nfcard-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  nfcard-core errors (this file)                                         │
//! │  ├── CoreError        - Checkout preconditions, price list problems     │
//! │  └── ValidationError  - Input contract violations                       │
//! │                                                                         │
//! │  nfcard-session errors (separate crate)                                 │
//! │  ├── ConfigError      - configurator.toml / environment failures        │
//! │  └── ApiError         - What the storefront sees (serialized)           │
//! │                                                                         │
//! │  NOT errors: drag/scale corrections. Those are clamped silently.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Order size is past the automatic pricing cutover.
    ///
    /// ## User Workflow
    /// ```text
    /// Quantity: 60 ──► compute_price ──► is_quote_only = true
    ///      │
    ///      ▼
    /// Checkout submit ──► QuoteRequired { quantity: 60 }
    ///      │
    ///      ▼
    /// UI routes to "request a quote" contact form (never a 0.00 order)
    /// ```
    #[error("Orders of {quantity} cards require a manual quote")]
    QuoteRequired { quantity: u32 },

    /// A drag gesture is still open; its position has not been committed.
    #[error("Logo drag in progress; finish or cancel it before checkout")]
    GestureInProgress,

    /// The configured price list breaks a pricing rule.
    #[error("Invalid price list: {reason}")]
    InvalidPriceList { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the input layer before values reach the pricing engine or the
/// layout mutators.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Floating point input is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
