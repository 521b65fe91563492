//! # Checkout Commands
//!
//! Hands a priced draft to the order pipeline, or a quote-only draft to the
//! contact flow.
//!
//! ## Checkout Routing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Order now" clicked                                                    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  submit_order()                                                         │
//! │        │                                                                │
//! │        ├── dragging?        ──► GESTURE_IN_PROGRESS                     │
//! │        ├── ≥ 50 cards?      ──► QUOTE_REQUIRED ──► request_quote()      │
//! │        ├── name missing?    ──► VALIDATION_ERROR                        │
//! │        ▼                                                                │
//! │  CheckoutResponse { reference, amountDue, submission }                  │
//! │        │                                                                │
//! │        ▼   (payment captured by the order pipeline)                     │
//! │  confirm_order() ──► fresh draft, logo released                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use nfcard_core::{prepare_checkout, CheckoutSubmission, CoreError, DraftCommand, QuoteRequest};

use super::DraftResponse;
use crate::error::ApiError;
use crate::session::ConfiguratorSession;

/// A submission accepted for payment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// Order reference (UUID)
    pub reference: String,
    pub submitted_at: DateTime<Utc>,
    pub submission: CheckoutSubmission,
    /// Amount to charge, with currency symbol
    pub amount_due: String,
    pub currency: String,
}

/// A quote-only order routed to the contact flow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Quote reference (UUID)
    pub reference: String,
    pub requested_at: DateTime<Utc>,
    pub request: QuoteRequest,
}

/// Submits the current draft for payment.
///
/// The draft is left untouched; call [`confirm_order`] once payment succeeds.
///
/// ## Errors
/// - `GESTURE_IN_PROGRESS` while a drag is open
/// - `QUOTE_REQUIRED` for 50 or more cards
/// - `VALIDATION_ERROR` for a bad quantity or a missing printed name
pub fn submit_order(session: &ConfiguratorSession) -> Result<CheckoutResponse, ApiError> {
    debug!("submit_order command");

    let result = session
        .draft()
        .with_draft(|d| prepare_checkout(d, session.prices()));

    let submission = match result {
        Ok(submission) => submission,
        Err(CoreError::QuoteRequired { quantity }) => {
            warn!(quantity, "Checkout attempted for quote-only order");
            return Err(CoreError::QuoteRequired { quantity }.into());
        }
        Err(e) => return Err(e.into()),
    };

    let response = CheckoutResponse {
        reference: Uuid::new_v4().to_string(),
        submitted_at: Utc::now(),
        amount_due: session.config().format_currency(submission.amount_due()),
        currency: session.config().currency.code.clone(),
        submission,
    };

    info!(
        reference = %response.reference,
        quantity = response.submission.order.quantity(),
        total_cents = response.submission.amount_due().cents(),
        "Order submitted"
    );

    Ok(response)
}

/// Routes a quote-only draft to the manual quote flow.
///
/// ## Errors
/// - `VALIDATION_ERROR` when the draft can be priced automatically
pub fn request_quote(session: &ConfiguratorSession) -> Result<QuoteResponse, ApiError> {
    debug!("request_quote command");

    let request = session
        .draft()
        .with_draft(QuoteRequest::from_draft)
        .ok_or_else(|| ApiError::validation("Orders under 50 cards are priced automatically"))?;

    let response = QuoteResponse {
        reference: Uuid::new_v4().to_string(),
        requested_at: Utc::now(),
        request,
    };

    info!(
        reference = %response.reference,
        quantity = response.request.order.quantity(),
        "Quote requested"
    );

    Ok(response)
}

/// Starts over after a successful order. The uploaded logo is released.
pub fn confirm_order(session: &ConfiguratorSession, reference: &str) -> DraftResponse {
    debug!(reference = %reference, "confirm_order command");
    let draft = session.dispatch(DraftCommand::Reset);
    DraftResponse::from_draft(&draft, session.config())
}
