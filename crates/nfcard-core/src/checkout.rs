//! # Checkout Preconditions
//!
//! The last gate between the draft and the order pipeline.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  prepare_checkout(draft)                                                │
//! │                                                                         │
//! │  drag still open?        ──► GestureInProgress                          │
//! │  quantity ≥ 50?          ──► QuoteRequired  (route to contact form)     │
//! │  quantity out of range?  ──► Validation                                 │
//! │  personalized, no name?  ──► Validation                                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  CheckoutSubmission { order, price, placement }                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::draft::OrderDraft;
use crate::error::{CoreError, CoreResult};
use crate::layout::PrintPlacement;
use crate::money::Money;
use crate::order::OrderConfiguration;
use crate::pricing::{PriceBreakdown, PriceList};
use crate::validation::{validate_printed_fields, validate_quantity};

/// Everything the order pipeline needs from a priced draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSubmission {
    pub order: OrderConfiguration,
    pub price: PriceBreakdown,
    pub placement: PrintPlacement,
}

impl CheckoutSubmission {
    /// Amount to charge. Always present: quote-only drafts never get here.
    pub fn amount_due(&self) -> Money {
        self.price.total
    }
}

/// Builds a submission or explains why the draft cannot be checked out.
pub fn prepare_checkout(draft: &OrderDraft, prices: &PriceList) -> CoreResult<CheckoutSubmission> {
    if draft.is_dragging() {
        return Err(CoreError::GestureInProgress);
    }

    let order = draft.order();
    validate_quantity(order.quantity())?;

    let price = draft.price(prices);
    if price.payable_total().is_none() {
        return Err(CoreError::QuoteRequired {
            quantity: order.quantity(),
        });
    }

    validate_printed_fields(order.printed_fields(), order.requires_printed_fields())?;

    Ok(CheckoutSubmission {
        order: order.clone(),
        price,
        placement: draft.layout().placement(),
    })
}

/// Payload for the manual quote contact flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub order: OrderConfiguration,
    pub placement: PrintPlacement,
}

impl QuoteRequest {
    /// Builds a quote request, or `None` when the draft can be priced
    /// automatically.
    pub fn from_draft(draft: &OrderDraft) -> Option<Self> {
        draft.order().is_quote_only().then(|| QuoteRequest {
            order: draft.order().clone(),
            placement: draft.layout().placement(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
