//! # Order Commands
//!
//! Quantity, card type, color, B2B personalization and printed text.
//!
//! ## Quantity Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Quantity input ──► set_quantity(raw) ──► validate 1..=9999             │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                       qty < 10 ? B2B forced off                         │
//! │                       qty ≥ 50 ? price on request (formattedTotal null) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use nfcard_core::{CardColor, CardType, DraftCommand, PrintedFields, MAX_ORDER_QUANTITY};

use super::{validate_command, DraftResponse};
use crate::error::ApiError;
use crate::session::ConfiguratorSession;

/// Gets the current draft with its price.
pub fn get_draft(session: &ConfiguratorSession) -> DraftResponse {
    debug!("get_draft command");
    session
        .draft()
        .with_draft(|d| DraftResponse::from_draft(d, session.config()))
}

/// Applies any draft command after validating it.
///
/// Used by storefronts that send the tagged command JSON directly:
/// `{ "type": "set_quantity", "quantity": 12 }`.
pub fn apply_command(
    session: &ConfiguratorSession,
    command: DraftCommand,
) -> Result<DraftResponse, ApiError> {
    validate_command(&command)?;
    let draft = session.dispatch(command);
    Ok(DraftResponse::from_draft(&draft, session.config()))
}

/// Sets the number of cards.
///
/// ## Arguments
/// * `quantity` - Raw value from the quantity input (may be zero or negative)
///
/// ## Returns
/// Updated draft, or VALIDATION_ERROR outside `1..=9999`
pub fn set_quantity(session: &ConfiguratorSession, quantity: i64) -> Result<DraftResponse, ApiError> {
    debug!(quantity = %quantity, "set_quantity command");

    if quantity < 1 {
        return Err(ApiError::validation("quantity must be positive"));
    }
    let quantity = u32::try_from(quantity).map_err(|_| {
        ApiError::validation(format!(
            "quantity must be between 1 and {}",
            MAX_ORDER_QUANTITY
        ))
    })?;

    apply_command(session, DraftCommand::SetQuantity { quantity })
}

pub fn set_card_type(
    session: &ConfiguratorSession,
    card_type: CardType,
) -> Result<DraftResponse, ApiError> {
    debug!(?card_type, "set_card_type command");
    apply_command(session, DraftCommand::SetCardType { card_type })
}

pub fn set_color(session: &ConfiguratorSession, color: CardColor) -> Result<DraftResponse, ApiError> {
    debug!(?color, "set_color command");
    apply_command(session, DraftCommand::SetColor { color })
}

/// Toggles the B2B personalization option. Ignored below 10 cards.
pub fn set_b2b_personalization(
    session: &ConfiguratorSession,
    enabled: bool,
) -> Result<DraftResponse, ApiError> {
    debug!(enabled, "set_b2b_personalization command");
    apply_command(session, DraftCommand::SetB2bPersonalization { enabled })
}

/// Sets the printed name/title/company. Length limits apply here; a missing
/// name is only rejected at checkout.
pub fn set_printed_fields(
    session: &ConfiguratorSession,
    fields: PrintedFields,
) -> Result<DraftResponse, ApiError> {
    debug!(blank = fields.is_blank(), "set_printed_fields command");
    apply_command(session, DraftCommand::SetPrintedFields { fields })
}

/// Discards the draft, releasing any uploaded logo.
pub fn reset_draft(session: &ConfiguratorSession) -> DraftResponse {
    debug!("reset_draft command");
    let draft = session.dispatch(DraftCommand::Reset);
    DraftResponse::from_draft(&draft, session.config())
}
