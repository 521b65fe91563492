//! # Commands Module
//!
//! Entry points the storefront calls. Each command validates its input,
//! goes through the session, and returns a serializable response.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configurator Commands                                │
//! │                                                                         │
//! │  ┌───────────────┐  ┌───────────────┐  ┌───────────────┐               │
//! │  │    Order      │  │    Layout     │  │   Preview     │               │
//! │  │               │  │               │  │               │               │
//! │  │ get_draft     │  │ upload_logo   │  │ editor_scene  │               │
//! │  │ set_quantity  │  │ drag_logo     │  │ print_preview │               │
//! │  │ set_card_type │  │ set_scale     │  │ flip_card     │               │
//! │  │ set_color     │  │ full_bleed    │  │ zoom_in/out   │               │
//! │  │ apply_command │  │ recenter      │  │ toggle_guides │               │
//! │  └───────────────┘  └───────────────┘  └───────────────┘               │
//! │                                                                         │
//! │  ┌───────────────┐                                                     │
//! │  │   Checkout    │                                                     │
//! │  │               │                                                     │
//! │  │ submit_order  │                                                     │
//! │  │ request_quote │                                                     │
//! │  │ confirm_order │                                                     │
//! │  └───────────────┘                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod checkout;
pub mod layout;
pub mod order;
pub mod preview;

use serde::Serialize;

use nfcard_core::geometry::CardViewport;
use nfcard_core::validation::{
    validate_asset_ref, validate_drag_delta, validate_printed_fields, validate_quantity,
    validate_scale_input,
};
use nfcard_core::{DraftCommand, LayoutModel, OrderConfiguration, OrderDraft, PriceBreakdown};

use crate::config::ConfiguratorConfig;
use crate::error::ApiError;

/// Draft snapshot returned by every order and layout command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub order: OrderConfiguration,

    /// Layout as currently drawn, including an open drag gesture.
    pub layout: LayoutModel,

    pub is_dragging: bool,

    pub price: PriceBreakdown,

    /// Total with currency symbol. `None` for quote-only orders, which the
    /// storefront shows as "price on request".
    pub formatted_total: Option<String>,

    pub b2b_available: bool,
}

impl DraftResponse {
    pub fn from_draft(draft: &OrderDraft, config: &ConfiguratorConfig) -> Self {
        let price = draft.price(&config.price_list());
        DraftResponse {
            order: draft.order().clone(),
            layout: draft.displayed_layout(),
            is_dragging: draft.is_dragging(),
            formatted_total: price.payable_total().map(|total| config.format_currency(total)),
            price,
            b2b_available: draft.order().b2b_available(),
        }
    }
}

/// Rejects malformed values before they reach the draft.
pub(crate) fn validate_command(command: &DraftCommand) -> Result<(), ApiError> {
    match command {
        DraftCommand::SetQuantity { quantity } => validate_quantity(*quantity)?,
        DraftCommand::SetPrintedFields { fields } => validate_printed_fields(fields, false)?,
        DraftCommand::UploadLogo { asset } => validate_asset_ref(asset)?,
        DraftCommand::DragLogo { dx, dy } => validate_drag_delta(*dx, *dy)?,
        DraftCommand::SetScale { scale } => validate_scale_input(*scale)?,
        _ => {}
    }
    Ok(())
}

/// Viewport for the card element as rendered right now. Without a height the
/// physical card aspect ratio is assumed.
pub(crate) fn rendered_viewport(
    card_width_px: f64,
    card_height_px: Option<f64>,
) -> Result<CardViewport, ApiError> {
    if !card_width_px.is_finite() || card_width_px <= 0.0 {
        return Err(ApiError::validation("cardWidthPx must be a positive number"));
    }

    match card_height_px {
        Some(height) if !height.is_finite() || height <= 0.0 => {
            Err(ApiError::validation("cardHeightPx must be a positive number"))
        }
        Some(height) => Ok(CardViewport::new(card_width_px, height)),
        None => Ok(CardViewport::from_width(card_width_px)),
    }
}
