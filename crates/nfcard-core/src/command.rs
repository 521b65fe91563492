//! # Draft Commands
//!
//! Every user interaction in the configurator becomes one discrete command.
//! The storefront sends them as JSON:
//!
//! ```json
//! { "type": "set_quantity", "quantity": 10 }
//! { "type": "drag_logo", "dx": -4.5, "dy": 0.0 }
//! { "type": "upload_logo", "asset": "5f0c…" }
//! ```
//!
//! Applying a recorded list of commands to a fresh draft always produces the
//! same draft, which is what the replay tests rely on.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::layout::AssetRef;
use crate::order::{CardColor, CardType, PrintedFields};

/// A single change to the order draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DraftCommand {
    // -------------------------------------------------------------------------
    // Order
    // -------------------------------------------------------------------------
    SetQuantity {
        quantity: u32,
    },
    SetCardType {
        #[serde(rename = "cardType")]
        card_type: CardType,
    },
    SetColor {
        color: CardColor,
    },
    SetB2bPersonalization {
        enabled: bool,
    },
    SetPrintedFields {
        fields: PrintedFields,
    },

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------
    /// A new local image was selected and decoded.
    UploadLogo {
        asset: AssetRef,
    },
    RemoveLogo,
    /// Pointer down on the logo.
    BeginDrag,
    /// Pointer moved, in card percent. Outside a gesture this is applied
    /// immediately (keyboard nudges).
    DragLogo {
        dx: f64,
        dy: f64,
    },
    /// Pointer released; commit the gesture.
    EndDrag,
    /// Pointer left the surface; discard the gesture.
    CancelDrag,
    SetScale {
        scale: f64,
    },
    SetFullBleed {
        enabled: bool,
    },
    ToggleFullBleed,
    Recenter,

    /// Back to a fresh draft (after confirmation or navigation away).
    Reset,
}

impl DraftCommand {
    /// True for commands that change the logo layout.
    pub fn is_layout(&self) -> bool {
        !matches!(
            self,
            DraftCommand::SetQuantity { .. }
                | DraftCommand::SetCardType { .. }
                | DraftCommand::SetColor { .. }
                | DraftCommand::SetB2bPersonalization { .. }
                | DraftCommand::SetPrintedFields { .. }
        )
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            DraftCommand::SetQuantity { .. } => "set_quantity",
            DraftCommand::SetCardType { .. } => "set_card_type",
            DraftCommand::SetColor { .. } => "set_color",
            DraftCommand::SetB2bPersonalization { .. } => "set_b2b_personalization",
            DraftCommand::SetPrintedFields { .. } => "set_printed_fields",
            DraftCommand::UploadLogo { .. } => "upload_logo",
            DraftCommand::RemoveLogo => "remove_logo",
            DraftCommand::BeginDrag => "begin_drag",
            DraftCommand::DragLogo { .. } => "drag_logo",
            DraftCommand::EndDrag => "end_drag",
            DraftCommand::CancelDrag => "cancel_drag",
            DraftCommand::SetScale { .. } => "set_scale",
            DraftCommand::SetFullBleed { .. } => "set_full_bleed",
            DraftCommand::ToggleFullBleed => "toggle_full_bleed",
            DraftCommand::Recenter => "recenter",
            DraftCommand::Reset => "reset",
        }
    }
}

/// Side effects the caller must carry out after applying a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Asset handle the draft no longer references. Release it exactly once.
    pub released: Option<AssetRef>,
}

impl CommandOutcome {
    pub fn released(asset: Option<AssetRef>) -> Self {
        CommandOutcome { released: asset }
    }
}
