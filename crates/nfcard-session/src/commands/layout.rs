//! # Layout Commands
//!
//! Logo upload, drag, scale, full-bleed and recenter.
//!
//! ## Drag Gesture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  pointerdown ──► begin_drag()                                           │
//! │  pointermove ──► drag_logo_pixels(dx, dy, width, height?)  (transient)  │
//! │  pointerup   ──► end_drag()      ──► committed layout updated           │
//! │  pointerleave ─► cancel_drag()   ──► committed layout unchanged         │
//! │                                                                         │
//! │  arrow keys  ──► drag_logo(dx, dy)  (no gesture: applied immediately)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use nfcard_core::validation::validate_drag_delta;
use nfcard_core::{AssetRef, DraftCommand};

use super::order::apply_command;
use super::{rendered_viewport, DraftResponse};
use crate::error::ApiError;
use crate::session::ConfiguratorSession;

/// Attaches a newly decoded logo. A previously uploaded, different logo is
/// released.
pub fn upload_logo(session: &ConfiguratorSession, asset: AssetRef) -> Result<DraftResponse, ApiError> {
    debug!(asset = %asset, "upload_logo command");
    apply_command(session, DraftCommand::UploadLogo { asset })
}

pub fn remove_logo(session: &ConfiguratorSession) -> Result<DraftResponse, ApiError> {
    debug!("remove_logo command");
    apply_command(session, DraftCommand::RemoveLogo)
}

pub fn begin_drag(session: &ConfiguratorSession) -> Result<DraftResponse, ApiError> {
    debug!("begin_drag command");
    apply_command(session, DraftCommand::BeginDrag)
}

/// Moves the logo by a delta in card percent.
pub fn drag_logo(session: &ConfiguratorSession, dx: f64, dy: f64) -> Result<DraftResponse, ApiError> {
    debug!(dx, dy, "drag_logo command");
    apply_command(session, DraftCommand::DragLogo { dx, dy })
}

/// Moves the logo by a pointer delta in pixels.
///
/// ## Arguments
/// * `dx_px`, `dy_px` - Pointer movement since the last event
/// * `card_width_px` - Width of the card element as rendered right now
/// * `card_height_px` - Rendered height; the card aspect ratio when `None`
pub fn drag_logo_pixels(
    session: &ConfiguratorSession,
    dx_px: f64,
    dy_px: f64,
    card_width_px: f64,
    card_height_px: Option<f64>,
) -> Result<DraftResponse, ApiError> {
    validate_drag_delta(dx_px, dy_px)?;
    let viewport = rendered_viewport(card_width_px, card_height_px)?;

    let (dx, dy) = viewport.pixel_delta_to_percent(dx_px, dy_px);
    drag_logo(session, dx, dy)
}

pub fn end_drag(session: &ConfiguratorSession) -> Result<DraftResponse, ApiError> {
    debug!("end_drag command");
    apply_command(session, DraftCommand::EndDrag)
}

pub fn cancel_drag(session: &ConfiguratorSession) -> Result<DraftResponse, ApiError> {
    debug!("cancel_drag command");
    apply_command(session, DraftCommand::CancelDrag)
}

/// Sets the logo scale; clamped to `[0.5, 2.0]`, ignored in full-bleed.
pub fn set_logo_scale(session: &ConfiguratorSession, scale: f64) -> Result<DraftResponse, ApiError> {
    debug!(scale, "set_logo_scale command");
    apply_command(session, DraftCommand::SetScale { scale })
}

pub fn set_full_bleed(session: &ConfiguratorSession, enabled: bool) -> Result<DraftResponse, ApiError> {
    debug!(enabled, "set_full_bleed command");
    apply_command(session, DraftCommand::SetFullBleed { enabled })
}

pub fn toggle_full_bleed(session: &ConfiguratorSession) -> Result<DraftResponse, ApiError> {
    debug!("toggle_full_bleed command");
    apply_command(session, DraftCommand::ToggleFullBleed)
}

pub fn recenter_logo(session: &ConfiguratorSession) -> Result<DraftResponse, ApiError> {
    debug!("recenter_logo command");
    apply_command(session, DraftCommand::Recenter)
}
