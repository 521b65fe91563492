//! # Preview Commands
//!
//! Scenes for the logo editor and the print preview, plus the preview's
//! view controls. None of these change the order.

use serde::Serialize;
use tracing::debug;

use nfcard_core::preview::PixelScene;
use nfcard_core::validation::validate_zoom_input;
use nfcard_core::{compose, CardFace, CardScene, PreviewState, Surface};

use super::rendered_viewport;
use crate::error::ApiError;
use crate::session::ConfiguratorSession;

/// A composed scene, optionally resolved to pixels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneResponse {
    pub controls: PreviewState,
    pub scene: CardScene,
    /// Present when the caller passed the rendered card size.
    pub pixels: Option<PixelScene>,
}

fn scene_response(
    session: &ConfiguratorSession,
    surface: Surface,
    card_width_px: Option<f64>,
    card_height_px: Option<f64>,
) -> Result<SceneResponse, ApiError> {
    let viewport = card_width_px
        .map(|width| rendered_viewport(width, card_height_px))
        .transpose()?;

    let controls = session.preview().current();
    let layout = session.draft().with_draft(|d| d.displayed_layout());
    let scene = compose(&layout, surface, &controls);
    let pixels = viewport.map(|viewport| scene.to_pixels(viewport));

    Ok(SceneResponse {
        controls,
        scene,
        pixels,
    })
}

/// Scene for the interactive logo editor (front face, zoom 1.0, drag bounds).
pub fn get_editor_scene(
    session: &ConfiguratorSession,
    card_width_px: Option<f64>,
    card_height_px: Option<f64>,
) -> Result<SceneResponse, ApiError> {
    debug!(?card_width_px, ?card_height_px, "get_editor_scene command");
    scene_response(session, Surface::Editor, card_width_px, card_height_px)
}

/// Scene for the print preview, following the current controls.
///
/// Pixels are resolved only when `card_width_px` is given; `card_height_px`
/// defaults to the card aspect ratio.
pub fn get_print_preview(
    session: &ConfiguratorSession,
    card_width_px: Option<f64>,
    card_height_px: Option<f64>,
) -> Result<SceneResponse, ApiError> {
    debug!(?card_width_px, ?card_height_px, "get_print_preview command");
    scene_response(session, Surface::Print, card_width_px, card_height_px)
}

pub fn flip_card(session: &ConfiguratorSession) -> PreviewState {
    debug!("flip_card command");
    session.preview().update(PreviewState::flip)
}

pub fn show_face(session: &ConfiguratorSession, face: CardFace) -> PreviewState {
    debug!(?face, "show_face command");
    session.preview().update(|s| s.show_face(face))
}

pub fn zoom_in(session: &ConfiguratorSession) -> PreviewState {
    debug!("zoom_in command");
    session.preview().update(PreviewState::zoom_in)
}

pub fn zoom_out(session: &ConfiguratorSession) -> PreviewState {
    debug!("zoom_out command");
    session.preview().update(PreviewState::zoom_out)
}

pub fn reset_zoom(session: &ConfiguratorSession) -> PreviewState {
    debug!("reset_zoom command");
    session.preview().update(PreviewState::reset_zoom)
}

/// Sets the zoom; snapped to 0.25 steps and clamped to `[0.5, 2.0]`.
pub fn set_zoom(session: &ConfiguratorSession, zoom: f64) -> Result<PreviewState, ApiError> {
    debug!(zoom, "set_zoom command");
    validate_zoom_input(zoom)?;
    Ok(session.preview().update(|s| s.set_zoom(zoom)))
}

pub fn toggle_guides(session: &ConfiguratorSession) -> PreviewState {
    debug!("toggle_guides command");
    session.preview().update(PreviewState::toggle_guides)
}

pub fn toggle_bleed(session: &ConfiguratorSession) -> PreviewState {
    debug!("toggle_bleed command");
    session.preview().update(PreviewState::toggle_bleed)
}
