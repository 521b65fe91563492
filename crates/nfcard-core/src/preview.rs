//! # Preview Geometry
//!
//! Builds what the editor canvas and the print preview draw. Drawing itself
//! belongs to the storefront; this module only says which layer goes where.
//!
//! ## Surfaces
//! ```text
//! ┌──────────────────────────────┐      ┌──────────────────────────────────┐
//! │  EDITOR (drag / resize)      │      │  PRINT PREVIEW (read only)       │
//! │                              │      │                                  │
//! │  front face only, zoom 1.0   │      │  front | back, zoom 0.5 … 2.0    │
//! │  Logo        ◄───────────────┼──┬───┼──►  Logo            (front)      │
//! │  BrandMark                   │  │   │     PrintedText      (back)      │
//! │  DragBounds                  │  │   │     BrandMark                    │
//! │                              │  │   │     SafeZone         (guides on) │
//! │                              │  │   │     Bleed            (bleed on)  │
//! └──────────────────────────────┘  │   └──────────────────────────────────┘
//!                                   │
//!                       geometry::logo_bounds()  (one implementation)
//! ```
//!
//! Layers are returned bottom to top. The brand mark always follows the logo.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::geometry::{
    bleed_rect, drag_bounds, logo_bounds, safe_zone_rect, BrandMark, CardViewport, ImageFit,
    PercentRect, PixelRect,
};
use crate::layout::LayoutModel;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.25;

// =============================================================================
// View State
// =============================================================================

/// Which side of the card the print preview shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

/// Print preview controls. View-only state, not part of the order.
///
/// Every transition is independent: flipping the card keeps zoom, guides and
/// bleed overlay as they were.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PreviewState {
    face: CardFace,
    zoom: f64,
    show_guides: bool,
    show_bleed: bool,
}

impl Default for PreviewState {
    fn default() -> Self {
        PreviewState {
            face: CardFace::Front,
            zoom: 1.0,
            show_guides: false,
            show_bleed: false,
        }
    }
}

impl PreviewState {
    pub fn new(zoom: f64, show_guides: bool, show_bleed: bool) -> Self {
        let mut state = PreviewState {
            show_guides,
            show_bleed,
            ..Default::default()
        };
        state.set_zoom(zoom);
        state
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn show_guides(&self) -> bool {
        self.show_guides
    }

    pub fn show_bleed(&self) -> bool {
        self.show_bleed
    }

    pub fn flip(&mut self) {
        self.face = match self.face {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        };
    }

    pub fn show_face(&mut self, face: CardFace) {
        self.face = face;
    }

    /// Sets the zoom, clamped to `[0.5, 2.0]` and snapped to 0.25 steps.
    /// Non-finite values leave the zoom unchanged.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        let snapped = (zoom / ZOOM_STEP).round() * ZOOM_STEP;
        self.zoom = snapped.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    pub fn toggle_guides(&mut self) {
        self.show_guides = !self.show_guides;
    }

    pub fn toggle_bleed(&mut self) {
        self.show_bleed = !self.show_bleed;
    }
}

// =============================================================================
// Scene
// =============================================================================

/// Which presentation is being composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    Editor,
    Print,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// The buyer's logo.
    Logo,
    /// Name / title / company block on the back.
    PrintedText,
    /// Fixed manufacturer mark.
    BrandMark,
    /// Where the logo centre can be dragged (editor only).
    DragBounds,
    /// Safe-zone guide.
    SafeZone,
    /// Bleed overlay.
    Bleed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SceneLayer {
    pub kind: LayerKind,
    pub rect: PercentRect,
    /// Image fit, for image layers.
    pub fit: Option<ImageFit>,
}

impl SceneLayer {
    fn area(kind: LayerKind, rect: PercentRect) -> Self {
        SceneLayer { kind, rect, fit: None }
    }
}

/// Everything a surface draws for one card face, bottom to top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CardScene {
    pub surface: Surface,
    pub face: CardFace,
    pub zoom: f64,
    pub layers: Vec<SceneLayer>,
}

impl CardScene {
    pub fn layer(&self, kind: LayerKind) -> Option<&SceneLayer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// Pixel geometry for the card element as currently rendered.
    pub fn to_pixels(&self, card: CardViewport) -> PixelScene {
        PixelScene {
            width_px: card.width_px * self.zoom,
            height_px: card.height_px * self.zoom,
            layers: self
                .layers
                .iter()
                .map(|layer| PixelLayer {
                    kind: layer.kind,
                    rect: layer.rect.to_pixels(card, self.zoom),
                    fit: layer.fit,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PixelLayer {
    pub kind: LayerKind,
    pub rect: PixelRect,
    pub fit: Option<ImageFit>,
}

/// A [`CardScene`] resolved against a concrete card element size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PixelScene {
    pub width_px: f64,
    pub height_px: f64,
    pub layers: Vec<PixelLayer>,
}

/// Composes the layers a surface draws for the given layout.
///
/// The editor always shows the front at zoom 1.0. The print preview follows
/// `state`.
pub fn compose(layout: &LayoutModel, surface: Surface, state: &PreviewState) -> CardScene {
    let (face, zoom) = match surface {
        Surface::Editor => (CardFace::Front, 1.0),
        Surface::Print => (state.face(), state.zoom()),
    };

    let mut layers = Vec::with_capacity(5);

    match face {
        CardFace::Front => {
            if let Some(bounds) = logo_bounds(layout) {
                layers.push(SceneLayer {
                    kind: LayerKind::Logo,
                    rect: bounds.rect,
                    fit: Some(bounds.fit),
                });
            }
        }
        CardFace::Back => layers.push(SceneLayer::area(LayerKind::PrintedText, safe_zone_rect())),
    }

    layers.push(SceneLayer::area(LayerKind::BrandMark, BrandMark::rect()));

    match surface {
        Surface::Editor => {
            if layout.has_logo() && !layout.is_full_bleed() {
                layers.push(SceneLayer::area(LayerKind::DragBounds, drag_bounds()));
            }
        }
        Surface::Print => {
            if state.show_guides() {
                layers.push(SceneLayer::area(LayerKind::SafeZone, safe_zone_rect()));
            }
            if state.show_bleed() {
                layers.push(SceneLayer::area(LayerKind::Bleed, bleed_rect()));
            }
        }
    }

    CardScene {
        surface,
        face,
        zoom,
        layers,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::AssetRef;

    fn placed_layout() -> LayoutModel {
        LayoutModel::new()
            .set_asset(AssetRef::new("logo"))
            .layout
            .drag_by(-12.5, 7.5)
            .set_scale(1.3)
    }

    fn kinds(scene: &CardScene) -> Vec<LayerKind> {
        scene.layers.iter().map(|layer| layer.kind).collect()
    }

    #[test]
    fn test_zoom_clamps_and_snaps() {
        let mut state = PreviewState::default();
        for _ in 0..10 {
            state.zoom_in();
        }
        assert_eq!(state.zoom(), MAX_ZOOM);
        for _ in 0..10 {
            state.zoom_out();
        }
        assert_eq!(state.zoom(), MIN_ZOOM);

        state.set_zoom(1.3);
        assert_eq!(state.zoom(), 1.25);
        state.set_zoom(f64::NAN);
        assert_eq!(state.zoom(), 1.25);
        state.reset_zoom();
        assert_eq!(state.zoom(), 1.0);
    }

    #[test]
    fn test_flip_preserves_other_toggles() {
        let mut state = PreviewState::new(1.5, false, false);
        state.toggle_guides();
        state.toggle_bleed();
        state.flip();

        assert_eq!(state.face(), CardFace::Back);
        assert_eq!(state.zoom(), 1.5);
        assert!(state.show_guides());
        assert!(state.show_bleed());

        state.flip();
        assert_eq!(state.face(), CardFace::Front);
    }

    #[test]
    fn test_editor_and_print_share_logo_geometry() {
        let layout = placed_layout();
        let mut state = PreviewState::default();
        state.set_zoom(1.75);
        state.toggle_guides();

        let editor = compose(&layout, Surface::Editor, &state);
        let print = compose(&layout, Surface::Print, &state);
        assert_eq!(editor.layer(LayerKind::Logo), print.layer(LayerKind::Logo));

        let bleed = layout.set_full_bleed(true);
        assert_eq!(
            compose(&bleed, Surface::Editor, &state).layer(LayerKind::Logo),
            compose(&bleed, Surface::Print, &state).layer(LayerKind::Logo)
        );
    }

    #[test]
    fn test_brand_mark_always_above_logo() {
        for layout in [placed_layout(), placed_layout().set_full_bleed(true)] {
            for surface in [Surface::Editor, Surface::Print] {
                let scene = compose(&layout, surface, &PreviewState::default());
                let order = kinds(&scene);
                let logo = order.iter().position(|k| *k == LayerKind::Logo).unwrap();
                let mark = order.iter().position(|k| *k == LayerKind::BrandMark).unwrap();
                assert!(mark > logo);
            }
        }
    }

    #[test]
    fn test_brand_mark_present_without_logo_and_on_back() {
        let mut state = PreviewState::default();
        let scene = compose(&LayoutModel::new(), Surface::Print, &state);
        assert_eq!(kinds(&scene), vec![LayerKind::BrandMark]);

        state.flip();
        let back = compose(&placed_layout(), Surface::Print, &state);
        assert_eq!(kinds(&back), vec![LayerKind::PrintedText, LayerKind::BrandMark]);
    }

    #[test]
    fn test_print_overlays_follow_toggles() {
        let mut state = PreviewState::default();
        state.toggle_guides();
        state.toggle_bleed();
        let scene = compose(&placed_layout(), Surface::Print, &state);
        assert_eq!(
            kinds(&scene),
            vec![LayerKind::Logo, LayerKind::BrandMark, LayerKind::SafeZone, LayerKind::Bleed]
        );
    }

    #[test]
    fn test_editor_ignores_print_controls() {
        let mut state = PreviewState::default();
        state.flip();
        state.toggle_guides();
        state.set_zoom(2.0);

        let scene = compose(&placed_layout(), Surface::Editor, &state);
        assert_eq!(scene.face, CardFace::Front);
        assert_eq!(scene.zoom, 1.0);
        assert_eq!(
            kinds(&scene),
            vec![LayerKind::Logo, LayerKind::BrandMark, LayerKind::DragBounds]
        );
    }

    #[test]
    fn test_editor_hides_drag_bounds_in_full_bleed() {
        let scene = compose(
            &placed_layout().set_full_bleed(true),
            Surface::Editor,
            &PreviewState::default(),
        );
        assert!(scene.layer(LayerKind::DragBounds).is_none());
    }

    #[test]
    fn test_pixels_scale_with_zoom() {
        let layout = placed_layout();
        let card = CardViewport::new(400.0, 250.0);
        let mut state = PreviewState::default();

        let at_one = compose(&layout, Surface::Print, &state).to_pixels(card);
        state.set_zoom(2.0);
        let at_two = compose(&layout, Surface::Print, &state).to_pixels(card);

        assert_eq!(at_two.width_px, 800.0);
        let one = at_one.layers[0].rect;
        let two = at_two.layers[0].rect;
        assert!((two.width - one.width * 2.0).abs() < 1e-9);
        assert!((two.x - one.x * 2.0).abs() < 1e-9);
    }
}
