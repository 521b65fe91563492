//! # Card Geometry
//!
//! The single source of truth for where things sit on the card. The editor
//! canvas and the print preview both call into this module; neither computes
//! a logo box of its own.
//!
//! ## Reference Frames
//! ```text
//! ┌───────────────────────────── bleed (3 mm outset) ────────────────────┐
//! │ ┌─────────────────────────── trim = card edge ─────────────────────┐ │
//! │ │ ┌────────────────────────── safe zone (5 mm inset) ────────────┐ │ │
//! │ │ │                                          ┌──────────────┐    │ │ │
//! │ │ │                                          │  BRAND MARK  │    │ │ │
//! │ │ │               ┌───────────┐              └──────────────┘    │ │ │
//! │ │ │               │   LOGO    │  40% × scale of card w/h         │ │ │
//! │ │ │               └───────────┘                                  │ │ │
//! │ │ └──────────────────────────────────────────────────────────────┘ │ │
//! │ └──────────────────────────────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All rectangles are [`PercentRect`]s relative to the trimmed card. Pixels
//! only appear in [`PercentRect::to_pixels`], computed from the card element
//! size at call time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::layout::{LayoutModel, BASE_FOOTPRINT};

// =============================================================================
// Print Geometry
// =============================================================================

/// Physical card dimensions used for print guides.
pub struct PrintGeometry;

impl PrintGeometry {
    /// ISO/IEC 7810 ID-1 width.
    pub const CARD_WIDTH_MM: f64 = 85.6;
    /// ISO/IEC 7810 ID-1 height.
    pub const CARD_HEIGHT_MM: f64 = 54.0;
    pub const BLEED_MM: f64 = 3.0;
    pub const SAFE_ZONE_MM: f64 = 5.0;

    /// Width over height.
    pub fn aspect_ratio() -> f64 {
        Self::CARD_WIDTH_MM / Self::CARD_HEIGHT_MM
    }

    /// Safe-zone inset, percent, applied to all four edges.
    pub fn safe_zone_inset_percent() -> f64 {
        Self::SAFE_ZONE_MM / Self::CARD_HEIGHT_MM * 100.0
    }

    /// Bleed outset, percent, applied to all four edges.
    pub fn bleed_outset_percent() -> f64 {
        Self::BLEED_MM / Self::CARD_WIDTH_MM * 100.0
    }
}

// =============================================================================
// Rectangles
// =============================================================================

/// Rectangle in percent of the card's width (`left`, `width`) and height
/// (`top`, `height`). Values outside `0..=100` extend past the trim line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PercentRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PercentRect {
    /// The whole card.
    pub const FULL_CARD: PercentRect = PercentRect {
        left: 0.0,
        top: 0.0,
        width: 100.0,
        height: 100.0,
    };

    /// Rectangle of the given size centred on `(cx, cy)`.
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        PercentRect {
            left: cx - width / 2.0,
            top: cy - height / 2.0,
            width,
            height,
        }
    }

    /// Shrinks (positive) or grows (negative) the rectangle on every side.
    pub fn inset(&self, amount: f64) -> Self {
        PercentRect {
            left: self.left + amount,
            top: self.top + amount,
            width: self.width - 2.0 * amount,
            height: self.height - 2.0 * amount,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Converts to pixels for a card element of the given size and zoom.
    pub fn to_pixels(&self, card: CardViewport, zoom: f64) -> PixelRect {
        let width_px = card.width_px * zoom;
        let height_px = card.height_px * zoom;
        PixelRect {
            x: self.left / 100.0 * width_px,
            y: self.top / 100.0 * height_px,
            width: self.width / 100.0 * width_px,
            height: self.height / 100.0 * height_px,
        }
    }
}

/// Size of the rendered card element (unzoomed), measured at call time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardViewport {
    pub width_px: f64,
    pub height_px: f64,
}

impl CardViewport {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        CardViewport { width_px, height_px }
    }

    /// Viewport of the given width with the physical card aspect ratio.
    pub fn from_width(width_px: f64) -> Self {
        CardViewport {
            width_px,
            height_px: width_px / PrintGeometry::aspect_ratio(),
        }
    }

    /// Converts a pointer movement in pixels into a drag delta in percent.
    /// A degenerate (zero-sized) viewport yields no movement.
    pub fn pixel_delta_to_percent(&self, dx_px: f64, dy_px: f64) -> (f64, f64) {
        let dx = if self.width_px > 0.0 { dx_px / self.width_px * 100.0 } else { 0.0 };
        let dy = if self.height_px > 0.0 { dy_px / self.height_px * 100.0 } else { 0.0 };
        (dx, dy)
    }
}

/// Rectangle in pixels relative to the card element's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

// =============================================================================
// Logo Footprint
// =============================================================================

/// How the image is fitted into its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ImageFit {
    /// Whole image visible, letterboxed inside the box.
    Contain,
    /// Box fully covered, image cropped.
    Cover,
}

/// The logo's on-card bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LogoBounds {
    pub rect: PercentRect,
    pub fit: ImageFit,
}

/// Computes the logo box for a layout, or `None` when no logo is set.
///
/// - Placed: `40% × scale` of card width and height, centred on the position,
///   image contained.
/// - Full-bleed: the whole card, image cropped to cover.
pub fn logo_bounds(layout: &LayoutModel) -> Option<LogoBounds> {
    if !layout.has_logo() {
        return None;
    }

    if layout.is_full_bleed() {
        return Some(LogoBounds {
            rect: PercentRect::FULL_CARD,
            fit: ImageFit::Cover,
        });
    }

    let size = BASE_FOOTPRINT * layout.scale() * 100.0;
    Some(LogoBounds {
        rect: PercentRect::centered(layout.position_x(), layout.position_y(), size, size),
        fit: ImageFit::Contain,
    })
}

/// Area the logo centre may occupy while dragging.
pub fn drag_bounds() -> PercentRect {
    PercentRect::FULL_CARD.inset(crate::layout::LOGO_MARGIN_PERCENT)
}

// =============================================================================
// Brand Mark
// =============================================================================

/// The manufacturer's mark, fixed in the top-right corner of every card.
///
/// Not part of [`LayoutModel`]; nothing the buyer does moves, scales or hides
/// it. It is always composited above the logo.
pub struct BrandMark;

impl BrandMark {
    pub const TOP_PERCENT: f64 = 8.0;
    pub const RIGHT_PERCENT: f64 = 5.0;
    pub const WIDTH_PERCENT: f64 = 19.0;
    /// Width over height of the mark artwork.
    pub const ASPECT_RATIO: f64 = 3.0;

    /// Mark rectangle in card percent.
    pub fn rect() -> PercentRect {
        // Height in percent of card height, keeping the artwork's aspect on a
        // non-square card.
        let height = Self::WIDTH_PERCENT * PrintGeometry::aspect_ratio() / Self::ASPECT_RATIO;
        PercentRect {
            left: 100.0 - Self::RIGHT_PERCENT - Self::WIDTH_PERCENT,
            top: Self::TOP_PERCENT,
            width: Self::WIDTH_PERCENT,
            height,
        }
    }
}

// =============================================================================
// Print Guides
// =============================================================================

/// Area guaranteed to survive trimming.
pub fn safe_zone_rect() -> PercentRect {
    PercentRect::FULL_CARD.inset(PrintGeometry::safe_zone_inset_percent())
}

/// Area the artwork must extend to so trimming leaves no white edge.
pub fn bleed_rect() -> PercentRect {
    PercentRect::FULL_CARD.inset(-PrintGeometry::bleed_outset_percent())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::AssetRef;

    const EPS: f64 = 1e-9;

    fn with_logo() -> LayoutModel {
        LayoutModel::new().set_asset(AssetRef::new("logo")).layout
    }

    #[test]
    fn test_no_logo_no_bounds() {
        assert_eq!(logo_bounds(&LayoutModel::new()), None);
    }

    #[test]
    fn test_default_logo_bounds() {
        let bounds = logo_bounds(&with_logo()).unwrap();
        assert_eq!(bounds.fit, ImageFit::Contain);
        assert!((bounds.rect.left - 30.0).abs() < EPS);
        assert!((bounds.rect.top - 30.0).abs() < EPS);
        assert!((bounds.rect.width - 40.0).abs() < EPS);
        assert!((bounds.rect.height - 40.0).abs() < EPS);
    }

    #[test]
    fn test_scaled_logo_bounds_follow_position() {
        let layout = with_logo().drag_by(-60.0, 0.0).set_scale(2.0);
        let bounds = logo_bounds(&layout).unwrap();
        assert!((bounds.rect.width - 80.0).abs() < EPS);
        let (cx, cy) = bounds.rect.center();
        assert!((cx - 15.0).abs() < EPS);
        assert!((cy - 50.0).abs() < EPS);
    }

    #[test]
    fn test_full_bleed_covers_card() {
        let layout = with_logo().set_scale(1.5).set_full_bleed(true);
        let bounds = logo_bounds(&layout).unwrap();
        assert_eq!(bounds.rect, PercentRect::FULL_CARD);
        assert_eq!(bounds.fit, ImageFit::Cover);
    }

    #[test]
    fn test_safe_zone_and_bleed_percentages() {
        let safe = safe_zone_rect();
        let inset = 5.0 / 54.0 * 100.0;
        assert!((safe.left - inset).abs() < EPS);
        assert!((safe.top - inset).abs() < EPS);
        assert!((safe.right() - (100.0 - inset)).abs() < EPS);

        let bleed = bleed_rect();
        let outset = 3.0 / 85.6 * 100.0;
        assert!((bleed.left + outset).abs() < EPS);
        assert!((bleed.width - (100.0 + 2.0 * outset)).abs() < EPS);
    }

    #[test]
    fn test_brand_mark_anchor() {
        let mark = BrandMark::rect();
        assert!((mark.right() - 95.0).abs() < EPS);
        assert!((mark.top - 8.0).abs() < EPS);
        assert!((18.0..=20.0).contains(&mark.width));
        assert!(mark.height > 0.0 && mark.bottom() < 50.0);
    }

    #[test]
    fn test_to_pixels_uses_viewport_and_zoom() {
        let card = CardViewport::new(428.0, 270.0);
        let px = PercentRect::centered(50.0, 50.0, 40.0, 40.0).to_pixels(card, 1.0);
        assert!((px.x - 128.4).abs() < EPS);
        assert!((px.y - 81.0).abs() < EPS);
        assert!((px.width - 171.2).abs() < EPS);

        let zoomed = PercentRect::centered(50.0, 50.0, 40.0, 40.0).to_pixels(card, 2.0);
        assert!((zoomed.width - 342.4).abs() < EPS);
    }

    #[test]
    fn test_pixel_delta_to_percent() {
        let card = CardViewport::new(400.0, 250.0);
        let (dx, dy) = card.pixel_delta_to_percent(40.0, -25.0);
        assert!((dx - 10.0).abs() < EPS);
        assert!((dy + 10.0).abs() < EPS);
        assert_eq!(CardViewport::new(0.0, 0.0).pixel_delta_to_percent(5.0, 5.0), (0.0, 0.0));
    }

    #[test]
    fn test_viewport_from_width_keeps_card_aspect() {
        let card = CardViewport::from_width(856.0);
        assert!((card.height_px - 540.0).abs() < 1e-6);
    }

    #[test]
    fn test_drag_bounds() {
        let bounds = drag_bounds();
        assert_eq!(bounds.left, 15.0);
        assert_eq!(bounds.right(), 85.0);
    }
}
