//! # Layout Model
//!
//! Where the buyer's logo sits on the card, in card-relative percentages.
//!
//! ## Coordinate System
//! ```text
//! (0,0) ─────────────────────────────────────────── (100,0)
//!   │   ┌───────────────────────────────────────┐     │
//!   │   │ 15%  band the logo centre can't enter │     │
//!   │   │   ┌───────────────────────────────┐   │     │
//!   │   │   │                               │   │     │
//!   │   │   │   allowed centre positions    │   │     │
//!   │   │   │       x, y ∈ [15, 85]         │   │     │
//!   │   │   │                               │   │     │
//!   │   │   └───────────────────────────────┘   │     │
//!   │   └───────────────────────────────────────┘     │
//! (0,100) ───────────────────────────────────────── (100,100)
//! ```
//!
//! Every mutator takes `&self` and returns a new model that satisfies the
//! invariants. Out-of-range drags and scales are clamped, never rejected.
//!
//! The brand mark in the top-right corner is deliberately absent from this
//! module; see [`crate::geometry::BrandMark`].

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Width of the band (percent) the logo centre may not enter on any side.
pub const LOGO_MARGIN_PERCENT: f64 = 15.0;
/// Smallest logo scale.
pub const MIN_SCALE: f64 = 0.5;
/// Largest logo scale.
pub const MAX_SCALE: f64 = 2.0;
/// Logo footprint at scale 1.0, as a fraction of card width/height.
pub const BASE_FOOTPRINT: f64 = 0.40;

const DEFAULT_POSITION: f64 = 50.0;
const DEFAULT_SCALE: f64 = 1.0;

// =============================================================================
// Asset Handle
// =============================================================================

/// Opaque handle to a decoded logo image held by the host UI.
///
/// The draft owns the handle exclusively. Whenever a handle is dropped from
/// the model it is handed back to the caller so it can be released exactly
/// once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(id: impl Into<String>) -> Self {
        AssetRef(id.into())
    }

    /// Creates a fresh random handle (UUID v4).
    pub fn generate() -> Self {
        AssetRef(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Layout Model
// =============================================================================

/// Logo placement on the card front.
///
/// ## Invariants
/// - Not full-bleed: `position_x`, `position_y` ∈ `[15, 85]`
/// - `scale` ∈ `[0.5, 2.0]`
/// - Full-bleed: position and scale are inert and sit at `50/50/1.0`
///
/// Deserialized values pass through the same clamping as the mutators.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LayoutModel {
    logo: Option<AssetRef>,
    position_x: f64,
    position_y: f64,
    scale: f64,
    is_full_bleed: bool,
}

impl Default for LayoutModel {
    fn default() -> Self {
        LayoutModel {
            logo: None,
            position_x: DEFAULT_POSITION,
            position_y: DEFAULT_POSITION,
            scale: DEFAULT_SCALE,
            is_full_bleed: false,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawLayout {
    logo: Option<AssetRef>,
    position_x: f64,
    position_y: f64,
    scale: f64,
    is_full_bleed: bool,
}

impl Default for RawLayout {
    fn default() -> Self {
        RawLayout {
            logo: None,
            position_x: DEFAULT_POSITION,
            position_y: DEFAULT_POSITION,
            scale: DEFAULT_SCALE,
            is_full_bleed: false,
        }
    }
}

impl From<RawLayout> for LayoutModel {
    fn from(raw: RawLayout) -> Self {
        let placed = LayoutModel {
            logo: raw.logo,
            ..Self::default()
        }
        .drag_by(raw.position_x - DEFAULT_POSITION, raw.position_y - DEFAULT_POSITION)
        .set_scale(raw.scale);

        if raw.is_full_bleed {
            placed.set_full_bleed(true)
        } else {
            placed
        }
    }
}

impl<'de> Deserialize<'de> for LayoutModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawLayout::deserialize(deserializer).map(LayoutModel::from)
    }
}

/// Result of replacing or removing the logo.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSwap {
    pub layout: LayoutModel,
    /// Handle that is no longer referenced and must be released.
    pub released: Option<AssetRef>,
}

impl LayoutModel {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn logo(&self) -> Option<&AssetRef> {
        self.logo.as_ref()
    }

    pub fn has_logo(&self) -> bool {
        self.logo.is_some()
    }

    pub fn position_x(&self) -> f64 {
        self.position_x
    }

    pub fn position_y(&self) -> f64 {
        self.position_y
    }

    pub fn position(&self) -> (f64, f64) {
        (self.position_x, self.position_y)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_full_bleed(&self) -> bool {
        self.is_full_bleed
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Installs a newly uploaded logo.
    ///
    /// Placement returns to defaults: a new image never inherits the previous
    /// image's position, scale or bleed. The superseded handle, if any, is
    /// returned for release. Re-installing the handle already held keeps it.
    pub fn set_asset(&self, asset: AssetRef) -> AssetSwap {
        let released = self.logo.clone().filter(|old| *old != asset);
        AssetSwap {
            layout: LayoutModel {
                logo: Some(asset),
                ..Self::default()
            },
            released,
        }
    }

    /// Removes the logo and resets placement.
    pub fn clear_asset(&self) -> AssetSwap {
        AssetSwap {
            layout: Self::default(),
            released: self.logo.clone(),
        }
    }

    /// Switches full-bleed on or off.
    ///
    /// Turning it on forces `50/50/1.0` so stale drag state can't resurface.
    /// Turning it off resets the scale to 1.0; the pre-bleed placement is not
    /// restored.
    pub fn set_full_bleed(&self, enabled: bool) -> Self {
        let mut next = self.clone();
        next.is_full_bleed = enabled;
        next.scale = DEFAULT_SCALE;
        if enabled {
            next.position_x = DEFAULT_POSITION;
            next.position_y = DEFAULT_POSITION;
        }
        next
    }

    /// Moves the logo centre by a delta in percent, clamping each axis into
    /// `[15, 85]` independently. No-op in full-bleed.
    pub fn drag_by(&self, delta_x: f64, delta_y: f64) -> Self {
        if self.is_full_bleed || !delta_x.is_finite() || !delta_y.is_finite() {
            return self.clone();
        }

        let mut next = self.clone();
        next.position_x = clamp_position(self.position_x + delta_x);
        next.position_y = clamp_position(self.position_y + delta_y);
        next
    }

    /// Sets the logo scale, clamped into `[0.5, 2.0]`. No-op in full-bleed.
    pub fn set_scale(&self, scale: f64) -> Self {
        if self.is_full_bleed || !scale.is_finite() {
            return self.clone();
        }

        let mut next = self.clone();
        next.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        next
    }

    /// Puts the logo centre back in the middle. Allowed in full-bleed too,
    /// where it has no visible effect.
    pub fn recenter(&self) -> Self {
        let mut next = self.clone();
        next.position_x = DEFAULT_POSITION;
        next.position_y = DEFAULT_POSITION;
        next
    }

    /// Normalized placement record for the print-production pipeline.
    pub fn placement(&self) -> PrintPlacement {
        PrintPlacement {
            asset: self.logo.clone(),
            position_x: self.position_x,
            position_y: self.position_y,
            scale: self.scale,
            is_full_bleed: self.is_full_bleed,
        }
    }
}

fn clamp_position(value: f64) -> f64 {
    value.clamp(LOGO_MARGIN_PERCENT, 100.0 - LOGO_MARGIN_PERCENT)
}

// =============================================================================
// Print Placement
// =============================================================================

/// What the print pipeline receives: only normalized percentages and the
/// full-bleed flag, never pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PrintPlacement {
    pub asset: Option<AssetRef>,
    pub position_x: f64,
    pub position_y: f64,
    pub scale: f64,
    pub is_full_bleed: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
