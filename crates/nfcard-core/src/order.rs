//! # Order Configuration
//!
//! What the buyer has picked in the configurator: how many cards, which kind,
//! which color, and what gets printed on them.
//!
//! ## Field Dependencies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    OrderConfiguration                                   │
//! │                                                                         │
//! │  quantity ──────────┬──► discount tier (pricing)                        │
//! │                     ├──► b2b_personalization allowed? (≥ 10)            │
//! │                     └──► quote-only? (≥ 50)                             │
//! │                                                                         │
//! │  card_type ─────────┬──► base unit price                                │
//! │                     ├──► color shown? (personalized only)               │
//! │                     └──► printed name required? (personalized only)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{B2B_MIN_QUANTITY, QUOTE_ONLY_QUANTITY};

// =============================================================================
// Card Type
// =============================================================================

/// Which card product is being ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// Plain card carrying the uploaded logo.
    #[default]
    Standard,
    /// Card with a chosen color and printed name/title/company.
    Personalized,
}

// =============================================================================
// Card Color
// =============================================================================

/// The six fixed card swatches. Display only; colors never change the price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CardColor {
    #[default]
    Black,
    White,
    Silver,
    Gold,
    Blue,
    Red,
}

impl CardColor {
    /// Every swatch, in picker order.
    pub const ALL: [CardColor; 6] = [
        CardColor::Black,
        CardColor::White,
        CardColor::Silver,
        CardColor::Gold,
        CardColor::Blue,
        CardColor::Red,
    ];

    /// Swatch fill used by the preview.
    pub const fn hex(&self) -> &'static str {
        match self {
            CardColor::Black => "#111111",
            CardColor::White => "#f5f5f5",
            CardColor::Silver => "#c0c0c0",
            CardColor::Gold => "#d4af37",
            CardColor::Blue => "#1e3a8a",
            CardColor::Red => "#b91c1c",
        }
    }
}

// =============================================================================
// Printed Fields
// =============================================================================

/// Text printed on personalized cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrintedFields {
    pub name: String,
    pub title: String,
    pub company: String,
}

impl PrintedFields {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        PrintedFields {
            name: name.into(),
            title: title.into(),
            company: company.into(),
        }
    }

    /// True when there is nothing to print.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.title.trim().is_empty()
            && self.company.trim().is_empty()
    }
}

// =============================================================================
// Order Configuration
// =============================================================================

/// The buyer's current order selection.
///
/// ## Invariants
/// - `quantity >= 1` (enforced by the input layer, see [`crate::validation`])
/// - `b2b_personalization` is `false` whenever `quantity < 10`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfiguration {
    quantity: u32,
    card_type: CardType,
    color: CardColor,
    b2b_personalization: bool,
    printed_fields: PrintedFields,
}

impl Default for OrderConfiguration {
    /// The configurator opens on one black standard card.
    fn default() -> Self {
        OrderConfiguration {
            quantity: 1,
            card_type: CardType::Standard,
            color: CardColor::Black,
            b2b_personalization: false,
            printed_fields: PrintedFields::default(),
        }
    }
}

impl OrderConfiguration {
    pub fn new(quantity: u32, card_type: CardType) -> Self {
        let mut config = OrderConfiguration {
            card_type,
            ..Default::default()
        };
        config.set_quantity(quantity);
        config
    }

    /// Builder-style B2B toggle, mainly for tests and fixtures.
    pub fn with_b2b_personalization(mut self, enabled: bool) -> Self {
        self.set_b2b_personalization(enabled);
        self
    }

    pub fn with_color(mut self, color: CardColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_printed_fields(mut self, fields: PrintedFields) -> Self {
        self.printed_fields = fields;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// The selected swatch, whether or not it is shown.
    pub fn color(&self) -> CardColor {
        self.color
    }

    /// The color that ends up on the card: only personalized cards have one.
    pub fn display_color(&self) -> Option<CardColor> {
        match self.card_type {
            CardType::Personalized => Some(self.color),
            CardType::Standard => None,
        }
    }

    pub fn b2b_personalization(&self) -> bool {
        self.b2b_personalization
    }

    pub fn printed_fields(&self) -> &PrintedFields {
        &self.printed_fields
    }

    /// True once the order is too large for automatic pricing.
    pub fn is_quote_only(&self) -> bool {
        self.quantity >= QUOTE_ONLY_QUANTITY
    }

    /// True when B2B personalization may be offered for this quantity.
    pub fn b2b_available(&self) -> bool {
        self.quantity >= B2B_MIN_QUANTITY
    }

    /// Personalized, automatically priced orders must carry a printed name.
    pub fn requires_printed_fields(&self) -> bool {
        self.card_type == CardType::Personalized && !self.is_quote_only()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Sets the quantity and drops B2B personalization below its threshold.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        if !self.b2b_available() {
            self.b2b_personalization = false;
        }
    }

    pub fn set_card_type(&mut self, card_type: CardType) {
        self.card_type = card_type;
    }

    pub fn set_color(&mut self, color: CardColor) {
        self.color = color;
    }

    /// Enables B2B personalization. Ignored below 10 cards.
    pub fn set_b2b_personalization(&mut self, enabled: bool) {
        self.b2b_personalization = enabled && self.b2b_available();
    }

    pub fn set_printed_fields(&mut self, fields: PrintedFields) {
        self.printed_fields = fields;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
