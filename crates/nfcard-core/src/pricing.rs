//! # Pricing Engine
//!
//! Turns an [`OrderConfiguration`] into a [`PriceBreakdown`].
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       compute_price(config)                             │
//! │                                                                         │
//! │  quantity ≥ 50? ──yes──► QUOTE ONLY (all money fields zero)             │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  base = standard | personalized unit price                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  discount ladder (highest breakpoint met wins)                          │
//! │     ≥25 → 20%   ≥10 → 15%   ≥5 → 10%   ≥2 → 5%   else 0%                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  unit_price = base × (1 − discount)                                     │
//! │  customization = quantity ≥ 10 && b2b ? surcharge × quantity : 0        │
//! │  total = unit_price × quantity + customization                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The function is pure and cheap; the configurator calls it on every change.
//!
//! ## Example
//! ```rust
//! use nfcard_core::order::{CardType, OrderConfiguration};
//! use nfcard_core::pricing::compute_price;
//!
//! let config = OrderConfiguration::new(5, CardType::Personalized);
//! let price = compute_price(&config);
//!
//! assert_eq!(price.discount_percent, 10);
//! assert_eq!(price.unit_price.cents(), 4410);
//! assert_eq!(price.total.cents(), 22_050);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::order::{CardType, OrderConfiguration};
use crate::{B2B_MIN_QUANTITY, QUOTE_ONLY_QUANTITY};

/// Discount ladder, evaluated highest breakpoint first: `(min quantity, percent)`.
pub const DISCOUNT_LADDER: [(u32, u8); 4] = [(25, 20), (10, 15), (5, 10), (2, 5)];

/// Ceiling for any single price in a [`PriceList`] (1,000,000.00).
///
/// Keeps `(unit + surcharge) × MAX_ORDER_QUANTITY` well inside `i64`.
pub const MAX_UNIT_PRICE_CENTS: i64 = 100_000_000;

// =============================================================================
// Price List
// =============================================================================

/// Unit prices the engine works from.
///
/// The defaults are the storefront's list prices; the session layer can
/// override them from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceList {
    /// Base unit price of a standard card.
    pub standard_unit: Money,
    /// Base unit price of a personalized card.
    pub personalized_unit: Money,
    /// Flat per-card surcharge for B2B personalization.
    pub b2b_surcharge_per_unit: Money,
}

impl Default for PriceList {
    fn default() -> Self {
        PriceList {
            standard_unit: Money::from_cents(2900),
            personalized_unit: Money::from_cents(4900),
            b2b_surcharge_per_unit: Money::from_cents(1000),
        }
    }
}

impl PriceList {
    /// Base unit price for a card type, before any discount.
    pub fn base_unit_price(&self, card_type: CardType) -> Money {
        match card_type {
            CardType::Standard => self.standard_unit,
            CardType::Personalized => self.personalized_unit,
        }
    }

    /// Checks the list against the pricing rules.
    ///
    /// ## Rules
    /// - Every price is positive and at most [`MAX_UNIT_PRICE_CENTS`]
    /// - A standard card is always cheaper than a personalized one
    pub fn validate(&self) -> CoreResult<()> {
        let prices = [self.standard_unit, self.personalized_unit, self.b2b_surcharge_per_unit];

        if prices.iter().any(|p| !p.is_positive()) {
            return Err(CoreError::InvalidPriceList {
                reason: "all prices must be positive".to_string(),
            });
        }

        if prices.iter().any(|p| p.cents() > MAX_UNIT_PRICE_CENTS) {
            return Err(CoreError::InvalidPriceList {
                reason: format!(
                    "prices must not exceed {}",
                    Money::from_cents(MAX_UNIT_PRICE_CENTS)
                ),
            });
        }

        if self.standard_unit >= self.personalized_unit {
            return Err(CoreError::InvalidPriceList {
                reason: format!(
                    "standard unit price ({}) must be below personalized ({})",
                    self.standard_unit, self.personalized_unit
                ),
            });
        }

        Ok(())
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// Derived price of an order. Recomputed on every change, never stored.
///
/// ## Invariant
/// When `is_quote_only` is false:
/// `total == unit_price × quantity + customization_total`, exactly.
///
/// When `is_quote_only` is true every money field is zero. Use
/// [`PriceBreakdown::payable_total`] downstream so a quote-only order can
/// never be read as a 0.00 order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub quantity: u32,
    /// Unit price before the discount.
    pub base_unit_price: Money,
    /// Unit price after the discount.
    pub unit_price: Money,
    /// One of 0, 5, 10, 15, 20.
    pub discount_percent: u8,
    /// B2B surcharge × quantity, else zero.
    pub customization_total: Money,
    pub total: Money,
    pub is_quote_only: bool,
}

impl PriceBreakdown {
    fn quote_only(quantity: u32) -> Self {
        PriceBreakdown {
            quantity,
            base_unit_price: Money::zero(),
            unit_price: Money::zero(),
            discount_percent: 0,
            customization_total: Money::zero(),
            total: Money::zero(),
            is_quote_only: true,
        }
    }

    /// The amount checkout may charge, or `None` for quote-only orders.
    pub fn payable_total(&self) -> Option<Money> {
        (!self.is_quote_only).then_some(self.total)
    }

    /// Discount saved over list price across all cards.
    pub fn savings(&self) -> Money {
        (self.base_unit_price - self.unit_price).multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Discount percentage for a quantity. Ties at a breakpoint take the higher
/// discount (exactly 25 cards get 20%).
pub fn discount_percent_for(quantity: u32) -> u8 {
    DISCOUNT_LADDER
        .iter()
        .find(|(min, _)| quantity >= *min)
        .map(|(_, percent)| *percent)
        .unwrap_or(0)
}

/// Prices an order against the default [`PriceList`].
pub fn compute_price(config: &OrderConfiguration) -> PriceBreakdown {
    compute_price_with(config, &PriceList::default())
}

/// Prices an order against an explicit [`PriceList`].
pub fn compute_price_with(config: &OrderConfiguration, prices: &PriceList) -> PriceBreakdown {
    let quantity = config.quantity();

    if quantity >= QUOTE_ONLY_QUANTITY {
        return PriceBreakdown::quote_only(quantity);
    }

    let base_unit_price = prices.base_unit_price(config.card_type());
    let discount_percent = discount_percent_for(quantity);
    let unit_price = base_unit_price.apply_percentage_discount(u32::from(discount_percent) * 100);

    // The flag is re-checked against the quantity here even though the order
    // mutators already enforce it; a deserialized config may not have been.
    let customization_total = if quantity >= B2B_MIN_QUANTITY && config.b2b_personalization() {
        prices.b2b_surcharge_per_unit.multiply_quantity(quantity)
    } else {
        Money::zero()
    };

    PriceBreakdown {
        quantity,
        base_unit_price,
        unit_price,
        discount_percent,
        customization_total,
        total: unit_price.multiply_quantity(quantity) + customization_total,
        is_quote_only: false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn card_type_strategy() -> impl Strategy<Value = CardType> {
        prop_oneof![Just(CardType::Standard), Just(CardType::Personalized)]
    }

    #[test]
    fn test_single_standard_card() {
        let price = compute_price(&OrderConfiguration::new(1, CardType::Standard));
        assert_eq!(price.discount_percent, 0);
        assert_eq!(price.unit_price, Money::from_cents(2900));
        assert_eq!(price.total, Money::from_cents(2900));
        assert!(!price.is_quote_only);
    }

    #[test]
    fn test_five_personalized_cards() {
        let price = compute_price(&OrderConfiguration::new(5, CardType::Personalized));
        assert_eq!(price.discount_percent, 10);
        assert_eq!(price.unit_price, Money::from_major_minor(44, 10));
        assert_eq!(price.total, Money::from_major_minor(220, 50));
    }

    #[test]
    fn test_ten_standard_cards_with_b2b() {
        let config = OrderConfiguration::new(10, CardType::Standard).with_b2b_personalization(true);
        let price = compute_price(&config);
        assert_eq!(price.discount_percent, 15);
        assert_eq!(price.unit_price, Money::from_major_minor(24, 65));
        assert_eq!(price.customization_total, Money::from_major_minor(100, 0));
        assert_eq!(price.total, Money::from_major_minor(346, 50));
    }

    #[test]
    fn test_twenty_five_personalized_cards() {
        let price = compute_price(&OrderConfiguration::new(25, CardType::Personalized));
        assert_eq!(price.discount_percent, 20);
        assert_eq!(price.unit_price, Money::from_major_minor(39, 20));
        assert_eq!(price.total, Money::from_major_minor(980, 0));
    }

    #[test]
    fn test_fifty_cards_is_quote_only() {
        let config = OrderConfiguration::new(50, CardType::Standard).with_b2b_personalization(true);
        let price = compute_price(&config);
        assert!(price.is_quote_only);
        assert_eq!(price.discount_percent, 0);
        assert!(price.unit_price.is_zero());
        assert!(price.customization_total.is_zero());
        assert!(price.total.is_zero());
        assert_eq!(price.payable_total(), None);
    }

    #[test]
    fn test_discount_breakpoints() {
        let expected = [
            (1, 0),
            (2, 5),
            (4, 5),
            (5, 10),
            (9, 10),
            (10, 15),
            (24, 15),
            (25, 20),
            (49, 20),
        ];
        for (quantity, percent) in expected {
            assert_eq!(discount_percent_for(quantity), percent, "quantity {}", quantity);
        }
    }

    #[test]
    fn test_b2b_and_discount_combine_additively() {
        // 12 personalized: 4900 − 15% = 4165; 4165×12 + 1000×12
        let config = OrderConfiguration::new(12, CardType::Personalized).with_b2b_personalization(true);
        let price = compute_price(&config);
        assert_eq!(price.unit_price.cents(), 4165);
        assert_eq!(price.customization_total.cents(), 12_000);
        assert_eq!(price.total.cents(), 4165 * 12 + 12_000);
    }

    #[test]
    fn test_b2b_flag_ignored_when_deserialized_below_threshold() {
        let json = r#"{
            "quantity": 5,
            "cardType": "standard",
            "color": "black",
            "b2bPersonalization": true,
            "printedFields": { "name": "", "title": "", "company": "" }
        }"#;
        let config: OrderConfiguration = serde_json::from_str(json).unwrap();
        assert!(config.b2b_personalization());

        let price = compute_price(&config);
        assert!(price.customization_total.is_zero());
        assert_eq!(price.total, compute_price(&OrderConfiguration::new(5, CardType::Standard)).total);
    }

    #[test]
    fn test_custom_price_list() {
        let prices = PriceList {
            standard_unit: Money::from_cents(1000),
            personalized_unit: Money::from_cents(2000),
            b2b_surcharge_per_unit: Money::from_cents(250),
        };
        let config = OrderConfiguration::new(10, CardType::Standard).with_b2b_personalization(true);
        let price = compute_price_with(&config, &prices);
        assert_eq!(price.unit_price.cents(), 850);
        assert_eq!(price.total.cents(), 8500 + 2500);
        assert_eq!(price.savings().cents(), 1500);
    }

    #[test]
    fn test_price_list_validation() {
        assert!(PriceList::default().validate().is_ok());

        let inverted = PriceList {
            standard_unit: Money::from_cents(5000),
            ..PriceList::default()
        };
        assert!(matches!(inverted.validate(), Err(CoreError::InvalidPriceList { .. })));

        let free = PriceList {
            b2b_surcharge_per_unit: Money::zero(),
            ..PriceList::default()
        };
        assert!(free.validate().is_err());
    }

    #[test]
    fn test_price_list_rejects_unbounded_prices() {
        let huge = PriceList {
            standard_unit: Money::from_cents(300_000_000_000_000_000),
            personalized_unit: Money::from_cents(400_000_000_000_000_000),
            b2b_surcharge_per_unit: Money::from_cents(1),
        };
        assert!(matches!(huge.validate(), Err(CoreError::InvalidPriceList { .. })));

        let surcharge = PriceList {
            b2b_surcharge_per_unit: Money::from_cents(MAX_UNIT_PRICE_CENTS + 1),
            ..PriceList::default()
        };
        assert!(surcharge.validate().is_err());

        let ceiling = PriceList {
            standard_unit: Money::from_cents(MAX_UNIT_PRICE_CENTS - 1),
            personalized_unit: Money::from_cents(MAX_UNIT_PRICE_CENTS),
            b2b_surcharge_per_unit: Money::from_cents(MAX_UNIT_PRICE_CENTS),
        };
        assert!(ceiling.validate().is_ok());

        let order = OrderConfiguration::new(49, CardType::Personalized).with_b2b_personalization(true);
        let price = compute_price_with(&order, &ceiling);
        assert!(price.total.is_positive());
        assert_eq!(
            price.total,
            price.unit_price.multiply_quantity(49) + Money::from_cents(MAX_UNIT_PRICE_CENTS * 49)
        );
    }

    proptest! {
        #[test]
        fn prop_unit_price_never_increases_with_quantity(
            card_type in card_type_strategy(),
            quantity in 1u32..49,
        ) {
            let smaller = compute_price(&OrderConfiguration::new(quantity, card_type));
            let larger = compute_price(&OrderConfiguration::new(quantity + 1, card_type));
            prop_assert!(larger.unit_price <= smaller.unit_price);
        }

        #[test]
        fn prop_total_identity_holds(
            card_type in card_type_strategy(),
            quantity in 1u32..50,
            b2b in any::<bool>(),
        ) {
            let config = OrderConfiguration::new(quantity, card_type).with_b2b_personalization(b2b);
            let price = compute_price(&config);
            prop_assert!(!price.is_quote_only);
            prop_assert_eq!(
                price.total,
                price.unit_price.multiply_quantity(quantity) + price.customization_total
            );
        }

        #[test]
        fn prop_quote_only_from_fifty(
            card_type in card_type_strategy(),
            quantity in 50u32..10_000,
            b2b in any::<bool>(),
        ) {
            let config = OrderConfiguration::new(quantity, card_type).with_b2b_personalization(b2b);
            let price = compute_price(&config);
            prop_assert!(price.is_quote_only);
            prop_assert_eq!(price.payable_total(), None);
            prop_assert!(price.total.is_zero());
        }

        #[test]
        fn prop_b2b_has_no_effect_below_ten(
            card_type in card_type_strategy(),
            quantity in 1u32..10,
        ) {
            let plain = compute_price(&OrderConfiguration::new(quantity, card_type));
            let flagged = compute_price(
                &OrderConfiguration::new(quantity, card_type).with_b2b_personalization(true),
            );
            prop_assert_eq!(plain, flagged);
        }
    }
}
