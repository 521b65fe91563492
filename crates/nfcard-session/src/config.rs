//! # Configurator Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     NFCARD_CURRENCY_SYMBOL=€                                            │
//! │     NFCARD_STANDARD_PRICE_CENTS=2900                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     ~/.config/nfcard/configurator.toml (Linux)                          │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [currency]
//! code = "EUR"
//! symbol = "€"
//!
//! [pricing]
//! standard_unit_cents = 2900
//! personalized_unit_cents = 4900
//! b2b_surcharge_cents = 1000
//!
//! [preview]
//! default_zoom = 1.0
//! show_guides = true
//! show_bleed = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use nfcard_core::preview::{PreviewState, MAX_ZOOM, MIN_ZOOM};
use nfcard_core::{Money, PriceList};

use crate::error::{ConfigError, ConfigResult};

pub const CONFIG_FILE_NAME: &str = "configurator.toml";

// =============================================================================
// Sections
// =============================================================================

/// Currency shown next to prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// ISO 4217 code
    #[serde(default = "default_currency_code")]
    pub code: String,

    /// Display symbol
    #[serde(default = "default_currency_symbol")]
    pub symbol: String,
}

fn default_currency_code() -> String {
    "EUR".to_string()
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            code: default_currency_code(),
            symbol: default_currency_symbol(),
        }
    }
}

/// List prices, in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSettings {
    #[serde(default = "default_standard_unit")]
    pub standard_unit_cents: i64,

    #[serde(default = "default_personalized_unit")]
    pub personalized_unit_cents: i64,

    #[serde(default = "default_b2b_surcharge")]
    pub b2b_surcharge_cents: i64,
}

fn default_standard_unit() -> i64 {
    PriceList::default().standard_unit.cents()
}

fn default_personalized_unit() -> i64 {
    PriceList::default().personalized_unit.cents()
}

fn default_b2b_surcharge() -> i64 {
    PriceList::default().b2b_surcharge_per_unit.cents()
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            standard_unit_cents: default_standard_unit(),
            personalized_unit_cents: default_personalized_unit(),
            b2b_surcharge_cents: default_b2b_surcharge(),
        }
    }
}

impl PricingSettings {
    pub fn price_list(&self) -> PriceList {
        PriceList {
            standard_unit: Money::from_cents(self.standard_unit_cents),
            personalized_unit: Money::from_cents(self.personalized_unit_cents),
            b2b_surcharge_per_unit: Money::from_cents(self.b2b_surcharge_cents),
        }
    }
}

/// Initial print preview controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewSettings {
    #[serde(default = "default_zoom")]
    pub default_zoom: f64,

    #[serde(default)]
    pub show_guides: bool,

    #[serde(default)]
    pub show_bleed: bool,
}

fn default_zoom() -> f64 {
    1.0
}

impl Default for PreviewSettings {
    fn default() -> Self {
        PreviewSettings {
            default_zoom: default_zoom(),
            show_guides: false,
            show_bleed: false,
        }
    }
}

impl PreviewSettings {
    pub fn initial_state(&self) -> PreviewState {
        PreviewState::new(self.default_zoom, self.show_guides, self.show_bleed)
    }
}

// =============================================================================
// Configurator Config
// =============================================================================

/// Complete configurator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfiguratorConfig {
    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub preview: PreviewSettings,
}

impl ConfiguratorConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (configurator.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading configurator config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load configurator config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a config file without applying overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let code = &self.currency.code;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::Invalid(format!(
                "currency code must be three uppercase letters, got: {}",
                code
            )));
        }

        if self.currency.symbol.trim().is_empty() {
            return Err(ConfigError::Invalid("currency symbol must not be empty".into()));
        }

        self.pricing
            .price_list()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let zoom = self.preview.default_zoom;
        if !zoom.is_finite() || !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
            return Err(ConfigError::Invalid(format!(
                "default_zoom must be between {} and {}, got: {}",
                MIN_ZOOM, MAX_ZOOM, zoom
            )));
        }

        Ok(())
    }

    /// Applies `NFCARD_*` overrides from `lookup` (the process environment in
    /// production). Unparseable values are logged and skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup("NFCARD_CURRENCY_CODE") {
            debug!(code = %code, "Overriding currency code from environment");
            self.currency.code = code;
        }

        if let Some(symbol) = lookup("NFCARD_CURRENCY_SYMBOL") {
            self.currency.symbol = symbol;
        }

        let cents_overrides = [
            ("NFCARD_STANDARD_PRICE_CENTS", &mut self.pricing.standard_unit_cents),
            ("NFCARD_PERSONALIZED_PRICE_CENTS", &mut self.pricing.personalized_unit_cents),
            ("NFCARD_B2B_SURCHARGE_CENTS", &mut self.pricing.b2b_surcharge_cents),
        ];
        for (key, target) in cents_overrides {
            if let Some(raw) = lookup(key) {
                match raw.trim().parse::<i64>() {
                    Ok(cents) => {
                        debug!(key, cents, "Overriding price from environment");
                        *target = cents;
                    }
                    Err(_) => warn!(key, value = %raw, "Ignoring non-numeric price override"),
                }
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "nfcard", "configurator")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// The price list the pricing engine should use.
    pub fn price_list(&self) -> PriceList {
        self.pricing.price_list()
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use nfcard_core::Money;
    /// use nfcard_session::config::ConfiguratorConfig;
    ///
    /// let config = ConfiguratorConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(34_650)), "€346.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.cents() < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency.symbol,
            amount.major().abs(),
            amount.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
