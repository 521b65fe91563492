//! # Validation Module
//!
//! Input validation for values coming from the configurator form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront (TypeScript)                                       │
//! │  ├── Quantity picker only offers whole numbers ≥ 1                      │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session commands (Rust)                                       │
//! │  └── THIS MODULE: reject malformed input before it reaches              │
//! │      the pricing engine or the layout mutators                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core                                                          │
//! │  └── Clamps drags/scales; never sees malformed input                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nfcard_core::validation::{validate_quantity, validate_scale_input};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(0).is_err());
//! assert!(validate_scale_input(f64::NAN).is_err());
//! ```

use crate::error::ValidationError;
use crate::layout::AssetRef;
use crate::order::PrintedFields;
use crate::MAX_ORDER_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

pub const MAX_NAME_LEN: usize = 80;
pub const MAX_TITLE_LEN: usize = 80;
pub const MAX_COMPANY_LEN: usize = 120;
pub const MAX_ASSET_REF_LEN: usize = 128;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a card quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ORDER_QUANTITY (9999)
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ORDER_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: i64::from(MAX_ORDER_QUANTITY),
        });
    }

    Ok(())
}

/// Validates a raw scale slider value. Range is not checked: the layout
/// model clamps it.
pub fn validate_scale_input(scale: f64) -> ValidationResult<()> {
    require_finite("scale", scale)
}

/// Validates a drag delta.
pub fn validate_drag_delta(dx: f64, dy: f64) -> ValidationResult<()> {
    require_finite("dx", dx)?;
    require_finite("dy", dy)
}

/// Validates a preview zoom request.
pub fn validate_zoom_input(zoom: f64) -> ValidationResult<()> {
    require_finite("zoom", zoom)
}

fn require_finite(field: &str, value: f64) -> ValidationResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite {
            field: field.to_string(),
        })
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates the printed name/title/company.
///
/// ## Rules
/// - `name` must be non-empty when `name_required`
/// - Length limits: name 80, title 80, company 120 characters
pub fn validate_printed_fields(fields: &PrintedFields, name_required: bool) -> ValidationResult<()> {
    if name_required && fields.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    for (field, value, max) in [
        ("name", &fields.name, MAX_NAME_LEN),
        ("title", &fields.title, MAX_TITLE_LEN),
        ("company", &fields.company, MAX_COMPANY_LEN),
    ] {
        if value.trim().chars().count() > max {
            return Err(ValidationError::TooLong {
                field: field.to_string(),
                max,
            });
        }
    }

    Ok(())
}

/// Validates an asset handle handed over by the upload flow.
pub fn validate_asset_ref(asset: &AssetRef) -> ValidationResult<()> {
    let id = asset.as_str();

    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "asset".to_string(),
        });
    }

    if id.len() > MAX_ASSET_REF_LEN {
        return Err(ValidationError::TooLong {
            field: "asset".to_string(),
            max: MAX_ASSET_REF_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(49).is_ok());
        assert!(validate_quantity(50).is_ok());
        assert!(validate_quantity(9999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(10_000).is_err());
    }

    #[test]
    fn test_validate_floats() {
        assert!(validate_scale_input(3.0).is_ok());
        assert!(validate_scale_input(f64::NAN).is_err());
        assert!(validate_drag_delta(-500.0, 2.0).is_ok());
        assert_eq!(
            validate_drag_delta(1.0, f64::NEG_INFINITY),
            Err(ValidationError::NotFinite {
                field: "dy".to_string()
            })
        );
        assert!(validate_zoom_input(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_printed_fields() {
        let blank = PrintedFields::default();
        assert!(validate_printed_fields(&blank, false).is_ok());
        assert!(validate_printed_fields(&blank, true).is_err());
        assert!(validate_printed_fields(&PrintedFields::new("   ", "", ""), true).is_err());
        assert!(validate_printed_fields(&PrintedFields::new("Ada", "", ""), true).is_ok());

        let long_company = PrintedFields::new("Ada", "", "x".repeat(121));
        assert_eq!(
            validate_printed_fields(&long_company, true),
            Err(ValidationError::TooLong {
                field: "company".to_string(),
                max: 120
            })
        );
    }

    #[test]
    fn test_validate_asset_ref() {
        assert!(validate_asset_ref(&AssetRef::generate()).is_ok());
        assert!(validate_asset_ref(&AssetRef::new("")).is_err());
        assert!(validate_asset_ref(&AssetRef::new("a".repeat(129))).is_err());
    }
}
