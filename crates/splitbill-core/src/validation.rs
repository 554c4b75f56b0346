//! # Validation Module
//!
//! Business rules checked before any arithmetic runs.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BillItem.price      0 ..= MAX_SUB_TOTAL        → OutOfRange            │
//! │  sum of prices       <= MAX_SUB_TOTAL           → OutOfRange            │
//! │  Personal.person     not blank                  → Required              │
//! │  tip rate            <= MAX_TIP_BPS             → OutOfRange            │
//! │  tip percentage      finite, 0 ..= 10000        → InvalidFormat/Range   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The bounds keep every later sum inside `i64` cents: a capped subtotal
//! with a capped tip is at most about 101 × 10^15 cents.
//!
//! A personal item with a blank owner would otherwise belong to nobody and
//! its price would drop out of every share, so it is rejected rather than
//! skipped.
//!
//! ## Usage
//! ```rust
//! use splitbill_core::money::Money;
//! use splitbill_core::validation::{validate_person, validate_price};
//!
//! assert!(validate_price(Money::from_cents(1099)).is_ok());
//! assert!(validate_person("").is_err());
//! ```

use crate::error::{BillError, BillResult, ValidationError};
use crate::money::Money;
use crate::types::{BillItem, TipRate};

/// Largest bill subtotal accepted, in cents (10 trillion major units).
pub const MAX_SUB_TOTAL: i64 = 1_000_000_000_000_000;

/// Largest tip rate accepted, in basis points (10000%).
pub const MAX_TIP_BPS: u32 = 1_000_000;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item price.
///
/// Zero is allowed (complimentary items).
///
/// ```rust
/// use splitbill_core::money::Money;
/// use splitbill_core::validation::validate_price;
///
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// assert!(validate_price(Money::from_cents(i64::MAX)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_SUB_TOTAL {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_SUB_TOTAL,
        });
    }

    Ok(())
}

/// Validates a participant identifier. Whitespace-only counts as blank.
pub fn validate_person(person: &str) -> ValidationResult<()> {
    if person.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "person".to_string(),
        });
    }

    Ok(())
}

/// Validates a tip rate given in basis points.
pub fn validate_tip_rate(rate: TipRate) -> ValidationResult<()> {
    if rate.bps() > MAX_TIP_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tip rate".to_string(),
            min: 0,
            max: MAX_TIP_BPS as i64,
        });
    }

    Ok(())
}

/// Validates a human tip percentage and converts it to a [`TipRate`].
///
/// Rates are held in basis points, so the percentage keeps two decimals:
/// `12.345` becomes 1235 bps (12.35%).
///
/// ```rust
/// use splitbill_core::validation::validate_tip_percentage;
///
/// assert_eq!(validate_tip_percentage(10.0).unwrap().bps(), 1000);
/// assert!(validate_tip_percentage(-5.0).is_err());
/// assert!(validate_tip_percentage(f64::NAN).is_err());
/// assert_eq!(validate_tip_percentage(12.345).unwrap().bps(), 1235);
/// ```
pub fn validate_tip_percentage(pct: f64) -> ValidationResult<TipRate> {
    if !pct.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "tip percentage".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    let max = MAX_TIP_BPS / 100;
    if pct < 0.0 || pct > max as f64 {
        return Err(ValidationError::OutOfRange {
            field: "tip percentage".to_string(),
            min: 0,
            max: max as i64,
        });
    }

    Ok(TipRate::from_percentage(pct))
}

// =============================================================================
// Item Validators
// =============================================================================

/// Validates one item; `index` is its position on the bill.
pub fn validate_item(index: usize, item: &BillItem) -> BillResult<()> {
    let wrap = |source| BillError::InvalidItem {
        index,
        name: item.name().to_string(),
        source,
    };

    validate_price(item.price()).map_err(wrap)?;

    if let Some(person) = item.person() {
        validate_person(person).map_err(wrap)?;
    }

    Ok(())
}

/// Validates every item, stopping at the first failure.
///
/// Also bounds the running subtotal; the item that pushes it past
/// [`MAX_SUB_TOTAL`] is the one reported.
pub fn validate_items(items: &[BillItem]) -> BillResult<()> {
    let mut sub_total: i64 = 0;

    for (index, item) in items.iter().enumerate() {
        validate_item(index, item)?;

        sub_total = sub_total
            .checked_add(item.price().cents())
            .filter(|total| *total <= MAX_SUB_TOTAL)
            .ok_or_else(|| BillError::InvalidItem {
                index,
                name: item.name().to_string(),
                source: ValidationError::OutOfRange {
                    field: "subtotal".to_string(),
                    min: 0,
                    max: MAX_SUB_TOTAL,
                },
            })?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
