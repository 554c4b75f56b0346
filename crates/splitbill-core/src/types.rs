//! # Domain Types
//!
//! The records that flow in and out of [`split_bill`](crate::split_bill).
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT                                  OUTPUT                          │
//! │  ┌─────────────────┐                    ┌─────────────────┐             │
//! │  │   BillInput     │                    │   BillOutput    │             │
//! │  │  ─────────────  │                    │  ─────────────  │             │
//! │  │  date (ISO)     │   split_bill()     │  date (年月日)  │             │
//! │  │  location       │ ─────────────────► │  location       │             │
//! │  │  tip_rate       │                    │  sub_total      │             │
//! │  │  items[]        │                    │  tip            │             │
//! │  └───────┬─────────┘                    │  total_amount   │             │
//! │          │                              │  items[]        │             │
//! │  ┌───────▼─────────┐                    └───────┬─────────┘             │
//! │  │    BillItem     │                    ┌───────▼─────────┐             │
//! │  │  Shared         │                    │   PersonItem    │             │
//! │  │  Personal+person│                    │  name, amount   │             │
//! │  └─────────────────┘                    └─────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tip Rate
// =============================================================================

/// Tip rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10%. Unsigned, so a negative tip
/// cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TipRate(u32);

impl TipRate {
    /// Creates a tip rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TipRate(bps)
    }

    /// Creates a tip rate from a percentage (for convenience).
    ///
    /// Negative or non-finite input saturates to zero; callers that accept
    /// user input validate it first with
    /// [`validate_tip_percentage`](crate::validation::validate_tip_percentage).
    pub fn from_percentage(pct: f64) -> Self {
        TipRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tip.
    #[inline]
    pub const fn zero() -> Self {
        TipRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TipRate {
    fn default() -> Self {
        TipRate::zero()
    }
}

// =============================================================================
// Bill Item
// =============================================================================

/// A line item on the bill.
///
/// The owner is part of the variant, so a personal item always has a
/// `person` field. Blank names are still representable and are rejected by
/// [`validate_item`](crate::validation::validate_item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BillItem {
    /// Split evenly across every participant.
    Shared { name: String, price: Money },
    /// Charged in full to `person`.
    Personal {
        name: String,
        price: Money,
        person: String,
    },
}

impl BillItem {
    pub fn shared(name: impl Into<String>, price: Money) -> Self {
        BillItem::Shared {
            name: name.into(),
            price,
        }
    }

    pub fn personal(name: impl Into<String>, price: Money, person: impl Into<String>) -> Self {
        BillItem::Personal {
            name: name.into(),
            price,
            person: person.into(),
        }
    }

    /// Label printed on the bill.
    pub fn name(&self) -> &str {
        match self {
            BillItem::Shared { name, .. } | BillItem::Personal { name, .. } => name,
        }
    }

    #[inline]
    pub fn price(&self) -> Money {
        match self {
            BillItem::Shared { price, .. } | BillItem::Personal { price, .. } => *price,
        }
    }

    /// The owner, for personal items.
    pub fn person(&self) -> Option<&str> {
        match self {
            BillItem::Shared { .. } => None,
            BillItem::Personal { person, .. } => Some(person),
        }
    }

    #[inline]
    pub fn is_shared(&self) -> bool {
        matches!(self, BillItem::Shared { .. })
    }
}

// =============================================================================
// Bill Input / Output
// =============================================================================

/// Everything needed to split one bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillInput {
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,

    /// Free text, passed through untouched.
    pub location: String,

    /// Tip applied to the whole bill.
    #[serde(default)]
    pub tip_rate: TipRate,

    /// Items in the order they appear on the bill.
    pub items: Vec<BillItem>,
}

/// One participant's share of the bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PersonItem {
    pub name: String,
    pub amount: Money,
}

impl PersonItem {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        PersonItem {
            name: name.into(),
            amount,
        }
    }
}

/// The split bill.
///
/// `items` are ordered by each participant's first personal item, and their
/// amounts add up to `total_amount` exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillOutput {
    /// Date rendered as `YYYY年M月D日`.
    pub date: String,
    pub location: String,
    pub sub_total: Money,
    pub tip: Money,
    /// `sub_total + tip`.
    pub total_amount: Money,
    pub items: Vec<PersonItem>,
}

impl BillOutput {
    /// Sum of every participant's amount.
    pub fn allocated_total(&self) -> Money {
        self.items.iter().map(|item| item.amount).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
