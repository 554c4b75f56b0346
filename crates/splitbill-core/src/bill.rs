//! # Bill Pipeline
//!
//! Subtotal, tip and the [`split_bill`] entry point that strings every
//! stage together.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BillInput                                                              │
//! │     │                                                                   │
//! │     ├──► format_date ─────────────────────────────────┐                 │
//! │     ├──► validate_items, validate_tip_rate             │                 │
//! │     ├──► calculate_sub_total ──► calculate_tip ──┐     │                 │
//! │     │                                            ▼     │                 │
//! │     │                                  total = sub + tip                │
//! │     │                                            │     │                 │
//! │     └──► allocate (participants, shares) ──► reconcile │                 │
//! │                                                  │     │                 │
//! │                                                  ▼     ▼                 │
//! │                                                BillOutput               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::allocation::allocate;
use crate::date::format_date;
use crate::error::{BillError, BillResult};
use crate::money::Money;
use crate::reconcile::reconcile;
use crate::types::{BillInput, BillItem, BillOutput, TipRate};
use crate::validation::{validate_items, validate_tip_rate};

/// Sum of every item's price, shared and personal alike. No rounding.
pub fn calculate_sub_total(items: &[BillItem]) -> Money {
    items.iter().map(BillItem::price).sum()
}

/// Tip for the whole bill, rounded to the nearest 0.1 (ties away from zero).
///
/// ```rust
/// use splitbill_core::{calculate_tip, Money, TipRate};
///
/// let ten_percent = TipRate::from_bps(1000);
/// assert_eq!(calculate_tip(Money::from_cents(12340), ten_percent).cents(), 1230);
/// assert_eq!(calculate_tip(Money::from_cents(12350), ten_percent).cents(), 1240);
/// assert!(calculate_tip(Money::from_cents(10000), TipRate::zero()).is_zero());
/// ```
pub fn calculate_tip(sub_total: Money, tip_rate: TipRate) -> Money {
    sub_total.calculate_tip(tip_rate)
}

/// Splits a bill between everyone who ordered a personal item.
///
/// ## Errors
/// - [`BillError::InvalidDate`](crate::BillError::InvalidDate) for a date that
///   is not `YYYY-MM-DD`
/// - [`BillError::InvalidItem`](crate::BillError::InvalidItem) for a negative
///   price or a personal item with a blank owner
/// - [`BillError::NoParticipants`](crate::BillError::NoParticipants) when no
///   personal item names anyone
///
/// ## Example
/// ```rust
/// use splitbill_core::{split_bill, BillInput, BillItem, Money, TipRate};
///
/// let input = BillInput {
///     date: "2024-03-21".to_string(),
///     location: "開心小館".to_string(),
///     tip_rate: TipRate::from_bps(1000),
///     items: vec![
///         BillItem::shared("牛排", Money::from_cents(8200)),
///         BillItem::personal("橙汁", Money::from_cents(1000), "Alice"),
///         BillItem::personal("熱檸檬水", Money::from_cents(800), "Bob"),
///     ],
/// };
///
/// let output = split_bill(&input).unwrap();
/// assert_eq!(output.date, "2024年3月21日");
/// assert_eq!(output.total_amount.cents(), 11000);
/// assert_eq!(output.items[0].amount.cents(), 5610);
/// assert_eq!(output.items[1].amount.cents(), 5390);
/// ```
pub fn split_bill(input: &BillInput) -> BillResult<BillOutput> {
    let date = format_date(&input.date)?;
    validate_items(&input.items)?;
    validate_tip_rate(input.tip_rate).map_err(BillError::InvalidTipRate)?;

    let sub_total = calculate_sub_total(&input.items);
    let tip = calculate_tip(sub_total, input.tip_rate);
    let total_amount = sub_total + tip;

    let mut items = allocate(&input.items, input.tip_rate)?;
    let outcome = reconcile(total_amount, &mut items);

    debug!(
        sub_total = %sub_total,
        tip = %tip,
        total = %total_amount,
        participants = items.len(),
        adjusted = !outcome.is_noop(),
        "Bill split"
    );

    Ok(BillOutput {
        date,
        location: input.location.clone(),
        sub_total,
        tip,
        total_amount,
        items,
    })
}
