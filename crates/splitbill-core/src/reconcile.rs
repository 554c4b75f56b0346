//! # Reconciliation
//!
//! Makes the per-person amounts add up to the bill total exactly.
//!
//! ## Why Amounts Drift
//! Every share is rounded to 0.1 on its own, and each person's tip is
//! taken from their own share rather than from the rounded bill-level tip.
//! Three people rounding up by 0.03 each leaves the split 0.1 over.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. difference = total − Σ amount            (zero → nothing to do)    │
//! │  2. spread     = round1(difference)                                     │
//! │  3. amount     = round1(amount + spread / N)  for every participant     │
//! │  4. residual   = total − Σ amount                                       │
//! │       residual > 0 → added to the first participant                    │
//! │       residual < 0 → taken from the first participant who can cover it │
//! │                      without going below zero                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! After step 4 `Σ amount == total` holds to the cent.

use tracing::debug;

use crate::money::Money;
use crate::types::PersonItem;

/// What [`reconcile`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reconciliation {
    /// `total − Σ amount` before any correction.
    pub difference: Money,
    /// The difference rounded to 0.1 and spread over everyone.
    pub spread: Money,
    /// What was left after spreading, settled on the front of the list.
    pub residual: Money,
}

impl Reconciliation {
    /// True when the amounts already matched the total.
    pub fn is_noop(&self) -> bool {
        self.difference.is_zero()
    }
}

/// Corrects `items` in place so their amounts sum to `total`.
///
/// An empty list is left alone.
///
/// ## Example
/// ```rust
/// use splitbill_core::{reconcile, Money, PersonItem};
///
/// let mut items = vec![
///     PersonItem::new("Alice", Money::from_cents(8210)),
///     PersonItem::new("Bob", Money::from_cents(8210)),
///     PersonItem::new("Charlie", Money::from_cents(8210)),
/// ];
/// reconcile(Money::from_cents(24640), &mut items);
///
/// assert_eq!(items[0].amount.cents(), 8220);
/// assert_eq!(items[1].amount.cents(), 8210);
/// ```
pub fn reconcile(total: Money, items: &mut [PersonItem]) -> Reconciliation {
    if items.is_empty() {
        return Reconciliation::default();
    }

    let difference = total - allocated(items);
    if difference.is_zero() {
        return Reconciliation::default();
    }

    let spread = difference.round_to_tenths();
    spread_evenly(spread, items);

    let residual = total - allocated(items);
    if !residual.is_zero() {
        absorb_residual(residual, items);
    }

    debug!(
        total = %total,
        difference = %difference,
        spread = %spread,
        residual = %residual,
        "Reconciled split"
    );

    Reconciliation {
        difference,
        spread,
        residual,
    }
}

fn allocated(items: &[PersonItem]) -> Money {
    items.iter().map(|item| item.amount).sum()
}

/// Adds `spread / N` to everyone, re-rounding each amount to 0.1.
///
/// Amounts never drop below zero here; anything clipped shows up in the
/// residual instead.
fn spread_evenly(spread: Money, items: &mut [PersonItem]) {
    let count = items.len() as i128;
    for item in items.iter_mut() {
        let numerator = item.amount.cents() as i128 * count + spread.cents() as i128;
        let adjusted = Money::from_ratio_rounded(numerator, count);
        item.amount = adjusted.max(Money::zero());
    }
}

/// Settles the last few cents on the front of the list.
fn absorb_residual(residual: Money, items: &mut [PersonItem]) {
    if !residual.is_negative() {
        items[0].amount += residual;
        return;
    }

    let owed = -residual;
    if let Some(item) = items.iter_mut().find(|item| item.amount >= owed) {
        item.amount -= owed;
        return;
    }

    // Nobody can cover it alone: take it in order until it is paid.
    let mut remaining = owed;
    for item in items.iter_mut() {
        let take = item.amount.max(Money::zero()).min(remaining);
        item.amount -= take;
        remaining -= take;
    }
    items[0].amount -= remaining;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(amounts: &[i64]) -> Vec<PersonItem> {
        ["Alice", "Bob", "Charlie", "Dave"]
            .iter()
            .zip(amounts)
            .map(|(name, cents)| PersonItem::new(*name, Money::from_cents(*cents)))
            .collect()
    }

    fn cents(items: &[PersonItem]) -> Vec<i64> {
        items.iter().map(|item| item.amount.cents()).collect()
    }

    #[test]
    fn test_exact_split_is_untouched() {
        let mut items = people(&[5610, 5390]);
        let outcome = reconcile(Money::from_cents(11000), &mut items);

        assert!(outcome.is_noop());
        assert_eq!(cents(&items), vec![5610, 5390]);
    }

    #[test]
    fn test_downward_adjustment_lands_on_first_participant() {
        let mut items = people(&[8840, 8620, 8620]);
        let outcome = reconcile(Money::from_cents(26070), &mut items);

        assert_eq!(cents(&items), vec![8830, 8620, 8620]);
        assert_eq!(outcome.difference.cents(), -10);
        assert_eq!(outcome.spread.cents(), -10);
        assert_eq!(outcome.residual.cents(), -10);
    }

    #[test]
    fn test_upward_adjustment_lands_on_first_participant() {
        let mut items = people(&[8210, 8210, 8210]);
        reconcile(Money::from_cents(24640), &mut items);
        assert_eq!(cents(&items), vec![8220, 8210, 8210]);
    }

    #[test]
    fn test_large_difference_is_spread_evenly() {
        let mut items = people(&[1000, 1000, 1000]);
        let outcome = reconcile(Money::from_cents(3300), &mut items);

        assert_eq!(cents(&items), vec![1100, 1100, 1100]);
        assert!(outcome.residual.is_zero());
    }

    #[test]
    fn test_single_participant_takes_whole_difference() {
        let mut items = people(&[5000]);
        reconcile(Money::from_cents(5030), &mut items);
        assert_eq!(cents(&items), vec![5030]);
    }

    #[test]
    fn test_cent_level_total_is_matched_exactly() {
        let mut items = people(&[500, 500]);
        reconcile(Money::from_cents(1005), &mut items);
        assert_eq!(items.iter().map(|i| i.amount.cents()).sum::<i64>(), 1005);
    }

    #[test]
    fn test_negative_residual_skips_participant_at_zero() {
        let mut items = people(&[0, 60, 60]);
        reconcile(Money::from_cents(110), &mut items);

        assert_eq!(cents(&items), vec![0, 50, 60]);
    }

    #[test]
    fn test_negative_residual_taken_in_order_when_nobody_covers_it() {
        let mut items = people(&[10, 10, 10, 10]);
        absorb_residual(Money::from_cents(-30), &mut items);
        assert_eq!(cents(&items), vec![0, 0, 0, 10]);
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut items: Vec<PersonItem> = Vec::new();
        let outcome = reconcile(Money::from_cents(1000), &mut items);
        assert!(outcome.is_noop());
        assert!(items.is_empty());
    }
}
