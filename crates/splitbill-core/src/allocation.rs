//! # Allocation
//!
//! Works out who is at the table and what each of them owes before any
//! reconciliation.
//!
//! ## Per-Participant Share
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  N = number of participants                                             │
//! │                                                                         │
//! │  raw(p)    = personal(p) + shared / N                                   │
//! │  amount(p) = round1( raw(p) × (1 + tip%) )                              │
//! │                                                                         │
//! │  Kept as the exact fraction                                             │
//! │      (personal(p)·N + shared) · (10000 + bps)                           │
//! │      ────────────────────────────────────────   cents                  │
//! │                    N · 10000                                            │
//! │  and rounded once, half away from zero.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The per-person tip comes from each person's own share, so the amounts
//! need not add up to the bill-level tip. [`reconcile()`](crate::reconcile())
//! settles the difference.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{BillError, BillResult};
use crate::money::Money;
use crate::types::{BillItem, PersonItem, TipRate};

/// Lists the distinct participants, in order of their first personal item.
///
/// Shared items name nobody and are skipped.
///
/// ```rust
/// use splitbill_core::{resolve_participants, BillItem, Money};
///
/// let items = vec![
///     BillItem::personal("橙汁", Money::from_cents(1000), "Bob"),
///     BillItem::shared("牛排", Money::from_cents(8200)),
///     BillItem::personal("熱檸檬水", Money::from_cents(800), "Alice"),
///     BillItem::personal("薯條", Money::from_cents(1200), "Bob"),
/// ];
/// assert_eq!(resolve_participants(&items), vec!["Bob", "Alice"]);
/// ```
pub fn resolve_participants(items: &[BillItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(BillItem::person)
        .filter(|person| seen.insert(*person))
        .map(str::to_string)
        .collect()
}

/// Sum of every shared item's price.
fn shared_total(items: &[BillItem]) -> Money {
    items
        .iter()
        .filter(|item| item.is_shared())
        .map(BillItem::price)
        .sum()
}

/// Sum of the personal items owned by `person`.
fn personal_total(items: &[BillItem], person: &str) -> Money {
    items
        .iter()
        .filter(|item| item.person() == Some(person))
        .map(BillItem::price)
        .sum()
}

/// Numerator of `personal + shared / participants`, over `participants`.
///
/// Shared items are divided across every resolved participant. Participants
/// only come from personal items, so everyone in the divisor has ordered
/// something of their own.
fn even_share_numerator(personal: Money, shared: Money, participants: usize) -> i128 {
    personal.cents() as i128 * participants as i128 + shared.cents() as i128
}

/// Computes each participant's amount, tip included, rounded to 0.1.
///
/// ## Errors
/// [`BillError::NoParticipants`] when no personal item names anyone; the
/// shared items would otherwise be divided by zero.
pub fn allocate(items: &[BillItem], tip_rate: TipRate) -> BillResult<Vec<PersonItem>> {
    let participants = resolve_participants(items);
    if participants.is_empty() {
        return Err(BillError::NoParticipants);
    }

    let count = participants.len();
    let shared = shared_total(items);
    debug!(participants = count, shared = %shared, tip_bps = tip_rate.bps(), "Allocating bill");

    let allocated = participants
        .into_iter()
        .map(|name| {
            let personal = personal_total(items, &name);
            let numerator = even_share_numerator(personal, shared, count);
            let (numerator, denominator) = Money::with_tip_ratio(numerator, count as i128, tip_rate);
            let amount = Money::from_ratio_rounded(numerator, denominator);

            debug!(person = %name, personal = %personal, amount = %amount, "Allocated share");
            PersonItem { name, amount }
        })
        .collect();

    Ok(allocated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(value: i64) -> Money {
        Money::from_cents(value)
    }

    #[test]
    fn test_resolve_participants_dedups_in_first_seen_order() {
        let items = vec![
            BillItem::personal("a", cents(100), "Alice"),
            BillItem::personal("b", cents(100), "Bob"),
            BillItem::personal("c", cents(100), "Alice"),
            BillItem::shared("d", cents(100)),
            BillItem::personal("e", cents(100), "Charlie"),
        ];
        assert_eq!(resolve_participants(&items), vec!["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_resolve_participants_ignores_shared_items() {
        let items = vec![BillItem::shared("牛排", cents(8200))];
        assert!(resolve_participants(&items).is_empty());
        assert!(resolve_participants(&[]).is_empty());
    }

    #[test]
    fn test_allocate_exact_split() {
        let items = vec![
            BillItem::shared("牛排", cents(8200)),
            BillItem::personal("橙汁", cents(1000), "Alice"),
            BillItem::personal("熱檸檬水", cents(800), "Bob"),
        ];

        let shares = allocate(&items, TipRate::from_bps(1000)).unwrap();
        assert_eq!(
            shares,
            vec![
                PersonItem::new("Alice", cents(5610)),
                PersonItem::new("Bob", cents(5390)),
            ]
        );
    }

    #[test]
    fn test_allocate_rounds_each_share_once() {
        // 211 shared over 3: Alice 80.33 × 1.1 = 88.37 → 88.4
        let items = vec![
            BillItem::shared("牛排", cents(19900)),
            BillItem::personal("橙汁", cents(1000), "Alice"),
            BillItem::shared("薯條", cents(1200)),
            BillItem::personal("熱檸檬水", cents(800), "Bob"),
            BillItem::personal("熱檸檬水", cents(800), "Charlie"),
        ];

        let shares = allocate(&items, TipRate::from_bps(1000)).unwrap();
        let amounts: Vec<i64> = shares.iter().map(|p| p.amount.cents()).collect();
        assert_eq!(amounts, vec![8840, 8620, 8620]);
    }

    #[test]
    fn test_shared_items_split_evenly_across_every_participant() {
        // Bob's only personal item is free; he still carries half the pizza.
        let items = vec![
            BillItem::shared("pizza", cents(2000)),
            BillItem::personal("beer", cents(600), "Alice"),
            BillItem::personal("water", cents(0), "Bob"),
        ];

        let shares = allocate(&items, TipRate::zero()).unwrap();
        assert_eq!(shares[0].amount, cents(1600));
        assert_eq!(shares[1].amount, cents(1000));
    }

    #[test]
    fn test_allocate_without_participants_fails() {
        let items = vec![BillItem::shared("牛排", cents(8200))];
        assert_eq!(
            allocate(&items, TipRate::from_bps(1000)),
            Err(BillError::NoParticipants)
        );
        assert_eq!(allocate(&[], TipRate::zero()), Err(BillError::NoParticipants));
    }

    #[test]
    fn test_allocate_without_tip() {
        let items = vec![
            BillItem::personal("a", cents(1000), "Alice"),
            BillItem::personal("b", cents(1000), "Alice"),
        ];
        let shares = allocate(&items, TipRate::zero()).unwrap();
        assert_eq!(shares, vec![PersonItem::new("Alice", cents(2000))]);
    }
}
