//! # splitbill-core: Pure Bill Splitting Logic
//!
//! This crate turns a restaurant bill into what each person owes. It is a
//! set of pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SplitBill Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    splitbill CLI (apps/)                        │   │
//! │  │    read JSON ──► split_bill ──► render text / JSON             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ splitbill-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌────────────┐ ┌───────────┐         │   │
//! │  │   │  types  │ │  money  │ │ allocation │ │ reconcile │         │   │
//! │  │   │BillInput│ │  Money  │ │participants│ │ drift fix │         │   │
//! │  │   │BillItem │ │ rounding│ │   shares   │ │           │         │   │
//! │  │   └─────────┘ └─────────┘ └────────────┘ └───────────┘         │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌────────────┐                        │   │
//! │  │   │  date   │ │  bill   │ │ validation │                        │   │
//! │  │   └─────────┘ └─────────┘ └────────────┘                        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Bill records (BillInput, BillItem, BillOutput, ...)
//! - [`money`] - Money type with integer arithmetic and 0.1 rounding
//! - [`date`] - `YYYY-MM-DD` → `YYYY年M月D日`
//! - [`bill`] - Subtotal, tip and the `split_bill` pipeline
//! - [`allocation`] - Participant discovery and per-person shares
//! - [`reconcile`] - Makes the shares add up to the total
//! - [`validation`] - Item rules checked before any arithmetic
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output; safe to call from any thread
//! 2. **Integer Money**: all amounts are cents; shares stay exact fractions until rounded
//! 3. **Exact Totals**: the per-person amounts always sum to the bill total
//! 4. **Explicit Errors**: bad dates, bad items and empty tables are typed errors
//!
//! ## Example Usage
//!
//! ```rust
//! use splitbill_core::{split_bill, BillInput, BillItem, Money, TipRate};
//!
//! let input = BillInput {
//!     date: "2024-03-21".to_string(),
//!     location: "開心小館".to_string(),
//!     tip_rate: TipRate::from_bps(1000), // 10%
//!     items: vec![
//!         BillItem::shared("牛排", Money::from_cents(19400)),
//!         BillItem::personal("橙汁", Money::from_cents(1000), "Alice"),
//!         BillItem::personal("橙汁", Money::from_cents(1000), "Bob"),
//!         BillItem::personal("橙汁", Money::from_cents(1000), "Charlie"),
//!     ],
//! };
//!
//! let output = split_bill(&input).unwrap();
//! assert_eq!(output.total_amount.to_string(), "246.4");
//! assert_eq!(output.items[0].amount.to_string(), "82.2");
//! assert_eq!(output.allocated_total(), output.total_amount);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocation;
pub mod bill;
pub mod date;
pub mod error;
pub mod money;
pub mod reconcile;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use allocation::{allocate, resolve_participants};
pub use bill::{calculate_sub_total, calculate_tip, split_bill};
pub use date::format_date;
pub use error::{BillError, BillResult, ValidationError};
pub use money::Money;
pub use reconcile::{reconcile, Reconciliation};
pub use types::*;
