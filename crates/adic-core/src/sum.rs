// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Summation Engine
// ─────────────────────────────────────────────────────────────────────
//! Exact addition of any number of digit sequences.
//!
//! Digits are added column by column with an ordinary carry. Once every
//! summand is inside its periodic region, the column state is
//! `(carry, effective index of each summand)`. That state fully
//! determines all further output, so the first time a state recurs the
//! digits emitted since its first occurrence are the period of the sum.
//!
//! The carry never exceeds `k - 1` for `k` summands, so the state space
//! is bounded by `k × Π cycle_len` and the loop always terminates. It
//! may, however, have to walk the full product of the periods: there is
//! no bound on running time or memory beyond that.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use adic_types::Digit;

use crate::digits::{assert_base, DigitSequence, NOT_REPEATING};

/// Column state once all summands repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ColumnState {
    carry: u64,
    indices: Vec<usize>,
}

/// Sum of all `summands` in the given base.
///
/// An empty input sums to zero; a single summand is returned unchanged.
///
/// # Panics
///
/// Panics if `base` is outside `[2, 256]`.
pub fn sum<'a, I>(base: u32, summands: I) -> DigitSequence
where
    I: IntoIterator<Item = &'a DigitSequence>,
{
    assert_base(base);
    let summands: Vec<&DigitSequence> = summands.into_iter().collect();
    match summands.as_slice() {
        [] => return DigitSequence::zero(),
        [single] => return (*single).clone(),
        _ => {}
    }

    let base = u64::from(base);
    let periodic_from = summands.iter().map(|s| s.head().len()).max().unwrap_or(0);
    let any_periodic = summands.iter().any(|s| s.is_periodic());

    let mut digits: Vec<Digit> = Vec::with_capacity(periodic_from + 1);
    let mut seen: HashMap<ColumnState, usize> = HashMap::new();
    let mut carry = 0u64;
    let mut i = 0;
    loop {
        if i >= periodic_from {
            if !any_periodic && carry == 0 {
                return DigitSequence::create(digits, NOT_REPEATING.to_vec());
            }
            let state = ColumnState {
                carry,
                indices: summands.iter().map(|s| s.effective_index(i)).collect(),
            };
            match seen.entry(state) {
                Entry::Occupied(first) => {
                    let start = *first.get();
                    log::trace!("sum: state at {i} first seen at {start}, period {}", i - start);
                    let cycle = digits.split_off(start);
                    return DigitSequence::create(digits, cycle);
                }
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
            }
        }

        let total = carry
            + summands
                .iter()
                .map(|s| u64::from(s.digit_at(i).value))
                .sum::<u64>();
        digits.push((total % base) as Digit);
        carry = total / base;
        i += 1;
    }
}

impl DigitSequence {
    /// `self + other` in the given base.
    pub fn plus(&self, base: u32, other: &DigitSequence) -> DigitSequence {
        sum(base, [self, other])
    }
}
