// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Scalar Multiplication Engine
// ─────────────────────────────────────────────────────────────────────
//! Multiplication of a digit sequence by a single digit.
//!
//! The head is multiplied with ordinary carry propagation. The cycle is
//! then unrolled digit by digit, seeded with the carry out of the head,
//! until a `(carry, position in cycle)` state recurs. The carry stays
//! below the base, so at most `base × cycle_len` columns are produced.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use adic_types::Digit;

use crate::digits::{assert_base, DigitSequence, NOT_REPEATING};

/// `multiplier × seq` for a single digit `multiplier`.
///
/// # Panics
///
/// Panics if `base` is outside `[2, 256]` or `multiplier >= base`.
pub fn multiply_by_digit(base: u32, multiplier: Digit, seq: &DigitSequence) -> DigitSequence {
    assert_base(base);
    assert!(
        u32::from(multiplier) < base,
        "multiplier digit {multiplier} is not valid in base {base}"
    );
    if multiplier == 0 || seq.is_zero() {
        return DigitSequence::zero();
    }

    let m = u32::from(multiplier);
    let mut head: Vec<Digit> = Vec::with_capacity(seq.head().len() + 1);
    let mut carry = 0u32;
    for &d in seq.head() {
        let r = carry + m * u32::from(d);
        head.push((r % base) as Digit);
        carry = r / base;
    }

    if !seq.is_periodic() {
        head.push(carry as Digit);
        return DigitSequence::create(head, NOT_REPEATING.to_vec());
    }

    let cycle = seq.cycle();
    let mut unrolled: Vec<Digit> = Vec::new();
    let mut seen: HashMap<(u32, usize), usize> = HashMap::new();
    loop {
        let position = unrolled.len() % cycle.len();
        match seen.entry((carry, position)) {
            Entry::Occupied(first) => {
                let start = *first.get();
                log::trace!(
                    "multiply_by_digit: carry {carry} at cycle position {position} repeats, period {}",
                    unrolled.len() - start
                );
                let repetend = unrolled.split_off(start);
                head.extend(unrolled);
                return DigitSequence::create(head, repetend);
            }
            Entry::Vacant(slot) => {
                slot.insert(unrolled.len());
            }
        }
        let r = carry + m * u32::from(cycle[position]);
        unrolled.push((r % base) as Digit);
        carry = r / base;
    }
}
