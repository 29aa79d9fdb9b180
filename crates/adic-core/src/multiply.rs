// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Full Multiplication Engine
// ─────────────────────────────────────────────────────────────────────
//! Long multiplication of two digit sequences.
//!
//! A finite multiplier is handled by textbook long multiplication:
//! shift the multiplicand, multiply by one digit, accumulate with the
//! summation engine.
//!
//! A periodic multiplier never runs out of digits, so the running sum
//! is processed as a stream instead. After multiplier digit `i` has been
//! added, digits `0..=i` of the product are final and only the part
//! above them (the *remainder*) can still change:
//!
//! ```text
//! total     = remainder + d_i × multiplicand
//! emit        total.digit(0)
//! remainder = total >> 1
//! ```
//!
//! Inside the multiplier's periodic region the pair
//! `(multiplier effective index, remainder)` determines every later
//! digit. The remainder only takes finitely many canonical values (as a
//! rational it has the multiplicand's denominator and a bounded
//! numerator), so the pair must recur; the digits emitted since its
//! first occurrence are the period of the product. Nothing is assumed
//! about that period: it is frequently shorter than the least common
//! multiple of the factors' periods, and can be longer than either.
//!
//! Each step runs the summation engine with its own cycle detection, so
//! this is a search nested inside another search and has no useful
//! running-time bound for long periods.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use adic_types::Digit;

use crate::digits::{assert_base, DigitSequence};
use crate::scalar::multiply_by_digit;
use crate::sum::sum;

/// `multiplier × multiplicand` in the given base.
///
/// # Panics
///
/// Panics if `base` is outside `[2, 256]`.
pub fn multiply(
    base: u32,
    multiplier: &DigitSequence,
    multiplicand: &DigitSequence,
) -> DigitSequence {
    assert_base(base);
    if multiplier.is_zero() || multiplicand.is_zero() {
        return DigitSequence::zero();
    }
    if multiplier.is_periodic() {
        multiply_streaming(base, multiplier, multiplicand)
    } else {
        multiply_finite(base, multiplier, multiplicand)
    }
}

/// Long multiplication by a finite multiplier.
pub(crate) fn multiply_finite(
    base: u32,
    multiplier: &DigitSequence,
    multiplicand: &DigitSequence,
) -> DigitSequence {
    let mut running = DigitSequence::zero();
    for (i, &d) in multiplier.head().iter().enumerate() {
        if d == 0 {
            continue;
        }
        let partial = multiply_by_digit(base, d, &multiplicand.left_shift(i));
        running = sum(base, [&running, &partial]);
    }
    running
}

/// Digit-streaming multiplication with outer cycle detection.
///
/// Correct for any multiplier; only needed when the multiplier repeats.
pub(crate) fn multiply_streaming(
    base: u32,
    multiplier: &DigitSequence,
    multiplicand: &DigitSequence,
) -> DigitSequence {
    let mut partials: Vec<Option<DigitSequence>> = vec![None; base as usize];
    let mut remainder = DigitSequence::zero();
    let mut emitted: Vec<Digit> = Vec::new();
    let mut seen: HashMap<(usize, DigitSequence), usize> = HashMap::new();

    let mut i = 0;
    loop {
        let digit = multiplier.digit_at(i);
        if digit.repeating {
            if !multiplier.is_periodic() {
                // Only zeros remain: what is left is the remainder itself.
                let mut head = emitted;
                head.extend_from_slice(remainder.head());
                return DigitSequence::create(head, remainder.cycle().to_vec());
            }
            match seen.entry((digit.index, remainder.clone())) {
                Entry::Occupied(first) => {
                    let start = *first.get();
                    log::debug!(
                        "multiply: product repeats from position {start} with period {}",
                        i - start
                    );
                    let cycle = emitted.split_off(start);
                    return DigitSequence::create(emitted, cycle);
                }
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
            }
        }

        let total = if digit.value == 0 {
            remainder
        } else {
            let partial = partials[usize::from(digit.value)]
                .get_or_insert_with(|| multiply_by_digit(base, digit.value, multiplicand));
            sum(base, [&remainder, &*partial])
        };
        emitted.push(total.digit_at(0).value);
        remainder = total.right_shift(1);
        i += 1;
    }
}

impl DigitSequence {
    /// `self × other` in the given base.
    pub fn times(&self, base: u32, other: &DigitSequence) -> DigitSequence {
        multiply(base, other, self)
    }
}
