// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Algebraic Property Checks
// ─────────────────────────────────────────────────────────────────────
//! Exhaustive checks over every canonical value with short head and
//! cycle in small bases. Arithmetic results are cross-checked against
//! ordinary integer arithmetic modulo `base^N`.

use std::collections::BTreeSet;

use adic_types::Digit;

use crate::digits::DigitSequence;
use crate::multiply::multiply;
use crate::negate::negate;
use crate::scalar::multiply_by_digit;
use crate::sum::sum;

/// All raw digit strings of exactly `len` digits.
fn words(base: u32, len: usize) -> Vec<Vec<Digit>> {
    let mut out = vec![Vec::new()];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|w| {
                (0..base).map(move |d| {
                    let mut next = w.clone();
                    next.push(d as Digit);
                    next
                })
            })
            .collect();
    }
    out
}

/// Every distinct canonical value with `head.len() <= max_head` and
/// `cycle.len() <= max_cycle`.
fn all_values(base: u32, max_head: usize, max_cycle: usize) -> Vec<DigitSequence> {
    let mut values = BTreeSet::new();
    for head_len in 0..=max_head {
        for cycle_len in 1..=max_cycle {
            for head in words(base, head_len) {
                for cycle in words(base, cycle_len) {
                    values.insert(DigitSequence::create(head.clone(), cycle).to_string());
                }
            }
        }
    }
    values.into_iter().map(|s| s.parse().unwrap()).collect()
}

/// Low `n` digits as an integer, i.e. the value modulo `base^n`.
fn low_digits(base: u32, seq: &DigitSequence, n: usize) -> u128 {
    (0..n)
        .rev()
        .fold(0u128, |acc, i| acc * u128::from(base) + u128::from(seq.digit_at(i).value))
}

/// Digits compared against machine arithmetic; `base^PRECISION^2` must fit in u128.
fn precision(base: u32) -> usize {
    match base {
        2 => 40,
        3 => 25,
        _ => 15,
    }
}

#[test]
fn test_canonical_uniqueness() {
    for base in [2, 3] {
        for x in all_values(base, 2, 3) {
            let (head, cycle) = (x.head().to_vec(), x.cycle().to_vec());

            let mut doubled = cycle.clone();
            doubled.extend_from_slice(&cycle);
            assert_eq!(DigitSequence::create(head.clone(), doubled), x);

            let mut unrolled = head.clone();
            unrolled.extend_from_slice(&cycle);
            assert_eq!(DigitSequence::create(unrolled, cycle.clone()), x);

            let mut one_more = head.clone();
            one_more.push(cycle[0]);
            let mut rotated = cycle.clone();
            rotated.rotate_left(1);
            assert_eq!(DigitSequence::create(one_more, rotated), x);
        }
    }
}

#[test]
fn test_text_round_trip() {
    for base in [2, 3, 10] {
        let max_head = if base == 10 { 1 } else { 2 };
        for x in all_values(base, max_head, 2) {
            assert_eq!(x.to_string().parse::<DigitSequence>().unwrap(), x);
        }
    }
}

#[test]
fn test_additive_identity_and_inverse() {
    let zero = DigitSequence::zero();
    for base in [2, 3, 10] {
        let max_head = if base == 10 { 1 } else { 2 };
        for x in all_values(base, max_head, 2) {
            assert_eq!(sum(base, [&x, &zero]), x);
            let negated = negate(base, &x);
            assert!(sum(base, [&x, &negated]).is_zero(), "{x} in base {base}");
            assert_eq!(negate(base, &negated), x);
        }
    }
}

#[test]
fn test_sum_commutes_and_matches_integers() {
    for base in [2, 3, 10] {
        let values = if base == 10 {
            all_values(base, 1, 1)
        } else {
            all_values(base, 2, 2)
        };
        let n = precision(base);
        let modulus = u128::from(base).pow(n as u32);
        for x in &values {
            for y in &values {
                let total = sum(base, [x, y]);
                assert_eq!(total, sum(base, [y, x]));
                assert_eq!(
                    low_digits(base, &total, n),
                    (low_digits(base, x, n) + low_digits(base, y, n)) % modulus,
                    "{x} + {y} in base {base}"
                );
            }
        }
    }
}

#[test]
fn test_sum_associates() {
    for base in [2, 3] {
        let values = all_values(base, 1, 2);
        for x in &values {
            for y in &values {
                let xy = sum(base, [x, y]);
                for z in &values {
                    let yz = sum(base, [y, z]);
                    let left = sum(base, [&xy, z]);
                    assert_eq!(left, sum(base, [x, &yz]));
                    assert_eq!(left, sum(base, [x, y, z]));
                }
            }
        }
    }
}

#[test]
fn test_scalar_multiplication_matches_integers() {
    for base in [2, 3, 10] {
        let max_head = if base == 10 { 1 } else { 2 };
        let n = precision(base);
        let modulus = u128::from(base).pow(n as u32);
        for x in all_values(base, max_head, 2) {
            for d in 0..base {
                let product = multiply_by_digit(base, d as Digit, &x);
                assert_eq!(
                    low_digits(base, &product, n),
                    u128::from(d) * low_digits(base, &x, n) % modulus,
                    "{d} × {x} in base {base}"
                );
            }
        }
    }
}

#[test]
fn test_multiplication_commutes_and_matches_integers() {
    for base in [2, 3] {
        let values = all_values(base, 1, 2);
        let n = precision(base);
        let modulus = u128::from(base).pow(n as u32);
        for x in &values {
            for y in &values {
                let product = multiply(base, x, y);
                assert_eq!(product, multiply(base, y, x), "{x} × {y} in base {base}");
                assert_eq!(
                    low_digits(base, &product, n),
                    low_digits(base, x, n) * low_digits(base, y, n) % modulus,
                    "{x} × {y} in base {base}"
                );
            }
        }
    }
}

#[test]
fn test_distributivity_finite() {
    let values: Vec<DigitSequence> = [0u64, 1, 7, 42, 99, 123, 5000, 98765]
        .iter()
        .map(|&v| DigitSequence::from_u64(10, v))
        .collect();
    for x in &values {
        for y in &values {
            for z in &values {
                let left = multiply(10, x, &sum(10, [y, z]));
                let right = sum(10, [&multiply(10, x, y), &multiply(10, x, z)]);
                assert_eq!(left, right, "{x} × ({y} + {z})");
            }
        }
    }
}

#[test]
fn test_distributivity_periodic() {
    let values = all_values(2, 1, 2);
    for x in &values {
        for y in &values {
            for z in &values {
                let left = multiply(2, x, &sum(2, [y, z]));
                let right = sum(2, [&multiply(2, x, y), &multiply(2, x, z)]);
                assert_eq!(left, right, "{x} × ({y} + {z}) in base 2");
            }
        }
    }
}
