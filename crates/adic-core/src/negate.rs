// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Negation Engine
// ─────────────────────────────────────────────────────────────────────
//! Additive inverse via the base complement.
//!
//! Below the lowest nonzero digit everything stays zero, that digit `d`
//! becomes `base - d`, and every digit above it becomes `base - 1 - d`
//! (the borrow chain runs forever). When the lowest nonzero digit lies
//! inside the cycle, the zeros and the `base - d` digit in front of it
//! become head digits and the complemented cycle restarts right after
//! that position, so the periodic boundary moves.

use adic_types::Digit;

use crate::digits::{assert_base, DigitSequence};

/// `-seq` in the given base.
///
/// # Panics
///
/// Panics if `base` is outside `[2, 256]`.
pub fn negate(base: u32, seq: &DigitSequence) -> DigitSequence {
    assert_base(base);
    let top = (base - 1) as Digit;
    let complement = |d: &Digit| top - d;
    let negated = |d: Digit| (base - u32::from(d)) as Digit;

    let head = seq.head();
    let cycle = seq.cycle();

    if let Some(k) = head.iter().position(|&d| d != 0) {
        let mut digits = head[..k].to_vec();
        digits.push(negated(head[k]));
        digits.extend(head[k + 1..].iter().map(complement));
        return DigitSequence::create(digits, cycle.iter().map(complement).collect());
    }

    // The head is all zeros, so the borrow starts inside the cycle.
    let Some(m) = cycle.iter().position(|&d| d != 0) else {
        return DigitSequence::zero();
    };
    let mut digits = head.to_vec();
    digits.extend_from_slice(&cycle[..m]);
    digits.push(negated(cycle[m]));
    let p = cycle.len();
    let repetend = (0..p).map(|t| complement(&cycle[(m + 1 + t) % p])).collect();
    DigitSequence::create(digits, repetend)
}

impl DigitSequence {
    /// `-self` in the given base.
    pub fn negated(&self, base: u32) -> DigitSequence {
        negate(base, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sum::sum;

    fn seq(s: &str) -> DigitSequence {
        s.parse().unwrap()
    }

    fn check(base: u32, value: &str, expected: &str) {
        let x = seq(value);
        let negated = negate(base, &x);
        assert_eq!(negated.to_string(), expected, "-({value}) in base {base}");
        assert!(sum(base, [&x, &negated]).is_zero());
    }

    #[test]
    fn test_negate_finite() {
        check(10, "...0 1", "...9 ");
        check(10, "...0 120", "...9 880");
        check(5, "...0 3", "...4 2");
    }

    #[test]
    fn test_negate_negative_is_positive() {
        check(10, "...9 ", "...0 1");
        check(5, "...4 ", "...0 1");
    }

    #[test]
    fn test_negate_purely_periodic() {
        // -(-1/9) = 1/9
        check(10, "...1 ", "...8 9");
        check(2, "...01 ", "...01 1");
    }

    #[test]
    fn test_negate_borrow_enters_cycle() {
        // Lowest nonzero digit sits inside the cycle: the boundary moves.
        check(10, "...10 ", "...89 90");
        check(10, "...123 00", "...687 700");
    }

    #[test]
    fn test_negate_zero() {
        assert!(negate(10, &DigitSequence::zero()).is_zero());
    }

    #[test]
    fn test_negate_is_involution() {
        for value in ["...36 18", "...10 ", "...9 877", "...0 5000"] {
            let x = seq(value);
            assert_eq!(x.negated(10).negated(10), x);
        }
    }

    #[test]
    fn test_negate_base_256() {
        let x = DigitSequence::from_digits(&[1]);
        let negated = negate(256, &x);
        assert_eq!(negated.cycle(), &[255]);
        assert!(negated.head().is_empty());
    }
}
