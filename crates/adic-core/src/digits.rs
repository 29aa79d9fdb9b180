// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Digit Sequence + Canonicalizer
// ─────────────────────────────────────────────────────────────────────
//! Canonical, immutable representation of one eventually-periodic
//! digit expansion.
//!
//! Reading from the most significant end, a value is an infinite
//! repetition of `cycle` followed by the finite `head`:
//! `... cycle cycle cycle head`. Both are stored least significant
//! first. The single-digit cycle `[0]` is the sentinel for "finite".
//!
//! # Canonical form
//!
//! 1. `cycle` is non-empty.
//! 2. `cycle` is its own primitive period (`[1, 1]` becomes `[1]`, an
//!    all-zero cycle becomes the sentinel `[0]`).
//! 3. The top digit of `head` never equals the digit the cycle would
//!    place at that position (`cycle[len - 1]`); such a digit is
//!    absorbed into the cycle by rotation. For the sentinel this trims
//!    leading zeros of a finite value.
//!
//! Every value has exactly one canonical `(head, cycle)` encoding, so
//! derived equality and hashing are value equality.

use std::fmt;

use serde::{Deserialize, Serialize};

use adic_types::{AdicError, Digit, MAX_BASE, MIN_BASE};

/// The "no repetition" cycle.
pub(crate) const NOT_REPEATING: [Digit; 1] = [0];

/// Fatal precondition check shared by every engine entry point.
#[inline]
pub(crate) fn assert_base(base: u32) {
    assert!(
        (MIN_BASE..=MAX_BASE).contains(&base),
        "base must be in [{MIN_BASE}, {MAX_BASE}], got {base}"
    );
}

/// One digit read through [`DigitSequence::digit_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitAt {
    /// Digit value.
    pub value: Digit,
    /// Position folded into `[0, head.len() + cycle.len())`; positions a
    /// whole number of periods apart share an index.
    pub index: usize,
    /// Whether the position lies in the periodic region.
    pub repeating: bool,
}

/// An eventually-periodic digit expansion in canonical form.
///
/// The base is not part of the value and has to be supplied to every
/// arithmetic operation.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDigitSequence")]
pub struct DigitSequence {
    head: Vec<Digit>,
    cycle: Vec<Digit>,
}

/// Unchecked wire shape; deserialization canonicalizes through it.
#[derive(Deserialize)]
struct RawDigitSequence {
    #[serde(default)]
    head: Vec<Digit>,
    cycle: Vec<Digit>,
}

impl TryFrom<RawDigitSequence> for DigitSequence {
    type Error = AdicError;

    fn try_from(raw: RawDigitSequence) -> Result<Self, Self::Error> {
        if raw.cycle.is_empty() {
            return Err(AdicError::Parse("cycle must not be empty".into()));
        }
        Ok(Self::create(raw.head, raw.cycle))
    }
}

impl DigitSequence {
    /// Canonicalize a raw `(head, cycle)` pair, both least significant first.
    ///
    /// # Panics
    ///
    /// Panics if `cycle` is empty.
    pub fn create(mut head: Vec<Digit>, cycle: Vec<Digit>) -> Self {
        assert!(!cycle.is_empty(), "cycle must contain at least one digit");

        let mut cycle = primitive_period(cycle);
        while head.last() == cycle.last() {
            head.pop();
            cycle.rotate_right(1);
        }
        Self { head, cycle }
    }

    /// The value zero: `...0 `.
    pub fn zero() -> Self {
        Self {
            head: Vec::new(),
            cycle: NOT_REPEATING.to_vec(),
        }
    }

    /// The value one: `...0 1`.
    pub fn one() -> Self {
        Self {
            head: vec![1],
            cycle: NOT_REPEATING.to_vec(),
        }
    }

    /// A finite value, digits given most significant first.
    pub fn from_digits(digits: &[Digit]) -> Self {
        Self::create(inverse(digits), NOT_REPEATING.to_vec())
    }

    /// A purely periodic value, one period given most significant first.
    ///
    /// # Panics
    ///
    /// Panics if `digits` is empty.
    pub fn from_repeating_digits(digits: &[Digit]) -> Self {
        Self::create(Vec::new(), inverse(digits))
    }

    /// Attach a finite head (most significant first) to a purely periodic value.
    ///
    /// # Panics
    ///
    /// Panics if this value already has a head.
    pub fn with_digits(&self, digits: &[Digit]) -> Self {
        assert!(self.head.is_empty(), "value already has non-repeating digits");
        Self::create(inverse(digits), self.cycle.clone())
    }

    /// Attach a repeating period (most significant first) to a finite value.
    ///
    /// # Panics
    ///
    /// Panics if this value is already periodic or `repetend` is empty.
    pub fn with_repetend(&self, repetend: &[Digit]) -> Self {
        assert!(!self.is_periodic(), "value already has a repetend");
        Self::create(self.head.clone(), inverse(repetend))
    }

    /// Non-repeating digits, least significant first.
    pub fn head(&self) -> &[Digit] {
        &self.head
    }

    /// One period of the repeating digits, least significant first.
    pub fn cycle(&self) -> &[Digit] {
        &self.cycle
    }

    /// Whether the cycle is a genuine repetition rather than the sentinel.
    pub fn is_periodic(&self) -> bool {
        self.cycle != NOT_REPEATING
    }

    pub fn is_zero(&self) -> bool {
        self.head.is_empty() && !self.is_periodic()
    }

    /// Whether position `i` lies in the periodic region.
    pub fn is_repeating_at(&self, i: usize) -> bool {
        i >= self.head.len()
    }

    /// Position `i` folded onto one period.
    pub fn effective_index(&self, i: usize) -> usize {
        if self.is_repeating_at(i) {
            let head_len = self.head.len();
            head_len + (i - head_len) % self.cycle.len()
        } else {
            i
        }
    }

    /// Read the digit at position `i` (0 = least significant).
    pub fn digit_at(&self, i: usize) -> DigitAt {
        let index = self.effective_index(i);
        let head_len = self.head.len();
        if index < head_len {
            DigitAt {
                value: self.head[index],
                index,
                repeating: false,
            }
        } else {
            DigitAt {
                value: self.cycle[index - head_len],
                index,
                repeating: true,
            }
        }
    }
}

impl Default for DigitSequence {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitSequence({self})")
    }
}

/// Most-significant-first digits to the internal order.
fn inverse(digits: &[Digit]) -> Vec<Digit> {
    digits.iter().rev().copied().collect()
}

/// Shortest prefix whose repetition reproduces the whole cycle.
fn primitive_period(mut cycle: Vec<Digit>) -> Vec<Digit> {
    let len = cycle.len();
    let period = (1..=len)
        .filter(|p| len % p == 0)
        .find(|&p| (p..len).all(|i| cycle[i] == cycle[i - p]))
        .unwrap_or(len);
    cycle.truncate(period);
    cycle
}
