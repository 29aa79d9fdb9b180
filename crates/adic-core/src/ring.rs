// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Adic Integer Ring
// ─────────────────────────────────────────────────────────────────────
//! Base-carrying element layer over the digit engine.
//!
//! An [`AdicRing`] fixes the base once; an [`AdicInteger`] pairs a
//! canonical [`DigitSequence`] with its ring so the usual operators can
//! be used without passing the base around.

use std::fmt;
use std::ops::{Add, Mul, Neg, Shl, Shr, Sub};

use adic_types::{AdicConfig, AdicResult};

use crate::digits::DigitSequence;
use crate::multiply::multiply;
use crate::negate::negate;
use crate::sum::sum;
use crate::text::render_with_base;

/// The ring of `base`-adic integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdicRing {
    base: u32,
    subscript: bool,
}

impl AdicRing {
    /// Ring for `base` with default rendering.
    pub fn new(base: u32) -> AdicResult<Self> {
        Self::from_config(&AdicConfig::with_base(base))
    }

    pub fn from_config(config: &AdicConfig) -> AdicResult<Self> {
        config.validate()?;
        Ok(Self {
            base: config.base,
            subscript: config.subscript_base,
        })
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn zero(&self) -> AdicInteger {
        self.wrap(DigitSequence::zero())
    }

    pub fn one(&self) -> AdicInteger {
        self.wrap(DigitSequence::one())
    }

    /// Element for `digits`, rejecting digits that are not valid in this base.
    pub fn element(&self, digits: DigitSequence) -> AdicResult<AdicInteger> {
        digits.check_digits(self.base)?;
        Ok(self.wrap(digits))
    }

    /// Element from its textual form, e.g. `"...9 01"`.
    pub fn parse(&self, text: &str) -> AdicResult<AdicInteger> {
        self.element(text.parse()?)
    }

    pub fn from_i64(&self, value: i64) -> AdicInteger {
        self.wrap(DigitSequence::from_i64(self.base, value))
    }

    fn wrap(&self, digits: DigitSequence) -> AdicInteger {
        AdicInteger { ring: *self, digits }
    }
}

impl fmt::Display for AdicRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ℤ{}", crate::text::subscript(self.base))
    }
}

/// One element of an [`AdicRing`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdicInteger {
    ring: AdicRing,
    digits: DigitSequence,
}

impl AdicInteger {
    pub fn ring(&self) -> AdicRing {
        self.ring
    }

    pub fn digits(&self) -> &DigitSequence {
        &self.digits
    }

    pub fn into_digits(self) -> DigitSequence {
        self.digits
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// Multiply by a machine integer.
    pub fn times(&self, multiplier: i64) -> AdicInteger {
        self * &self.ring.from_i64(multiplier)
    }

    /// Value as a machine integer, if it is a (possibly negative) integer.
    pub fn to_i64(&self) -> AdicResult<i64> {
        self.digits.to_i64(self.ring.base)
    }

    fn same_ring(&self, other: &AdicInteger) -> u32 {
        assert_eq!(
            self.ring.base, other.ring.base,
            "cannot combine elements of different bases"
        );
        self.ring.base
    }
}

impl fmt::Display for AdicInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ring.subscript {
            f.write_str(&render_with_base(self.ring.base, &self.digits))
        } else {
            write!(f, "{}", self.digits)
        }
    }
}

impl Add for &AdicInteger {
    type Output = AdicInteger;

    fn add(self, rhs: &AdicInteger) -> AdicInteger {
        let base = self.same_ring(rhs);
        self.ring.wrap(sum(base, [&self.digits, &rhs.digits]))
    }
}

impl Sub for &AdicInteger {
    type Output = AdicInteger;

    fn sub(self, rhs: &AdicInteger) -> AdicInteger {
        let base = self.same_ring(rhs);
        let negated = negate(base, &rhs.digits);
        self.ring.wrap(sum(base, [&self.digits, &negated]))
    }
}

impl Mul for &AdicInteger {
    type Output = AdicInteger;

    fn mul(self, rhs: &AdicInteger) -> AdicInteger {
        let base = self.same_ring(rhs);
        self.ring.wrap(multiply(base, &rhs.digits, &self.digits))
    }
}

impl Neg for &AdicInteger {
    type Output = AdicInteger;

    fn neg(self) -> AdicInteger {
        self.ring.wrap(negate(self.ring.base, &self.digits))
    }
}

impl Shl<usize> for &AdicInteger {
    type Output = AdicInteger;

    fn shl(self, n: usize) -> AdicInteger {
        self.ring.wrap(self.digits.left_shift(n))
    }
}

impl Shr<usize> for &AdicInteger {
    type Output = AdicInteger;

    fn shr(self, n: usize) -> AdicInteger {
        self.ring.wrap(self.digits.right_shift(n))
    }
}

macro_rules! forward_binop {
    ($trait_name:ident, $method:ident) => {
        impl $trait_name for AdicInteger {
            type Output = AdicInteger;

            #[inline]
            fn $method(self, rhs: AdicInteger) -> AdicInteger {
                (&self).$method(&rhs)
            }
        }

        impl $trait_name<&AdicInteger> for AdicInteger {
            type Output = AdicInteger;

            #[inline]
            fn $method(self, rhs: &AdicInteger) -> AdicInteger {
                (&self).$method(rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for AdicInteger {
    type Output = AdicInteger;

    fn neg(self) -> AdicInteger {
        -&self
    }
}

impl Shl<usize> for AdicInteger {
    type Output = AdicInteger;

    fn shl(self, n: usize) -> AdicInteger {
        &self << n
    }
}

impl Shr<usize> for AdicInteger {
    type Output = AdicInteger;

    fn shr(self, n: usize) -> AdicInteger {
        &self >> n
    }
}
