// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Machine Integer Conversions
// ─────────────────────────────────────────────────────────────────────

use adic_types::{AdicError, AdicResult, Digit};

use crate::digits::{assert_base, DigitSequence, NOT_REPEATING};
use crate::negate::negate;

impl DigitSequence {
    /// Base-`base` expansion of a non-negative integer.
    pub fn from_u64(base: u32, mut value: u64) -> Self {
        assert_base(base);
        let base = u64::from(base);
        let mut digits: Vec<Digit> = Vec::new();
        while value > 0 {
            digits.push((value % base) as Digit);
            value /= base;
        }
        Self::create(digits, NOT_REPEATING.to_vec())
    }

    /// Base-`base` expansion of an integer; negatives repeat `base - 1`.
    pub fn from_i64(base: u32, value: i64) -> Self {
        let magnitude = Self::from_u64(base, value.unsigned_abs());
        if value < 0 {
            negate(base, &magnitude)
        } else {
            magnitude
        }
    }

    /// Value of a finite sequence.
    pub fn to_u64(&self, base: u32) -> AdicResult<u64> {
        assert_base(base);
        if self.is_periodic() {
            return Err(AdicError::NotFinite(format!("{self} repeats forever")));
        }
        self.check_digits(base)?;
        self.head().iter().rev().try_fold(0u64, |acc, &d| {
            acc.checked_mul(u64::from(base))
                .and_then(|v| v.checked_add(u64::from(d)))
                .ok_or_else(|| AdicError::Overflow(format!("{self} does not fit in u64")))
        })
    }

    /// Value of a finite sequence, or of a negative integer (`...(base-1) head`).
    pub fn to_i64(&self, base: u32) -> AdicResult<i64> {
        assert_base(base);
        let minus_one = (base - 1) as Digit;
        if self.cycle() == [minus_one] {
            let magnitude = negate(base, self).to_u64(base)?;
            return 0i64
                .checked_sub_unsigned(magnitude)
                .ok_or_else(|| AdicError::Overflow(format!("{self} does not fit in i64")));
        }
        let value = self.to_u64(base)?;
        i64::try_from(value).map_err(|_| AdicError::Overflow(format!("{self} does not fit in i64")))
    }

    /// Every stored digit must be smaller than `base`.
    pub fn check_digits(&self, base: u32) -> AdicResult<()> {
        match self
            .head()
            .iter()
            .chain(self.cycle())
            .find(|&&d| u32::from(d) >= base)
        {
            Some(&d) => Err(AdicError::InvalidDigit {
                digit: u32::from(d),
                base,
            }),
            None => Ok(()),
        }
    }
}
