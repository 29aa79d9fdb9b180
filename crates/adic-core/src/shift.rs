// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Shift Operator
// ─────────────────────────────────────────────────────────────────────
//! Multiplication and division by powers of the base. Pure index
//! arithmetic: no carries, so no base is needed.

use adic_types::Digit;

use crate::digits::DigitSequence;

impl DigitSequence {
    /// Multiply by `base^n`: `n` zero digits enter at the low end.
    pub fn left_shift(&self, n: usize) -> Self {
        if n == 0 {
            return self.clone();
        }
        let mut head: Vec<Digit> = vec![0; n];
        head.extend_from_slice(self.head());
        Self::create(head, self.cycle().to_vec())
    }

    /// Drop the `n` least significant digits.
    ///
    /// Once the head is used up, further shifting rotates the cycle, so
    /// `...1234 ` shifted right by one is `...4123 `.
    pub fn right_shift(&self, n: usize) -> Self {
        if n == 0 {
            return self.clone();
        }
        let head = self.head();
        if n <= head.len() {
            return Self::create(head[n..].to_vec(), self.cycle().to_vec());
        }
        let mut cycle = self.cycle().to_vec();
        let rotate = (n - head.len()) % cycle.len();
        cycle.rotate_left(rotate);
        Self::create(Vec::new(), cycle)
    }
}
