// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Digits and Bases
// ─────────────────────────────────────────────────────────────────────
//! A base is never stored inside a digit sequence; it is passed to
//! every operation as context. These bounds are what the engine
//! asserts on entry.

/// One digit, always interpreted relative to an externally supplied base.
pub type Digit = u8;

/// Smallest base with a meaningful positional expansion.
pub const MIN_BASE: u32 = 2;

/// Largest base whose digits still fit in a [`Digit`].
pub const MAX_BASE: u32 = Digit::MAX as u32 + 1;

/// Largest base whose digits render as a single `0-9a-z` character.
pub const MAX_RENDERABLE_BASE: u32 = 36;

/// Trial-division primality test; bases are tiny so nothing smarter is needed.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}
