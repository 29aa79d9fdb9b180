// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Digit Engine
// (C) 2026 The Adic Kernel Authors
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Exact arithmetic over eventually-periodic base-`b` digit sequences,
//! the representation of n-adic integers (`...999 = -1` in base 10).
//!
//! Components, leaves first:
//!   - `DigitSequence`: canonical `(head, cycle)` value + canonicalizer
//!   - Shift operator: multiply/divide by powers of the base
//!   - Summation engine: k-way addition with state-recurrence detection
//!   - Scalar multiplication: multiply by a single digit
//!   - Full multiplication: long multiplication with an outer detection loop
//!   - Negation: base complement
//!   - `AdicRing` / `AdicInteger`: base-carrying operators on top
//!
//! # Invariants
//!
//! 1. **Canonical values only**: every public constructor and engine
//!    result passes through `DigitSequence::create`, so structural
//!    equality and hashing are value equality.
//!
//! 2. **Purely functional**: no operation mutates its inputs or holds
//!    shared state; values can be shared across threads freely.
//!
//! 3. **No running-time bound**: cycle detection always terminates, but
//!    the explored state space is the product of the operands' periods
//!    (times the carry range). Callers needing bounded latency must cap
//!    period lengths themselves.
//!
//! 4. **Base is context**: it is never stored in a `DigitSequence`.
//!    A base outside `[2, 256]` is a fatal precondition violation.

pub mod convert;
pub mod digits;
pub mod multiply;
pub mod negate;
pub mod ring;
pub mod scalar;
pub mod shift;
pub mod sum;
pub mod text;

#[cfg(test)]
mod properties;

pub use adic_types::{AdicConfig, AdicError, AdicResult, Digit};
pub use digits::{DigitAt, DigitSequence};
pub use multiply::multiply;
pub use negate::negate;
pub use ring::{AdicInteger, AdicRing};
pub use scalar::multiply_by_digit;
pub use sum::sum;
pub use text::{char_to_digit, digit_to_char, render_with_base, subscript};
