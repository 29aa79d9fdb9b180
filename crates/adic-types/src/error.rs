// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all recoverable adic failures.
///
/// Engine arithmetic is total over well-formed inputs and never returns
/// this type; it only surfaces at the boundary (text, conversions,
/// configuration, checked construction).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdicError {
    /// Textual form could not be parsed.
    #[error("not parsable: {0}")]
    Parse(String),

    /// A digit is not smaller than the base it is interpreted in.
    #[error("digit {digit} is not valid in base {base}")]
    InvalidDigit { digit: u32, base: u32 },

    /// Base is out of range, or not prime where a prime is required.
    #[error("invalid base: {0}")]
    InvalidBase(u32),

    /// A periodic value cannot be converted to a machine integer.
    #[error("not finite: {0}")]
    NotFinite(String),

    /// A finite value does not fit the requested integer type.
    #[error("overflow: {0}")]
    Overflow(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

pub type AdicResult<T> = Result<T, AdicError>;
