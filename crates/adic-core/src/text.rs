// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Textual Form
// ─────────────────────────────────────────────────────────────────────
//! `"...<cycle> <head>"`, both parts most significant first.
//!
//! Digits below 36 are written `0-9a-z`; larger digits (bases up to 256)
//! are written in decimal inside parentheses, e.g. `(200)`. A rendering
//! may carry the base as a subscript suffix (`...9 01₁₀`), which the
//! parser accepts and ignores.

use std::fmt;
use std::str::FromStr;

use adic_types::{AdicError, AdicResult, Digit};

use crate::digits::DigitSequence;

const ELLIPSIS: &str = "...";
const ELLIPSIS_CHAR: char = '…';
const SUBSCRIPT_ZERO: char = '₀';

/// Single-character rendering of a digit, if it has one.
pub fn digit_to_char(digit: Digit) -> Option<char> {
    char::from_digit(u32::from(digit), 36)
}

/// Value of a single-character digit (`0-9`, `a-z`, case-insensitive).
pub fn char_to_digit(c: char) -> Option<Digit> {
    c.to_digit(36).map(|d| d as Digit)
}

/// `n` in Unicode subscript digits.
pub fn subscript(n: u32) -> String {
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .filter_map(|d| char::from_u32(SUBSCRIPT_ZERO as u32 + d))
        .collect()
}

/// Rendering followed by the base as a subscript.
pub fn render_with_base(base: u32, seq: &DigitSequence) -> String {
    format!("{seq}{}", subscript(base))
}

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[Digit]) -> fmt::Result {
    for &d in digits.iter().rev() {
        match digit_to_char(d) {
            Some(c) => write!(f, "{c}")?,
            None => write!(f, "({d})")?,
        }
    }
    Ok(())
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ELLIPSIS)?;
        write_digits(f, self.cycle())?;
        f.write_str(" ")?;
        write_digits(f, self.head())
    }
}

/// Parse most-significant-first digit text into least-significant-first digits.
fn parse_digits(text: &str) -> AdicResult<Vec<Digit>> {
    let mut digits = Vec::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '(' {
            let mut literal = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == ')' {
                    closed = true;
                    break;
                }
                literal.push(c);
            }
            if !closed {
                return Err(AdicError::Parse(format!("unterminated digit literal '({literal}'")));
            }
            let value = literal
                .parse::<u32>()
                .ok()
                .and_then(|v| Digit::try_from(v).ok())
                .ok_or_else(|| AdicError::Parse(format!("bad digit literal '({literal})'")))?;
            digits.push(value);
        } else {
            let value = char_to_digit(c)
                .ok_or_else(|| AdicError::Parse(format!("illegal digit '{c}'")))?;
            digits.push(value);
        }
    }
    digits.reverse();
    Ok(digits)
}

impl FromStr for DigitSequence {
    type Err = AdicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s
            .trim_start()
            .trim_end_matches(|c: char| ('₀'..='₉').contains(&c));
        let rest = trimmed
            .strip_prefix(ELLIPSIS)
            .or_else(|| trimmed.strip_prefix(ELLIPSIS_CHAR))
            .ok_or_else(|| AdicError::Parse(format!("'{s}' does not start with '{ELLIPSIS}'")))?;
        let (cycle, head) = rest
            .split_once(' ')
            .ok_or_else(|| AdicError::Parse(format!("'{s}' has no space before its digits")))?;
        let cycle = parse_digits(cycle)?;
        if cycle.is_empty() {
            return Err(AdicError::Parse(format!("'{s}' has no repeating digits")));
        }
        let head = parse_digits(head.trim_end())?;
        Ok(DigitSequence::create(head, cycle))
    }
}
