// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Shared Types
// (C) 2026 The Adic Kernel Authors
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Digit vocabulary, configuration, and error hierarchy shared by the
//! adic digit engine and the element types built on top of it.

pub mod base;
pub mod config;
pub mod error;

pub use base::{is_prime, Digit, MAX_BASE, MAX_RENDERABLE_BASE, MIN_BASE};
pub use config::AdicConfig;
pub use error::{AdicError, AdicResult};
