// ─────────────────────────────────────────────────────────────────────
// Adic Kernel — Ring Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::base::{is_prime, MAX_RENDERABLE_BASE, MIN_BASE};
use crate::error::{AdicError, AdicResult};

/// Runtime configuration for an adic ring.
///
/// Only the element layer reads this; the digit engine itself takes the
/// base as a plain argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdicConfig {
    /// Base of the digit expansion.
    /// Default: 10.
    pub base: u32,

    /// Reject composite bases (true p-adic integers only).
    /// Default: false.
    pub require_prime_base: bool,

    /// Append the base in subscript digits when rendering elements.
    /// Default: true.
    pub subscript_base: bool,
}

impl Default for AdicConfig {
    fn default() -> Self {
        Self {
            base: 10,
            require_prime_base: false,
            subscript_base: true,
        }
    }
}

impl AdicConfig {
    /// Configuration for the given base, everything else default.
    pub fn with_base(base: u32) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> AdicResult<()> {
        if !(MIN_BASE..=MAX_RENDERABLE_BASE).contains(&self.base) {
            log::warn!(
                "rejecting base {}: must be in [{MIN_BASE}, {MAX_RENDERABLE_BASE}]",
                self.base
            );
            return Err(AdicError::InvalidBase(self.base));
        }
        if self.require_prime_base && !is_prime(self.base) {
            log::warn!("rejecting base {}: a prime base is required", self.base);
            return Err(AdicError::InvalidBase(self.base));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> AdicResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AdicError::Config(format!("JSON parse error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AdicConfig::default();
        assert_eq!(config.base, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_out_of_range() {
        assert_eq!(
            AdicConfig::with_base(1).validate(),
            Err(AdicError::InvalidBase(1))
        );
        assert_eq!(
            AdicConfig::with_base(37).validate(),
            Err(AdicError::InvalidBase(37))
        );
        assert!(AdicConfig::with_base(36).validate().is_ok());
    }

    #[test]
    fn test_prime_required() {
        let config = AdicConfig {
            base: 10,
            require_prime_base: true,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(AdicError::InvalidBase(10)));

        let config = AdicConfig {
            base: 7,
            require_prime_base: true,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = AdicConfig::from_json(r#"{"base": 5}"#).unwrap();
        assert_eq!(config.base, 5);
        assert!(!config.require_prime_base);
        assert!(config.subscript_base);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = AdicConfig::from_json("{base: }").unwrap_err();
        assert!(matches!(err, AdicError::Config(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = AdicConfig {
            base: 3,
            require_prime_base: true,
            subscript_base: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(AdicConfig::from_json(&json).unwrap(), config);
    }
}
