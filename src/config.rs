use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PilotError, Result};
use crate::pricing::constants::{
    DEFAULT_CHECKOUT_SESSION, DEFAULT_FEE_PERCENT, SIMILAR_NAME_THRESHOLD,
};

/// Runtime-configurable pricing knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Platform fee charged on savings, in percent.
    pub fee_percent: f64,

    /// Session tag for generated checkout links.
    pub checkout_session: String,

    /// Jaro-Winkler score above which distinct item names are flagged.
    pub similar_name_threshold: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            fee_percent: DEFAULT_FEE_PERCENT,
            checkout_session: DEFAULT_CHECKOUT_SESSION.to_string(),
            similar_name_threshold: SIMILAR_NAME_THRESHOLD,
        }
    }
}

impl PricingConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Copy with the fee percent replaced.
    pub fn with_fee_percent(mut self, fee_percent: f64) -> Self {
        self.fee_percent = fee_percent;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.fee_percent.is_finite() || self.fee_percent < 0.0 {
            return Err(PilotError::InvalidInput(format!(
                "fee_percent must be a non-negative number, got {}",
                self.fee_percent
            )));
        }
        if !(0.0..=1.0).contains(&self.similar_name_threshold) {
            return Err(PilotError::InvalidInput(format!(
                "similar_name_threshold must be within 0..=1, got {}",
                self.similar_name_threshold
            )));
        }
        if self.checkout_session.trim().is_empty() {
            return Err(PilotError::InvalidInput(
                "checkout_session must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.fee_percent, 5.0);
        assert_eq!(config.checkout_session, "pricepilot");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"fee_percent": 7.5}"#).unwrap();

        let config = PricingConfig::load(file.path()).unwrap();
        assert_eq!(config.fee_percent, 7.5);
        assert_eq!(config.similar_name_threshold, SIMILAR_NAME_THRESHOLD);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(PricingConfig::default().with_fee_percent(-1.0).validate().is_err());
        assert!(PricingConfig::default().with_fee_percent(f64::NAN).validate().is_err());

        let mut config = PricingConfig::default();
        config.similar_name_threshold = 1.5;
        assert!(config.validate().is_err());
    }
}
