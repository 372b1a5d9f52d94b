use serde::Deserialize;

use crate::error::ReportError;
use crate::policy::{BonusRates, DefaultPolicy};
use crate::rank::TOP_PRODUCTS_LIMIT;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Optional `*.salesrank.toml` file. Every key falls back to the reference
/// behavior, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default)]
    pub bonus: BonusRates,
    #[serde(default)]
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSettings {
    #[serde(default = "default_top_products")]
    pub top_products: usize,
}

fn default_top_products() -> usize {
    TOP_PRODUCTS_LIMIT
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_products: default_top_products(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl ReportConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReportError> {
        let config: ReportConfig =
            toml::from_str(input).map_err(|e| ReportError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        let rates = [
            ("leader", self.bonus.leader),
            ("podium", self.bonus.podium),
            ("base", self.bonus.base),
            ("last", self.bonus.last),
        ];
        for (name, rate) in rates {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(ReportError::ConfigValidation(format!(
                    "bonus.{name} must be between 0 and 1, got {rate}"
                )));
            }
        }

        if self.report.top_products == 0 {
            return Err(ReportError::ConfigValidation(
                "report.top_products must be at least 1".into(),
            ));
        }

        Ok(())
    }

    pub fn policy(&self) -> DefaultPolicy {
        DefaultPolicy::new(self.bonus)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
