use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::matching::{MatchWeights, DEFAULT_THRESHOLD};

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct InputConfig {
    /// Scraped sale-history CSV (must carry a `grantee` column)
    pub sales_path: String,
    /// Court calendar CSV (must carry a `Name` column)
    pub court_path: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct MatchingConfig {
    pub threshold: f64,
    #[serde(default)]
    pub weights: MatchWeights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            weights: MatchWeights::default(),
        }
    }
}

/// Organization prefilter: raw names containing any keyword are excluded
/// from matching before any scoring happens.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct FilterConfig {
    pub enabled: bool,
    pub sale_keywords: Vec<String>,
    pub court_keywords: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sale_keywords: [
                "LLC",
                "CONSTRUCTION",
                "PROPERTIES",
                "BUILDERS",
                "ENTERPRISES",
                "HOMES",
                "PARTNERSHIP",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            court_keywords: vec!["LLC".into()],
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ExportConfig {
    pub out_path: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_path: "matches.csv".into(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct AppConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.sales_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "input.sales_path",
            });
        }
        if self.input.court_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "input.court_path",
            });
        }
        if self.export.out_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "export.out_path",
            });
        }
        if !(0.0..=100.0).contains(&self.matching.threshold) {
            return Err(ConfigError::InvalidValue {
                field: "matching.threshold",
                reason: format!("{} not in 0..=100", self.matching.threshold),
            });
        }
        let w = self.matching.weights;
        for (field, value) in [
            ("matching.weights.last", w.last),
            ("matching.weights.first", w.first),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{} not in 0..=1", value),
                });
            }
        }
        if w.last + w.first <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "matching.weights",
                reason: "weights must not both be zero".into(),
            });
        }
        // Convex combination: a sum above 1 would let combined scores exceed
        // 100 and break the threshold's 0..=100 scale
        if w.last + w.first > 1.0 + 1e-9 {
            return Err(ConfigError::InvalidValue {
                field: "matching.weights",
                reason: format!("sum {} exceeds 1.0", w.last + w.first),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AppConfig {
        AppConfig {
            input: InputConfig {
                sales_path: "sales.csv".into(),
                court_path: "court.csv".into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_missing_paths_rejected() {
        let cfg = AppConfig::default();
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::MissingField { field: "input.sales_path" })
        ));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let mut cfg = valid();
        cfg.matching.threshold = 101.0;
        assert!(cfg.validate().is_err());
        cfg.matching.threshold = -1.0;
        assert!(cfg.validate().is_err());
        cfg.matching.threshold = 100.0;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_degenerate_weights_rejected() {
        let mut cfg = valid();
        cfg.matching.weights = MatchWeights {
            last: 0.0,
            first: 0.0,
        };
        assert!(cfg.validate().is_err());
        cfg.matching.weights = MatchWeights {
            last: 1.5,
            first: 0.4,
        };
        assert!(cfg.validate().is_err());
        cfg.matching.weights = MatchWeights {
            last: 1.0,
            first: 0.0,
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_weight_sum_above_one_rejected() {
        // weights like 1.0/1.0 would combine two perfect sub-scores to 200,
        // outside the 0..=100 scale the threshold is validated against
        let mut cfg = valid();
        cfg.matching.weights = MatchWeights {
            last: 1.0,
            first: 1.0,
        };
        assert!(cfg.validate().is_err());
        cfg.matching.weights = MatchWeights {
            last: 0.7,
            first: 0.4,
        };
        assert!(cfg.validate().is_err());
        // an exact convex pair still passes
        cfg.matching.weights = MatchWeights {
            last: 0.7,
            first: 0.3,
        };
        assert!(cfg.validate().is_ok());
    }
}
