use clap::Parser;

use crate::config::{AppConfig, ExportConfig, FilterConfig, InputConfig, MatchingConfig};
use crate::error::ConfigError;
use crate::matching::{MatchWeights, DEFAULT_THRESHOLD};

#[derive(Parser, Debug)]
#[command(
    name = "grantee_matcher",
    version,
    about = "Match property-deed grantees against court calendar party names",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Scraped sale-history CSV with a `grantee` column (env: SALES_CSV)
    #[arg(value_name = "SALES_CSV", env = "SALES_CSV")]
    pub sales_csv: String,
    /// Court calendar CSV with a `Name` column (env: COURT_CSV)
    #[arg(value_name = "COURT_CSV", env = "COURT_CSV")]
    pub court_csv: String,
    /// Output path for matched pairs
    #[arg(value_name = "OUT_PATH", default_value = "matches.csv")]
    pub out_path: String,
    /// Minimum combined score (0-100) for a pair to be reported
    #[arg(
        long,
        env = "GRANTEE_MATCHER_THRESHOLD",
        default_value_t = DEFAULT_THRESHOLD
    )]
    pub threshold: f64,
    /// Weight of the last-name sub-score in the combined score
    #[arg(long = "last-weight", default_value_t = 0.6)]
    pub last_weight: f64,
    /// Weight of the first-name sub-score in the combined score
    #[arg(long = "first-weight", default_value_t = 0.4)]
    pub first_weight: f64,
    /// Keep organization-style rows (LLCs, builders, ...) instead of
    /// dropping them before matching
    #[arg(long = "keep-orgs")]
    pub keep_orgs: bool,
}

impl Cli {
    pub fn to_app_config(&self) -> Result<AppConfig, ConfigError> {
        let cfg = AppConfig {
            input: InputConfig {
                sales_path: self.sales_csv.clone(),
                court_path: self.court_csv.clone(),
            },
            matching: MatchingConfig {
                threshold: self.threshold,
                weights: MatchWeights {
                    last: self.last_weight,
                    first: self.first_weight,
                },
            },
            filter: FilterConfig {
                enabled: !self.keep_orgs,
                ..FilterConfig::default()
            },
            export: ExportConfig {
                out_path: self.out_path.clone(),
            },
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["grantee_matcher", "sales.csv", "court.csv"]);
        let cfg = cli.to_app_config().unwrap();
        assert_eq!(cfg.matching.threshold, DEFAULT_THRESHOLD);
        assert_eq!(cfg.matching.weights, MatchWeights::default());
        assert!(cfg.filter.enabled);
        assert_eq!(cfg.export.out_path, "matches.csv");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "grantee_matcher",
            "s.csv",
            "c.csv",
            "out.csv",
            "--threshold",
            "80",
            "--last-weight",
            "0.7",
            "--first-weight",
            "0.3",
            "--keep-orgs",
        ]);
        let cfg = cli.to_app_config().unwrap();
        assert_eq!(cfg.matching.threshold, 80.0);
        assert_eq!(cfg.matching.weights.last, 0.7);
        assert!(!cfg.filter.enabled);
        assert_eq!(cfg.export.out_path, "out.csv");
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let cli = Cli::parse_from([
            "grantee_matcher",
            "s.csv",
            "c.csv",
            "--threshold",
            "150",
        ]);
        assert!(cli.to_app_config().is_err());
    }
}
