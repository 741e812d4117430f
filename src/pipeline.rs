//! Batch run orchestration: load both CSVs, match, export, summarize.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;

use crate::config::AppConfig;
use crate::export::csv_export::export_to_csv;
use crate::ingest::{load_court_records, load_sale_records};
use crate::matching::{match_all, MatchOptions, PartialRatio};

#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub total_sales: usize,
    pub total_court: usize,
    pub dropped_orgs_sales: usize,
    pub dropped_orgs_court: usize,
    pub comparisons: usize,
    pub matches: usize,
    pub load_time: Duration,
    pub match_time: Duration,
    pub export_time: Duration,
    pub started_utc: DateTime<Utc>,
    pub ended_utc: DateTime<Utc>,
}

impl MatchSummary {
    pub fn log(&self) {
        info!(
            "run finished: {} matches from {} grantees x {} court records ({} comparisons)",
            self.matches, self.total_sales, self.total_court, self.comparisons
        );
        info!(
            "dropped organizations: {} sale rows, {} court rows",
            self.dropped_orgs_sales, self.dropped_orgs_court
        );
        info!(
            "timings: load {:.2?}, match {:.2?}, export {:.2?} (started {}, ended {})",
            self.load_time, self.match_time, self.export_time, self.started_utc, self.ended_utc
        );
    }
}

pub fn run(cfg: &AppConfig) -> Result<MatchSummary> {
    let started_utc = Utc::now();

    let t = Instant::now();
    let sales = load_sale_records(Path::new(&cfg.input.sales_path), &cfg.filter)
        .with_context(|| format!("loading sale records from {}", cfg.input.sales_path))?;
    let court = load_court_records(Path::new(&cfg.input.court_path), &cfg.filter)
        .with_context(|| format!("loading court records from {}", cfg.input.court_path))?;
    let load_time = t.elapsed();
    info!(
        "loaded {} grantees ({} org rows dropped) and {} court parties ({} dropped)",
        sales.records.len(),
        sales.dropped_orgs,
        court.records.len(),
        court.dropped_orgs
    );

    let opts = MatchOptions {
        threshold: cfg.matching.threshold,
        weights: cfg.matching.weights,
    };
    let t = Instant::now();
    let results = match_all(&sales.records, &court.records, &PartialRatio, opts);
    let match_time = t.elapsed();

    for rec in &results {
        info!(
            "match found: {} {} matched with {} {} with score {:.1}",
            rec.grantee_last.as_deref().unwrap_or(""),
            rec.grantee_first.as_deref().unwrap_or(""),
            rec.name_last.as_deref().unwrap_or(""),
            rec.name_first.as_deref().unwrap_or(""),
            rec.score
        );
    }

    let t = Instant::now();
    export_to_csv(&results, Path::new(&cfg.export.out_path))
        .with_context(|| format!("writing matches to {}", cfg.export.out_path))?;
    let export_time = t.elapsed();

    Ok(MatchSummary {
        total_sales: sales.records.len(),
        total_court: court.records.len(),
        dropped_orgs_sales: sales.dropped_orgs,
        dropped_orgs_court: court.dropped_orgs,
        comparisons: sales.records.len() * court.records.len(),
        matches: results.len(),
        load_time,
        match_time,
        export_time,
        started_utc,
        ended_utc: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExportConfig, InputConfig};
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("grantee_matcher_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_run_end_to_end() {
        let sales_path = temp_path("sales.csv");
        let court_path = temp_path("court.csv");
        let out_path = temp_path("matches.csv");
        fs::write(
            &sales_path,
            "parcel,grantee\n\
             100,SMITH & JOHN\n\
             101,ACME PROPERTIES LLC\n\
             102,JONES & MARY\n",
        )
        .unwrap();
        fs::write(
            &court_path,
            "Case,Name\n\
             CI-1,\"Smith, John\"\n\
             CI-2,\"Taylor, Ann\"\n",
        )
        .unwrap();

        let cfg = AppConfig {
            input: InputConfig {
                sales_path: sales_path.to_string_lossy().into_owned(),
                court_path: court_path.to_string_lossy().into_owned(),
            },
            export: ExportConfig {
                out_path: out_path.to_string_lossy().into_owned(),
            },
            ..Default::default()
        };
        let summary = run(&cfg).unwrap();
        assert_eq!(summary.total_sales, 2);
        assert_eq!(summary.dropped_orgs_sales, 1);
        assert_eq!(summary.total_court, 2);
        assert_eq!(summary.comparisons, 4);
        assert_eq!(summary.matches, 1);

        let out = fs::read_to_string(&out_path).unwrap();
        let mut lines = out.lines();
        lines.next(); // header
        assert_eq!(lines.next().unwrap(), "smith,john,smith,john,100.0,0,0");

        for p in [&sales_path, &court_path, &out_path] {
            let _ = fs::remove_file(p);
        }
    }
}
