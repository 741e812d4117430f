//! Weighted fuzzy name matching between sale-history grantees and court
//! calendar parties.
//!
//! The matcher is a pure function of its inputs: every candidate is scored
//! against the query name, sub-scores are combined with fixed weights, and
//! every pair at or above the threshold is emitted in candidate order. No
//! best-match selection, no dedup, no blocking — the scan is O(Q*C) by
//! design and is parallelized across query records only.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::{CourtRecord, MatchRecord, SaleRecord};

mod helpers;
use helpers::partial_ratio;

/// Substring-tolerant string similarity on a 0-100 scale.
///
/// The matcher composes this primitive rather than reimplementing it, so
/// any scorer with the same contract (higher is more similar, 100 means
/// best-aligned agreement) can be substituted.
pub trait SimilarityScorer: Sync {
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Default scorer: partial ratio over Levenshtein windows (see `helpers`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialRatio;

impl SimilarityScorer for PartialRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        partial_ratio(a, b)
    }
}

/// Minimum combined score for a pair to be reported.
pub const DEFAULT_THRESHOLD: f64 = 95.0;

/// Convex combination weights for the two name sub-scores. Last names carry
/// more weight: they are the primary discriminator between grantees and
/// court-docket parties, while first names are noisier (nicknames,
/// initials, missing).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub last: f64,
    pub first: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            last: 0.6,
            first: 0.4,
        }
    }
}

impl MatchWeights {
    pub fn combine(&self, last_score: f64, first_score: f64) -> f64 {
        self.last * last_score + self.first * first_score
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    pub threshold: f64,
    pub weights: MatchWeights,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            weights: MatchWeights::default(),
        }
    }
}

/// Score one name field pair; either side absent contributes exactly 0.
fn field_score<S: SimilarityScorer + ?Sized>(
    scorer: &S,
    a: Option<&str>,
    b: Option<&str>,
) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => scorer.score(a, b),
        _ => 0.0,
    }
}

/// Match one sale record against every court record, emitting a
/// `MatchRecord` for each candidate whose combined score meets the
/// threshold (inclusive). Results follow candidate iteration order.
pub fn match_party<S: SimilarityScorer + ?Sized>(
    query: &SaleRecord,
    candidates: &[CourtRecord],
    scorer: &S,
    opts: MatchOptions,
) -> Vec<MatchRecord> {
    let mut out = Vec::new();
    for cand in candidates {
        let last_score = field_score(
            scorer,
            query.name.last.as_deref(),
            cand.name.last.as_deref(),
        );
        let first_score = field_score(
            scorer,
            query.name.first.as_deref(),
            cand.name.first.as_deref(),
        );
        let score = opts.weights.combine(last_score, first_score);
        if score >= opts.threshold {
            out.push(MatchRecord {
                grantee_last: query.name.last.clone(),
                grantee_first: query.name.first.clone(),
                name_last: cand.name.last.clone(),
                name_first: cand.name.first.clone(),
                score,
                court_index: cand.index,
                sale_index: query.index,
            });
        }
    }
    out
}

const PROGRESS_EVERY: usize = 500;

/// Match every sale record against the full candidate set in parallel. The
/// candidate slice is read-only and shared across workers; results for each
/// query keep candidate order, and queries keep input order.
pub fn match_all<S: SimilarityScorer + ?Sized>(
    queries: &[SaleRecord],
    candidates: &[CourtRecord],
    scorer: &S,
    opts: MatchOptions,
) -> Vec<MatchRecord> {
    if queries.is_empty() || candidates.is_empty() {
        return Vec::new();
    }
    let total = queries.len();
    let processed = AtomicUsize::new(0);
    queries
        .par_iter()
        .flat_map_iter(|query| {
            let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
            if done % PROGRESS_EVERY == 0 {
                log::info!("matching: {}/{} grantees processed", done, total);
            }
            match_party(query, candidates, scorer, opts)
        })
        .collect()
}
