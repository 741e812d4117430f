use serde::{Deserialize, Serialize};

/// A normalized (lower-cased, trimmed) last/first name pair.
/// `first` is absent when the raw string carried no separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyName {
    pub last: Option<String>,
    pub first: Option<String>,
}

impl PartyName {
    pub fn empty() -> Self {
        Self {
            last: None,
            first: None,
        }
    }
}

/// Query-side record: one grantee from the scraped sale-history table.
/// `index` is the row position in the source CSV before any filtering,
/// so output rows join back against the original file.
#[derive(Debug, Clone)]
pub struct SaleRecord {
    pub index: usize,
    pub name: PartyName,
}

/// Candidate-side record: one party name from the court calendar table.
#[derive(Debug, Clone)]
pub struct CourtRecord {
    pub index: usize,
    pub name: PartyName,
}

/// One qualifying match. Only constructed when the combined score met the
/// threshold; the same sale or court index may appear in many records.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub grantee_last: Option<String>,
    pub grantee_first: Option<String>,
    pub name_last: Option<String>,
    pub name_first: Option<String>,
    pub score: f64,
    pub court_index: usize,
    pub sale_index: usize,
}

/// Raw sale-history row as it appears in the scraped CSV. Only the grantee
/// column participates in matching; everything else is recovered by joining
/// on the row index downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleRow {
    #[serde(default)]
    pub grantee: Option<String>,
}

/// Raw court-calendar row.
#[derive(Debug, Clone, Deserialize)]
pub struct CourtRow {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}
