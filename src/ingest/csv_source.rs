use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use csv::ReaderBuilder;

use crate::config::FilterConfig;
use crate::error::IngestError;
use crate::models::{CourtRecord, CourtRow, SaleRecord, SaleRow};
use crate::normalize::{is_organization, split_party};

/// Records kept for matching plus how many rows the organization
/// prefilter dropped. Indices on the kept records are the original row
/// positions, so filtered output still joins back against the source file.
#[derive(Debug)]
pub struct IngestReport<T> {
    pub records: Vec<T>,
    pub dropped_orgs: usize,
}

pub fn load_sale_records(
    path: &Path,
    filter: &FilterConfig,
) -> Result<IngestReport<SaleRecord>, IngestError> {
    let file = File::open(path)?;
    read_sale_records(BufReader::new(file), filter)
}

pub fn load_court_records(
    path: &Path,
    filter: &FilterConfig,
) -> Result<IngestReport<CourtRecord>, IngestError> {
    let file = File::open(path)?;
    read_court_records(BufReader::new(file), filter)
}

/// Parse sale-history rows; grantee strings are "LAST & FIRST" shaped.
pub fn read_sale_records<R: io::Read>(
    rdr: R,
    filter: &FilterConfig,
) -> Result<IngestReport<SaleRecord>, IngestError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(rdr);
    require_column(&mut reader, "grantee")?;
    let keywords = upper_keywords(&filter.sale_keywords);

    let mut records = Vec::new();
    let mut dropped_orgs = 0usize;
    for (index, row) in reader.deserialize::<SaleRow>().enumerate() {
        let row = row?;
        if filter.enabled
            && row
                .grantee
                .as_deref()
                .is_some_and(|g| is_organization(g, &keywords))
        {
            dropped_orgs += 1;
            continue;
        }
        records.push(SaleRecord {
            index,
            name: split_party(row.grantee.as_deref(), '&'),
        });
    }
    Ok(IngestReport {
        records,
        dropped_orgs,
    })
}

/// Parse court calendar rows; party names are "Last, First" shaped.
pub fn read_court_records<R: io::Read>(
    rdr: R,
    filter: &FilterConfig,
) -> Result<IngestReport<CourtRecord>, IngestError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(rdr);
    require_column(&mut reader, "Name")?;
    let keywords = upper_keywords(&filter.court_keywords);

    let mut records = Vec::new();
    let mut dropped_orgs = 0usize;
    for (index, row) in reader.deserialize::<CourtRow>().enumerate() {
        let row = row?;
        if filter.enabled
            && row
                .name
                .as_deref()
                .is_some_and(|n| is_organization(n, &keywords))
        {
            dropped_orgs += 1;
            continue;
        }
        records.push(CourtRecord {
            index,
            name: split_party(row.name.as_deref(), ','),
        });
    }
    Ok(IngestReport {
        records,
        dropped_orgs,
    })
}

/// Upper-case the configured keyword list once per file, not per row.
fn upper_keywords(keywords: &[String]) -> Vec<String> {
    keywords.iter().map(|k| k.to_uppercase()).collect()
}

fn require_column<R: io::Read>(
    reader: &mut csv::Reader<R>,
    column: &'static str,
) -> Result<(), IngestError> {
    let present = reader.headers()?.iter().any(|h| h == column);
    if present {
        Ok(())
    } else {
        Err(IngestError::MissingColumn { column })
    }
}
