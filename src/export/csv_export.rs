use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;
use csv::{Writer, WriterBuilder};

use crate::models::MatchRecord;

/// Output header. `Spy_Record_Index` keeps the upstream scrape dataset's
/// historical column name so downstream joins stay stable.
const HEADERS: [&str; 7] = [
    "Grantee_Last",
    "Grantee_First",
    "Name_Last",
    "Name_First",
    "Score",
    "Court_Record_Index",
    "Spy_Record_Index",
];

pub fn export_to_csv(results: &[MatchRecord], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let buf_writer = BufWriter::with_capacity(512 * 1024, file);
    write_matches(WriterBuilder::new().from_writer(buf_writer), results)
}

pub fn write_matches<W: std::io::Write>(
    mut w: Writer<W>,
    results: &[MatchRecord],
) -> Result<()> {
    w.write_record(HEADERS)?;
    for rec in results {
        write_row(&mut w, rec)?;
    }
    w.flush()?;
    Ok(())
}

fn write_row<W: std::io::Write>(w: &mut Writer<W>, rec: &MatchRecord) -> Result<()> {
    // Pre-format computed fields; absent name parts become empty cells
    let score = format!("{:.1}", rec.score);
    let court_idx = rec.court_index.to_string();
    let sale_idx = rec.sale_index.to_string();
    w.write_record([
        rec.grantee_last.as_deref().unwrap_or(""),
        rec.grantee_first.as_deref().unwrap_or(""),
        rec.name_last.as_deref().unwrap_or(""),
        rec.name_first.as_deref().unwrap_or(""),
        score.as_str(),
        court_idx.as_str(),
        sale_idx.as_str(),
    ])?;
    Ok(())
}
