//! CSV sources for the two record collections produced upstream: the
//! scraped sale-history table and the court calendar table.

mod csv_source;

pub use csv_source::{
    load_court_records, load_sale_records, read_court_records, read_sale_records, IngestReport,
};
