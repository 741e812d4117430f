//! CLI parsing and conversion into the validated application config.

mod clap_parser;

pub use clap_parser::Cli;
