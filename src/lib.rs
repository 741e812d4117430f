pub mod config;
pub mod export;
pub mod ingest;
pub mod matching;
pub mod models;
pub mod normalize;
pub mod pipeline;

pub mod cli;
pub mod error;
pub mod logging;
