use clap::Parser;
use log::error;

use grantee_matcher::cli::Cli;
use grantee_matcher::logging::init_tracing_from_env;
use grantee_matcher::pipeline;

fn main() {
    init_tracing_from_env();
    let cli = Cli::parse();
    let cfg = match cli.to_app_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("invalid configuration: {}", e);
            std::process::exit(2);
        }
    };
    match pipeline::run(&cfg) {
        Ok(summary) => summary.log(),
        Err(e) => {
            error!("run failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
