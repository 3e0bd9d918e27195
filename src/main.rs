mod chart;
mod cli;
mod dataset;
mod model;
mod output;
#[cfg(feature = "png")]
mod png;
mod stats;
mod svg;
mod text_summary;

use anyhow::Result;
use clap::Parser;

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = cli::Cli::parse();
    let is_machine_output = args.json;

    match cli::run(args) {
        Ok(()) => Ok(()),
        Err(e) => {
            // Keep stdout clean in JSON mode so consumers never see a
            // half-rendered document.
            if is_machine_output {
                eprintln!("{e:#}");
                std::process::exit(1);
            }
            Err(e)
        }
    }
}
