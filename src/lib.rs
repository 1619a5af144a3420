pub mod build;
pub mod cli;
pub mod error;
pub mod files;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use processor::minifier::{HtmlMinifier, Identity, Minifier};

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = args.config();
    let minifier: Box<dyn Minifier> = if args.no_minify {
        Box::new(Identity)
    } else {
        Box::new(HtmlMinifier::default())
    };

    // ── Build ─────────────────────────────────────────────────────────
    let report = build::build_site(&config, minifier.as_ref())
        .with_context(|| format!("Building pages from {}", config.template.display()))?;

    tracing::info!(
        pages = report.written.len(),
        warnings = report.errors.len(),
        "build finished"
    );

    Ok(())
}
