mod cli;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auto_annotate::{SiteTerms, TermMap};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("auto_annotate={}", cli.log_level()).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let terms = load_terms(&cli)?;
    let body = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let (annotated, stats) = terms.annotate_with_stats(&body, &cli.options());
    tracing::info!(
        links = stats.links.wrapped,
        notes = stats.notes.wrapped,
        skipped = stats.links.skipped() + stats.notes.skipped(),
        "Annotated {}",
        cli.input.display()
    );
    for term in stats.links.missing.iter().chain(&stats.notes.missing) {
        tracing::debug!(term = %term, "Term never occurs");
    }

    match &cli.output {
        Some(path) => std::fs::write(path, annotated)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .write_all(annotated.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}

/// Data directory maps first, then explicit files replace them.
fn load_terms(cli: &Cli) -> Result<SiteTerms> {
    let mut terms = match &cli.data_dir {
        Some(dir) => SiteTerms::load(dir)?,
        None => SiteTerms::default(),
    };
    if let Some(path) = &cli.links {
        terms.links = TermMap::from_json_file(path)?;
    }
    if let Some(path) = &cli.notes {
        terms.notes = TermMap::from_json_file(path)?;
    }
    if terms.is_empty() {
        tracing::warn!("No terms to annotate, output equals input");
    }
    Ok(terms)
}
