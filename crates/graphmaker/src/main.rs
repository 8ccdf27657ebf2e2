// File: crates/graphmaker/src/main.rs
// Summary: Prompts for CSV data and chart preferences, renders the chart, saves it, copies it to the clipboard and optionally previews it.

mod preview;
mod prompt;

use std::io;

use anyhow::{Context, Result};
use graph_core::{default_clipboard, Chart, Exporter, PivotTable, RenderOptions};

use crate::prompt::Prompter;

fn main() -> Result<()> {
    // Logs go to stderr so the prompts on stdout stay readable
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let prefs = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Prompter::new(stdin.lock(), stdout.lock()).collect()?
    };

    let pivot = PivotTable::from_csv(&prefs.csv).context("failed to read CSV data")?;
    tracing::info!(dates = pivot.row_count(), categories = pivot.column_count(), "aggregated input");

    let chart = Chart::new(pivot, prefs.graph_type, prefs.scheme).with_title(prefs.title);
    let opts = RenderOptions::with_background(prefs.background);
    let png = chart
        .render_to_png_bytes(&opts)
        .context("failed to render chart")?;

    let report = Exporter::new(default_clipboard())
        .export(&png, &prefs.filename)
        .with_context(|| format!("failed to save '{}'", prefs.filename))?;

    // Clipboard failures are only logged; the confirmation is printed regardless.
    tracing::debug!(copied = report.copied(), "export finished");
    println!("Graph saved as {}", report.saved.display());
    println!("Graph copied to clipboard!");

    // The chart is already on disk, so a preview failure only gets logged.
    if let Err(e) = preview::show(&chart, &opts) {
        tracing::warn!(error = %e, "preview failed");
    }
    Ok(())
}
