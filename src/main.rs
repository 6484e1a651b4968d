use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use txscope::config::{get_config, init_config};
use txscope::consts::DEFAULT_LOG_FILTER;
use txscope::explorer::pages::tx::tx_page;
use txscope::schemas::TransactionSummary;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<()> {
    init_tracing();

    // 1) Parse and validate flags.
    init_config()?;
    let cfg = get_config();

    // 2) Load the summary handed over by the fetch layer.
    let raw = fs::read_to_string(&cfg.input)
        .with_context(|| format!("failed to read {}", cfg.input.display()))?;
    let summary: TransactionSummary = serde_json::from_str(&raw)
        .with_context(|| format!("failed to decode transaction summary {}", cfg.input.display()))?;

    tracing::info!(
        digest = summary.digest.as_deref().unwrap_or("-"),
        balance_changes = summary.balance_changes.as_ref().map_or(0, Vec::len),
        network = cfg.network.as_str(),
        "loaded transaction summary"
    );

    // 3) Render and write.
    let page = tx_page(&summary, &cfg.render_options());
    match &cfg.output {
        Some(path) => {
            fs::write(path, &page).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = page.len(), "page written");
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(page.as_bytes()).context("failed to write page to stdout")?;
            out.flush()?;
        }
    }

    Ok(())
}
