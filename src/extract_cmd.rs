use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use schedsync_extract::extract_schedule;
use schedsync_io::write_text;

use crate::cli::ExtractArgs;
use crate::config::SchedSyncConfig;
use crate::convert;
use crate::source;
use crate::stage::{AtStage, Stage};

/// Extract lessons and print them as JSON. Writes no calendar or
/// fingerprint and sends no notification.
pub fn run(args: ExtractArgs) -> Result<()> {
    let _cmd = info_span!("extract").entered();

    let config = SchedSyncConfig::load(&args.source.config).at(Stage::Config)?;
    let group = args
        .source
        .group
        .clone()
        .unwrap_or_else(|| config.group.label.clone());
    let extract_cfg = convert::build_extract_config(&config, &group).at(Stage::Config)?;
    let source = source::resolve(&args.source, &config.io).at(Stage::Config)?;

    let timeout = Duration::from_secs(config.io.timeout_secs);
    let grid = source::load_grid(&source, config.io.sheet.as_deref(), timeout)?;
    let entries = extract_schedule(&grid, &extract_cfg).at(Stage::Extract)?;
    info!(group = %group, n_entries = entries.len(), "lessons extracted");

    let json = serde_json::to_string_pretty(&entries).context("failed to serialize entries")?;
    match &args.output {
        Some(path) => write_text(path, &json).at(Stage::Write)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write to stdout")?;
        }
    }
    Ok(())
}
