use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tracing::{error, info, info_span};

use schedsync_calendar::{materialize, to_ics};
use schedsync_extract::extract_schedule;
use schedsync_fingerprint::{ChangeStatus, FingerprintStore, fingerprint};
use schedsync_io::write_text;

use crate::cli::RunArgs;
use crate::config::SchedSyncConfig;
use crate::convert;
use crate::notify::{self, Notifier};
use crate::source::{self, WorkbookSource};
use crate::stage::{AtStage, Stage, StageError};

/// What a successful run produced.
#[derive(Debug)]
struct RunOutcome {
    n_entries: usize,
    n_events: usize,
    source: WorkbookSource,
    status: ChangeStatus,
}

/// Run the full pipeline: load, extract, write the calendar, update the
/// fingerprint and notify when the schedule changed.
///
/// Any failure is reported as `"{stage}: {cause}"` to the notifier before
/// being returned.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();

    let config = match SchedSyncConfig::load(&args.source.config).at(Stage::Config) {
        Ok(c) => c,
        Err(e) => {
            // No config means no notify settings; fall back to env credentials.
            let notifier = notify::build(!args.no_notify, Duration::from_secs(10));
            let group = args.source.group.as_deref().unwrap_or("-");
            return Err(report(notifier.as_ref(), group, e));
        }
    };

    let group = args
        .source
        .group
        .clone()
        .unwrap_or_else(|| config.group.label.clone());
    let timeout = Duration::from_secs(config.io.timeout_secs);
    let notifier = notify::build(config.notify.enabled && !args.no_notify, timeout);

    match pipeline(&args, &config, &group, timeout) {
        Ok(outcome) => {
            info!(
                group = %group,
                n_entries = outcome.n_entries,
                n_events = outcome.n_events,
                status = ?outcome.status,
                "run complete"
            );
            if outcome.status.is_update() {
                let text = notify::success_message(
                    &group,
                    outcome.n_entries,
                    &outcome.source.to_string(),
                    outcome.status,
                );
                notify::deliver(notifier.as_ref(), &text);
            } else {
                info!("schedule unchanged; no notification");
            }
            Ok(())
        }
        Err(e) => Err(report(notifier.as_ref(), &group, e)),
    }
}

fn report(notifier: &dyn Notifier, group: &str, err: StageError) -> anyhow::Error {
    error!(stage = %err.stage, cause = %format!("{:#}", err.cause), "run failed");
    notify::deliver(notifier, &notify::failure_message(group, &err));
    anyhow::Error::new(err)
}

fn pipeline(
    args: &RunArgs,
    config: &SchedSyncConfig,
    group: &str,
    timeout: Duration,
) -> Result<RunOutcome, StageError> {
    let extract_cfg = convert::build_extract_config(config, group).at(Stage::Config)?;
    let calendar_cfg = convert::build_calendar_config(config, group).at(Stage::Config)?;
    let source = source::resolve(&args.source, &config.io).at(Stage::Config)?;
    let output = args.output.as_ref().unwrap_or(&config.io.output);

    let store = FingerprintStore::new(&config.io.fingerprint);
    let previous = store.load().at(Stage::Fingerprint)?;

    let source = source::discover(source, timeout)?;
    let grid = source::load_grid(&source, config.io.sheet.as_deref(), timeout)?;
    let entries = extract_schedule(&grid, &extract_cfg).at(Stage::Extract)?;
    let events = materialize(&entries, &calendar_cfg).at(Stage::Materialize)?;

    let ics = to_ics(&events, &calendar_cfg, Utc::now());
    write_text(output, &ics).at(Stage::Write)?;

    let current = fingerprint(&entries);
    let status = ChangeStatus::compare(previous.as_ref(), &current);
    if status.is_update() {
        store.save(&current).at(Stage::Fingerprint)?;
    }
    info!(fingerprint = %current, status = ?status, "fingerprint compared");

    Ok(RunOutcome {
        n_entries: entries.len(),
        n_events: events.len(),
        source,
        status,
    })
}
