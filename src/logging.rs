use tracing_subscriber::EnvFilter;

/// Workspace crates whose events follow the `-v` level.
const CRATE_TARGETS: &[&str] = &[
    "schedsync",
    "schedsync_calendar",
    "schedsync_extract",
    "schedsync_fingerprint",
    "schedsync_grid",
    "schedsync_io",
];

/// HTTP and HTML stacks stay at `warn` unless `RUST_LOG` says otherwise.
const QUIET_TARGETS: &[&str] = &["reqwest", "hyper", "html5ever", "selectors"];

/// Level for our own crates at a given `-v` count.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives used when `RUST_LOG` is unset.
fn default_directives(verbosity: u8) -> String {
    let level = level(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .chain(QUIET_TARGETS.iter().map(|t| format!("{t}=warn")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the stderr subscriber.
///
/// `RUST_LOG` replaces the `-v` mapping entirely. Event targets are shown
/// from `-vv` on. Stdout is left to `extract`, which prints JSON there.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}
