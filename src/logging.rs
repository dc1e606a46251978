//! Diagnostic logging via `tracing`, written to stderr.
//!
//! Lookup results never go through here; they are printed by [crate::ui].

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Maps the `-v` count to an `EnvFilter` directive.
///
/// 0 = warn, 1 = info, 2 = debug, 3 or more = trace.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Colour only when stderr is a terminal and `NO_COLOR` is unset or empty.
pub fn ansi_enabled(stderr_is_terminal: bool, no_color: Option<&str>) -> bool {
    stderr_is_terminal && no_color.map_or(true, str::is_empty)
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity count when it is set and
/// parses. Calling this twice is harmless; the second call is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(ansi_enabled(
            std::io::stderr().is_terminal(),
            std::env::var("NO_COLOR").ok().as_deref(),
        ))
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
