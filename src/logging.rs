//! Logging setup for the command-line tool
//!
//! The library only emits `tracing` events; the binary decides where they go.
//! Events are written to stderr so they never mix with command output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive, e.g. `dirtree=debug`.
pub const LOG_ENV: &str = "DIRTREE_LOG";

/// Default level for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter: `DIRTREE_LOG` wins when set and valid, otherwise the
/// verbosity level applies to everything.
pub fn build_env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Install the global subscriber. Calling this twice is harmless; the second
/// call leaves the first subscriber in place.
pub fn init_logging(verbosity: u8, use_color: bool) {
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(verbosity))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_color)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(0, false);
        init_logging(2, false);
    }
}
