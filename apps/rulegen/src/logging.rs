//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Library code emits `tracing` events (`info` per package, `debug` per rule
//! and written artifact). The binary installs a stderr fmt subscriber whose
//! filter comes from `RUST_LOG` when set, otherwise from `-v`/`-q`.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map `-v` count and `-q` to a level; default is `warn`.
pub fn level_from_flags(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init_logging(level: Level, ansi: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(level_from_flags(0, false), Level::WARN);
        assert_eq!(level_from_flags(2, false), Level::DEBUG);
        assert_eq!(level_from_flags(7, false), Level::TRACE);
        assert_eq!(level_from_flags(3, true), Level::ERROR);
    }
}
