//! Logging setup for the polymer-config binary.
//!
//! Library code only emits `tracing` events; the binary installs a
//! subscriber writing to stderr so stdout stays clean for JSON output.
//! `RUST_LOG` takes precedence over the `-v` flag.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "polymer_project_config=warn",
        1 => "polymer_project_config=debug",
        _ => "polymer_project_config=trace",
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbosity)))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0), "polymer_project_config=warn");
        assert_eq!(default_directive(1), "polymer_project_config=debug");
        assert_eq!(default_directive(5), "polymer_project_config=trace");
    }

    #[test]
    fn directives_parse() {
        for verbosity in 0..3 {
            assert!(EnvFilter::try_new(default_directive(verbosity)).is_ok());
        }
    }
}
