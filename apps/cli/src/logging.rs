//! Logging initialization for the CLI
//!
//! Diagnostics go to stderr so stdout carries only resolved values.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "objectpath=debug,warn",
        _ => "objectpath=trace,debug",
    }
}

/// Initialize logging. `RUST_LOG` takes precedence over `verbosity`.
pub fn init(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_raises_level() {
        assert_eq!(default_directive(0), "warn");
        assert!(default_directive(1).contains("objectpath=debug"));
        assert!(default_directive(5).contains("objectpath=trace"));
    }
}
