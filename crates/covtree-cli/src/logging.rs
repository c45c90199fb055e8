//! Tracing subscriber setup
//!
//! The verbosity flags pick the default level; `RUST_LOG` overrides it.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Filter for a verbosity level unless `RUST_LOG` is set
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Install the global subscriber, writing to stderr
///
/// A second call is a no-op.
pub fn init_tracing(verbosity: Verbosity, ansi: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(Verbosity::Quiet, false);
        init_tracing(Verbosity::Debug, false);
    }
}
