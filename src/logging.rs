//! Tracing setup for embedders without a subscriber of their own
//!
//! The engines only emit `tracing` events; installing a subscriber is
//! the host application's job. `init` is a convenience for tests and
//! small consumers: a stderr subscriber filtered by an explicit
//! directive, the `STEPGRAPH_LOG` environment variable, or a quiet
//! default, in that order.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted when no explicit filter is given
pub const LOG_ENV_VAR: &str = "STEPGRAPH_LOG";

const DEFAULT_FILTER: &str = "stepgraph=warn";

/// Install a stderr subscriber for this process
///
/// `filter` is either a bare level (`"debug"`, scoped to this crate) or
/// a full filter directive. Fails if a subscriber is already installed.
pub fn init(filter: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match filter {
        Some(directive) => parse_filter(directive),
        None => EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Bare levels apply to this crate only; full directives pass through
fn parse_filter(directive: &str) -> EnvFilter {
    if directive.contains('=') {
        EnvFilter::new(directive)
    } else {
        EnvFilter::new(format!("stepgraph={directive}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_scopes_bare_level_to_crate() {
        assert_eq!(parse_filter("debug").to_string(), "stepgraph=debug");
    }

    #[test]
    fn test_parse_filter_passes_directives_through() {
        assert_eq!(
            parse_filter("stepgraph=trace,other=off").to_string(),
            "stepgraph=trace,other=off"
        );
    }

    #[test]
    fn test_init_installs_at_most_one_subscriber() {
        assert!(init(Some("debug"), false).is_ok());
        // A second install must fail rather than silently replace
        assert!(init(Some("trace"), true).is_err());
    }
}
