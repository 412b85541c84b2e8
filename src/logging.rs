//! Diagnostic logging on stderr.
//!
//! Results go to stdout; everything logged here goes to stderr so piped
//! output stays clean.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants::{APP_NAME, ENV_LOG};
use crate::env::Env;

/// Filter directive for a `-v` count: 0 → warn, 1 → info, 2+ → debug.
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    format!("{APP_NAME}={level}")
}

/// Filter directives: a valid `NUMCHECK_LOG` wins over the verbosity flag.
pub fn directives(verbosity: u8, env: &Env) -> String {
    env.var(ENV_LOG)
        .ok()
        .filter(|d| EnvFilter::try_new(d).is_ok())
        .unwrap_or_else(|| default_directive(verbosity))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8, env: &Env) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directives(verbosity, env)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "numcheck=warn");
        assert_eq!(default_directive(1), "numcheck=info");
        assert_eq!(default_directive(5), "numcheck=debug");
    }

    #[test]
    fn env_directive_wins() {
        let env = Env::mock([("NUMCHECK_LOG", "numcheck=trace")]);
        assert_eq!(directives(0, &env), "numcheck=trace");
    }

    #[test]
    fn falls_back_to_verbosity() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert_eq!(directives(1, &env), "numcheck=info");
    }

    #[test]
    fn invalid_env_directive_is_ignored() {
        let env = Env::mock([("NUMCHECK_LOG", "numcheck=loud")]);
        assert_eq!(directives(0, &env), "numcheck=warn");
    }

    #[test]
    fn init_twice_does_not_panic() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        init(0, &env);
        init(2, &env);
    }
}
