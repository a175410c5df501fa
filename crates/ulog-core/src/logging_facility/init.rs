//! Subscriber initialization
//!
//! Installs the global `tracing` subscriber that receives the structured
//! backend's events.

use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Subscriber profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, every ulog severity visible
    Development,
    /// JSON output from info upwards
    Production,
    /// Bare registry; tests attach a capture layer instead
    Test,
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" | "development" => Ok(Profile::Development),
            "prod" | "production" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown profile '{}'", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the subscriber for `profile`
///
/// Only the first call has an effect. `RUST_LOG` overrides the profile's
/// default filter. `Profile::Test` installs the capture layer of
/// [`init_test_capture`], so both can be used in one test binary. If another
/// global subscriber is already set, nothing is replaced.
///
/// [`init_test_capture`]: super::test_capture::init_test_capture
///
/// # Example
///
/// ```
/// use ulog_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("ulog=trace")),
                )
                .with_writer(std::io::stderr)
                .try_init()
                .ok();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("ulog=info")),
                )
                .with_writer(std::io::stderr)
                .try_init()
                .ok();
        }
        Profile::Test => {
            super::test_capture::init_test_capture();
        }
    });
}
