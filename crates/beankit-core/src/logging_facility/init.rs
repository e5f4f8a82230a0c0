//! Subscriber installation for applications embedding beankit

use std::sync::Once;

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Output profile for [`init`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines, debug and above
    Development,
    /// One JSON object per event, info and above
    Production,
    /// Nothing is installed; tests use `init_test_capture` instead
    Test,
}

impl Profile {
    /// Directive used when `RUST_LOG` is unset or invalid
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "beankit_core=debug",
            Profile::Production => "beankit_core=info",
            Profile::Test => "beankit_core=trace",
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_filter()))
    }
}

static INIT: Once = Once::new();

/// Install a global subscriber for `profile`.
///
/// Only the first call does anything. A subscriber the host application has
/// already installed is left in place. Returns whether this call installed
/// one.
///
/// # Example
///
/// ```
/// use beankit_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// assert!(!init(Profile::Development));
/// ```
pub fn init(profile: Profile) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let filter = profile.env_filter();
        installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .finish()
                .try_init()
                .is_ok(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .finish()
                .try_init()
                .is_ok(),
            Profile::Test => false,
        };
    });
    installed
}
