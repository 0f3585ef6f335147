//! Console logging setup.
//!
//! `RUST_LOG` always wins; otherwise the default directive is `info`, or
//! `debug` when verbose output was requested.
//!
//! ```ignore
//! solodev_core::logging::init(false)?;
//! tracing::info!("ready");
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::TemplateError;
use crate::Result;

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global fmt subscriber.
pub fn init(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| TemplateError::Logging(e.to_string()))
}
