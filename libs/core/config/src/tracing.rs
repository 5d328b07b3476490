//! Log output for the catalog binaries.
//!
//! Production writes flattened JSON lines; development writes the pretty
//! multi-line format. Both carry an `ErrorLayer` so `eyre` reports include
//! the span trace of the failing request.

use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

const PRODUCTION_FILTER: &str = "info,tower_http=info,sea_orm=warn,sqlx=warn";
const DEVELOPMENT_FILTER: &str = "debug,tower_http=debug,sea_orm=info,sqlx=info";

/// Install the color-eyre report hook.
///
/// Call before anything fallible in `main` so startup errors are rendered
/// with their location. A second install is ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter directives used when `RUST_LOG` is unset.
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        PRODUCTION_FILTER
    } else {
        DEVELOPMENT_FILTER
    }
}

fn resolve_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(environment)))
}

/// Install the global subscriber for `environment`.
///
/// `RUST_LOG` overrides [`default_filter`] (e.g. `catalog_api=trace,sea_orm=debug`).
/// Calling this after a subscriber is already set is a no-op, which keeps
/// tests that share a process from fighting over the global.
pub fn init_tracing(environment: &Environment) {
    let filter = resolve_filter(environment);

    let installed = if environment.is_production() {
        let json = tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true);
        tracing_subscriber::registry()
            .with(json)
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        let pretty = tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(false)
            .with_file(false)
            .with_line_number(false);
        tracing_subscriber::registry()
            .with(pretty)
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match installed {
        Ok(()) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Global subscriber already set; keeping it"),
    }
}
