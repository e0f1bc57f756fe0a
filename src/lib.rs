#![doc(test(attr(deny(warnings))))]

//! Quincena Core offers the validated record contracts and pure calculators
//! behind a pay-period personal finance tracker: pay-period summaries,
//! savings allocation tracking, and goal contribution planning.

pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod wire;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Quincena Core tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::from_default_env().add_directive("quincena_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
