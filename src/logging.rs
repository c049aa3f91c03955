//! Tracing setup.
//!
//! In the browser, events go to the devtools console through `tracing-wasm`
//! and panics are reported by `console_error_panic_hook`. Natively a `fmt`
//! subscriber honours `RUST_LOG` (default `info`).

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    INIT.call_once(install);
}

#[cfg(target_arch = "wasm32")]
fn install() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

#[cfg(not(target_arch = "wasm32"))]
fn install() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Another subscriber may already be installed by a test harness.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        tracing::info!("logging initialised twice without panicking");
    }
}
