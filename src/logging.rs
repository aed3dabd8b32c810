//! Logging setup
//!
//! In the browser, events go to the developer console through
//! `tracing-wasm`. Native builds (tests, tooling) use a `tracing-subscriber`
//! formatter filtered by `RUST_LOG`, defaulting to `info`.

/// Install the global subscriber; later calls are no-ops
pub fn init() {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        use std::sync::Once;

        static INIT: Once = Once::new();
        INIT.call_once(tracing_wasm::set_as_global_default);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Fails only when a subscriber is already installed
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::INFO.into()),
            )
            .try_init();
    }
}
