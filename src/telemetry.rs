//! Telemetry helpers for hosts embedding `table-plot-overlay`.
//!
//! Tracing setup stays explicit and opt-in. Hosts usually own the global
//! subscriber already; standalone tools can call `init_default_tracing`.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER_DIRECTIVE: &str = "info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER_DIRECTIVE)
}

/// Same as `init_default_tracing` with a custom fallback filter directive,
/// e.g. `"table_plot_overlay=debug"`.
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
