//! table-plot-overlay: chart selection for data-table viewport overlays.
//!
//! Given a named data table from a host pipeline and user configuration, the
//! crate decides which chart to draw and emits backend-agnostic
//! `ChartInstructions` for a plotting surface composited onto the host canvas.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{DataTablePlotOverlay, OverlayConfig, ViewportOverlay, select_chart};
pub use error::{ChartError, ChartResult};
