use crate::core::PlotMode;
use crate::error::{ChartError, ChartResult};

use super::RequestedPlotMode;

/// Resolves the chart type to draw.
///
/// An explicit request always wins over the table hint. Auto-detection takes
/// the hint as-is and fails when the table declares no plot mode.
pub fn resolve_plot_mode(hint: PlotMode, requested: RequestedPlotMode) -> ChartResult<PlotMode> {
    match requested.explicit() {
        Some(mode) => Ok(mode),
        None if hint == PlotMode::NoPlot => Err(ChartError::ModeUndetermined),
        None => Ok(hint),
    }
}
