use tracing::debug;

use crate::core::DataTable;
use crate::error::{ChartError, ChartResult};
use crate::extensions::resolve_time_slider_marker;
use crate::render::{AxisRange, ChartInstructions, MinorTicks};

use super::{
    OverlayConfig, SeriesColorResolver, build_series_plan, resolve_labels, resolve_legend,
    resolve_plot_mode, validate_row_count,
};

/// Derives the chart for `table` under `config` at animation frame `frame`.
///
/// The function is pure: the same inputs always produce the same
/// instructions, and a validation failure produces no partial output.
pub fn select_chart(
    table: &DataTable,
    config: &OverlayConfig,
    frame: usize,
) -> ChartResult<ChartInstructions> {
    if table.y.is_none() {
        return Err(ChartError::NoYAxis);
    }

    let mode = resolve_plot_mode(table.plot_mode, config.plot_mode)?;
    let rows = table.row_count();
    validate_row_count(mode, rows)?;
    debug!(
        table = %table.identifier,
        hint = %table.plot_mode,
        %mode,
        rows,
        y_columns = table.data.y_column_count(),
        "selected chart"
    );

    let colors = SeriesColorResolver::from_style(&config.style);
    let plan = build_series_plan(table, mode, colors)?;
    let labels = resolve_labels(table, &config.style)?;

    let mut instructions = ChartInstructions::new(mode);
    instructions.series = plan.calls;
    instructions.x_tick_labels = plan.x_tick_labels;
    instructions.title = labels.title;
    instructions.x_label = labels.x_label;
    instructions.y_label = labels.y_label;
    instructions.legend = resolve_legend(table);
    instructions.minor_ticks = MinorTicks {
        x: config.style.x_minor_ticks,
        y: config.style.y_minor_ticks,
    };
    if config.y_range.enabled {
        instructions.y_range = Some(AxisRange::new(config.y_range.min, config.y_range.max)?);
    }
    if config.time_slider.enabled {
        if let Some(marker) =
            resolve_time_slider_marker(&table.data, frame, config.time_slider.color)
        {
            instructions = instructions.with_marker(marker);
        }
    }

    Ok(instructions)
}
