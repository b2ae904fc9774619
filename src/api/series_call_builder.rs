use tracing::trace;

use crate::core::{DataPoint, DataTable, PlotMode, XAxis, XyArray};
use crate::error::{ChartError, ChartResult};
use crate::render::{CategoryBar, SeriesCall, TextHAlign, TickLabelLayout};

use super::SeriesColorResolver;

/// Histogram and categorical bars fill this share of the x spacing.
pub const BAR_FILL_RATIO: f64 = 0.8;
/// Category labels longer than this many characters get rotated tick labels.
pub const ROTATE_LABELS_ABOVE_CHARS: usize = 10;
pub const ROTATED_LABEL_DEG: f64 = 45.0;

/// Draw calls for every y column of a table, plus any tick label layout the
/// chosen mode requires.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesPlan {
    pub calls: Vec<SeriesCall>,
    pub x_tick_labels: Option<TickLabelLayout>,
}

/// Builds one draw call per y column (columns 1..n) for `mode`.
pub fn build_series_plan(
    table: &DataTable,
    mode: PlotMode,
    colors: SeriesColorResolver,
) -> ChartResult<SeriesPlan> {
    let data = &table.data;
    let y_columns = 1..data.column_count();

    match mode {
        PlotMode::Line => Ok(SeriesPlan {
            calls: y_columns
                .map(|column| SeriesCall::Line {
                    points: finite_points(data, column),
                    color: colors.series_color(column - 1),
                })
                .collect(),
            x_tick_labels: None,
        }),
        PlotMode::Scatter => Ok(SeriesPlan {
            calls: y_columns
                .map(|column| SeriesCall::Scatter {
                    points: finite_points(data, column),
                    color: colors.series_color(column - 1),
                })
                .collect(),
            x_tick_labels: None,
        }),
        PlotMode::Histogram => {
            let width = BAR_FILL_RATIO * x_spacing(data, mode)?;
            Ok(SeriesPlan {
                calls: y_columns
                    .map(|column| SeriesCall::Bars {
                        points: finite_points(data, column),
                        width,
                        color: colors.series_color(column - 1),
                    })
                    .collect(),
                x_tick_labels: None,
            })
        }
        PlotMode::BarChart => match table.categorical_x() {
            Some(x_axis) => build_category_bar_plan(data, x_axis, colors),
            None => {
                let width = x_spacing(data, mode)?;
                Ok(SeriesPlan {
                    calls: y_columns
                        .map(|column| SeriesCall::Bars {
                            points: finite_points(data, column),
                            width,
                            color: colors.series_color(column - 1),
                        })
                        .collect(),
                    x_tick_labels: None,
                })
            }
        },
        PlotMode::NoPlot => Err(ChartError::ModeUndetermined),
    }
}

fn build_category_bar_plan(
    data: &XyArray,
    x_axis: &XAxis,
    colors: SeriesColorResolver,
) -> ChartResult<SeriesPlan> {
    let width = BAR_FILL_RATIO * x_spacing(data, PlotMode::BarChart)?;
    let categories = x_axis.types_by_id();
    let x_values = data.x_values();

    // Row holding each category: the row whose x equals the category ID. Only
    // when no category matches by ID are rows taken in sorted-ID order.
    let by_id: Vec<Option<usize>> = categories
        .iter()
        .map(|category| {
            let id = category.id as f64;
            x_values.iter().position(|x| *x == id)
        })
        .collect();
    let rows: Vec<Option<usize>> = if by_id.iter().any(Option::is_some) {
        by_id
    } else {
        (0..categories.len())
            .map(|position| (position < x_values.len()).then_some(position))
            .collect()
    };

    let mut calls = Vec::with_capacity(data.y_column_count());
    for column in 1..data.column_count() {
        let y_values = data.column(column);
        let bars: Vec<CategoryBar> = categories
            .iter()
            .zip(&rows)
            .filter_map(|(category, row)| {
                let height = y_values.get((*row)?).copied()?;
                height.is_finite().then(|| CategoryBar {
                    category_id: category.id,
                    label: category.name.clone(),
                    height,
                    color: colors.category_color(column - 1, category),
                })
            })
            .collect();
        trace!(
            column,
            categories = categories.len(),
            bars = bars.len(),
            "category bars"
        );
        calls.push(SeriesCall::CategoryBars { bars, width });
    }

    let rotate = categories
        .iter()
        .any(|category| category.name.chars().count() > ROTATE_LABELS_ABOVE_CHARS);

    Ok(SeriesPlan {
        calls,
        x_tick_labels: rotate.then_some(TickLabelLayout {
            rotation_deg: ROTATED_LABEL_DEG,
            h_align: TextHAlign::Right,
        }),
    })
}

/// Distance between the first two finite x values; spacing is assumed uniform.
fn x_spacing(data: &XyArray, mode: PlotMode) -> ChartResult<f64> {
    let mut finite_x = data.x_values().into_iter().filter(|x| x.is_finite());
    match (finite_x.next(), finite_x.next()) {
        (Some(first), Some(second)) => Ok(second - first),
        _ => Err(ChartError::InsufficientData {
            mode,
            rows: data.row_count(),
        }),
    }
}

fn finite_points(data: &XyArray, column: usize) -> Vec<DataPoint> {
    let points = data.points(column);
    let original_count = points.len();
    let points: Vec<DataPoint> = points.into_iter().filter(|p| p.is_finite()).collect();
    if points.len() != original_count {
        trace!(
            column,
            original_count,
            finite_count = points.len(),
            "dropped non-finite samples"
        );
    }
    points
}
