use ordered_float::OrderedFloat;
use tracing::warn;

use crate::core::XyArray;
use crate::render::{Color, VerticalMarker};

/// Index of the x value closest to `target`.
///
/// Non-finite x values never match. When no finite value exists the lookup
/// falls back to the last row; an empty column yields `None`.
#[must_use]
pub fn nearest_row_index(x_values: &[f64], target: f64) -> Option<usize> {
    let last = x_values.len().checked_sub(1)?;
    if !target.is_finite() {
        return Some(last);
    }
    let nearest = x_values
        .iter()
        .enumerate()
        .filter(|(_, x)| x.is_finite())
        .min_by_key(|(_, x)| OrderedFloat((*x - target).abs()))
        .map(|(index, _)| index);
    Some(nearest.unwrap_or(last))
}

/// Vertical marker at the x position matching animation frame `frame`.
#[must_use]
pub fn resolve_time_slider_marker(
    data: &XyArray,
    frame: usize,
    color: Color,
) -> Option<VerticalMarker> {
    let x_values = data.x_values();
    let index = nearest_row_index(&x_values, frame as f64)?;
    let x = x_values[index];
    if !x.is_finite() {
        warn!(frame, index, "time slider skipped: no finite x value");
        return None;
    }
    Some(VerticalMarker { x, color })
}
