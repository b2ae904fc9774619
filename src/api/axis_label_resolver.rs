use crate::core::DataTable;
use crate::error::{ChartError, ChartResult};
use crate::render::Legend;

use super::OverlayStyle;

/// Title and axis labels after applying user overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

/// Resolves title and axis labels.
///
/// Non-empty user labels win. Empty ones fall back to the table: x to the
/// x-axis identifier (or the table's default x label when it has no x-axis),
/// y to the y-axis identifier, title to the table title.
pub fn resolve_labels(table: &DataTable, style: &OverlayStyle) -> ChartResult<ResolvedLabels> {
    let y_axis = table.y.as_ref().ok_or(ChartError::NoYAxis)?;

    let x_label = override_or(&style.x_label, || match &table.x {
        Some(x_axis) => x_axis.identifier.clone(),
        None => table.axis_label_x.clone(),
    });
    let y_label = override_or(&style.y_label, || y_axis.identifier.clone());
    let title = override_or(&style.title, || table.title.clone());

    Ok(ResolvedLabels {
        title,
        x_label,
        y_label,
    })
}

/// Legend listing the y components; only multi-component tables get one.
#[must_use]
pub fn resolve_legend(table: &DataTable) -> Option<Legend> {
    table
        .y
        .as_ref()
        .filter(|y_axis| y_axis.has_named_components())
        .map(|y_axis| Legend::new(y_axis.component_names.iter().cloned()))
}

fn override_or(user_value: &str, derive: impl FnOnce() -> String) -> String {
    if user_value.is_empty() {
        derive()
    } else {
        user_value.to_owned()
    }
}
