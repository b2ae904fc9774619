use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PlotMode};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Row-major numeric array where column 0 holds x and the rest hold y series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawXyArray")]
pub struct XyArray {
    column_count: usize,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawXyArray {
    column_count: usize,
    values: Vec<f64>,
}

impl TryFrom<RawXyArray> for XyArray {
    type Error = ChartError;

    fn try_from(raw: RawXyArray) -> ChartResult<Self> {
        let mut array = Self::empty(raw.column_count)?;
        if raw.values.len() % raw.column_count != 0 {
            return Err(ChartError::InvalidData(format!(
                "{} values do not fill rows of {} columns",
                raw.values.len(),
                raw.column_count
            )));
        }
        array.values = raw.values;
        Ok(array)
    }
}

impl XyArray {
    /// Creates an empty array with `column_count` columns.
    pub fn empty(column_count: usize) -> ChartResult<Self> {
        if column_count < 2 {
            return Err(ChartError::InvalidData(format!(
                "table needs an x column and at least one y column, got {column_count} columns"
            )));
        }
        Ok(Self {
            column_count,
            values: Vec::new(),
        })
    }

    /// Builds an array from rows; all rows must have the same width (>= 2).
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> ChartResult<Self>
    where
        R: AsRef<[f64]>,
    {
        let mut column_count = None;
        let mut values = Vec::new();
        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            match column_count {
                None => {
                    if row.len() < 2 {
                        return Err(ChartError::InvalidData(format!(
                            "table needs an x column and at least one y column, got {} columns",
                            row.len()
                        )));
                    }
                    column_count = Some(row.len());
                }
                Some(expected) if expected != row.len() => {
                    return Err(ChartError::InvalidData(format!(
                        "table row {index} has {} columns, expected {expected}",
                        row.len()
                    )));
                }
                Some(_) => {}
            }
            values.extend_from_slice(row);
        }

        Ok(Self {
            column_count: column_count.unwrap_or(2),
            values,
        })
    }

    /// Builds a two-column array from an x series and one y series.
    pub fn from_xy(x: &[f64], y: &[f64]) -> ChartResult<Self> {
        if x.len() != y.len() {
            return Err(ChartError::InvalidData(format!(
                "x and y series lengths differ: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        Self::from_rows(x.iter().zip(y).map(|(x, y)| [*x, *y]))
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.values.len() / self.column_count
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    #[must_use]
    pub fn y_column_count(&self) -> usize {
        self.column_count - 1
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.column_count)?;
        self.values.get(start..start + self.column_count)
    }

    /// Values of one column, top to bottom. Empty for an out-of-range column.
    #[must_use]
    pub fn column(&self, column: usize) -> Vec<f64> {
        if column >= self.column_count {
            return Vec::new();
        }
        self.values
            .chunks_exact(self.column_count)
            .map(|row| row[column])
            .collect()
    }

    #[must_use]
    pub fn x_values(&self) -> Vec<f64> {
        self.column(0)
    }

    /// `(x, y)` pairs for y column `column` (1-based, column 0 is x).
    #[must_use]
    pub fn points(&self, column: usize) -> Vec<DataPoint> {
        if column == 0 || column >= self.column_count {
            return Vec::new();
        }
        self.values
            .chunks_exact(self.column_count)
            .map(|row| DataPoint::new(row[0], row[column]))
            .collect()
    }
}

/// One named category of a categorical x-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementType {
    pub id: i64,
    pub name: String,
    pub color: Color,
}

impl ElementType {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxis {
    pub identifier: String,
    #[serde(default)]
    pub types: Vec<ElementType>,
}

impl XAxis {
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            types: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, element_type: ElementType) -> Self {
        self.types.push(element_type);
        self
    }

    /// An x-axis is categorical when it carries named types.
    #[must_use]
    pub fn is_categorical(&self) -> bool {
        !self.types.is_empty()
    }

    /// Types ordered by ascending ID; ties keep their declared order.
    #[must_use]
    pub fn types_by_id(&self) -> Vec<&ElementType> {
        let mut types: Vec<&ElementType> = self.types.iter().collect();
        types.sort_by_key(|element_type| element_type.id);
        types
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxis {
    pub identifier: String,
    pub component_count: usize,
    #[serde(default)]
    pub component_names: Vec<String>,
}

impl YAxis {
    #[must_use]
    pub fn scalar(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            component_count: 1,
            component_names: Vec::new(),
        }
    }

    #[must_use]
    pub fn vector<S: Into<String>>(
        identifier: impl Into<String>,
        component_names: impl IntoIterator<Item = S>,
    ) -> Self {
        let component_names: Vec<String> = component_names.into_iter().map(Into::into).collect();
        Self {
            identifier: identifier.into(),
            component_count: component_names.len(),
            component_names,
        }
    }

    #[must_use]
    pub fn has_named_components(&self) -> bool {
        self.component_count >= 2 && !self.component_names.is_empty()
    }
}

/// Named dataset produced by the upstream pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    pub identifier: String,
    #[serde(default)]
    pub title: String,
    /// Table-level x label used when no x-axis descriptor exists.
    #[serde(default)]
    pub axis_label_x: String,
    #[serde(default)]
    pub x: Option<XAxis>,
    #[serde(default)]
    pub y: Option<YAxis>,
    #[serde(default)]
    pub plot_mode: PlotMode,
    pub data: XyArray,
}

impl DataTable {
    #[must_use]
    pub fn new(identifier: impl Into<String>, plot_mode: PlotMode, data: XyArray) -> Self {
        Self {
            identifier: identifier.into(),
            title: String::new(),
            axis_label_x: String::new(),
            x: None,
            y: None,
            plot_mode,
            data,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_axis_label_x(mut self, label: impl Into<String>) -> Self {
        self.axis_label_x = label.into();
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, x: XAxis) -> Self {
        self.x = Some(x);
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, y: YAxis) -> Self {
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.row_count()
    }

    /// Categorical x-axis, if the table has one.
    #[must_use]
    pub fn categorical_x(&self) -> Option<&XAxis> {
        self.x.as_ref().filter(|x| x.is_categorical())
    }
}
