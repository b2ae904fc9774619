use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DataPoint, PlotMode};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, TextHAlign};

/// One bar of a categorical bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBar {
    pub category_id: i64,
    pub label: String,
    pub height: f64,
    /// `None` leaves the choice to the plotting surface.
    pub color: Option<Color>,
}

/// Draw call for one y series.
///
/// Colors set to `None` defer to the plotting surface's default cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeriesCall {
    Line {
        points: Vec<DataPoint>,
        color: Option<Color>,
    },
    Bars {
        points: Vec<DataPoint>,
        width: f64,
        color: Option<Color>,
    },
    CategoryBars {
        bars: Vec<CategoryBar>,
        width: f64,
    },
    Scatter {
        points: Vec<DataPoint>,
        color: Option<Color>,
    },
}

impl SeriesCall {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Line { points, .. }
            | Self::Bars { points, .. }
            | Self::Scatter { points, .. } => points.len(),
            Self::CategoryBars { bars, .. } => bars.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line { points, color } | Self::Scatter { points, color } => {
                validate_points(points)?;
                validate_optional_color(*color)
            }
            Self::Bars {
                points,
                width,
                color,
            } => {
                validate_bar_width(*width)?;
                validate_points(points)?;
                validate_optional_color(*color)
            }
            Self::CategoryBars { bars, width } => {
                validate_bar_width(*width)?;
                for bar in bars {
                    if bar.label.is_empty() {
                        return Err(ChartError::InvalidData(
                            "category bar label must not be empty".to_owned(),
                        ));
                    }
                    if !bar.height.is_finite() {
                        return Err(ChartError::InvalidData(format!(
                            "category bar `{}` height must be finite",
                            bar.label
                        )));
                    }
                    validate_optional_color(bar.color)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LegendPlacement {
    /// Let the surface pick the least obstructing corner.
    #[default]
    Best,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub entries: SmallVec<[String; 4]>,
    pub placement: LegendPlacement,
    /// Length of the legend handle in font-size units.
    pub handle_length: f64,
}

impl Legend {
    #[must_use]
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = S>) -> Self {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            placement: LegendPlacement::Best,
            handle_length: 0.7,
        }
    }
}

/// Layout override for x tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickLabelLayout {
    pub rotation_deg: f64,
    pub h_align: TextHAlign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MinorTicks {
    pub x: bool,
    pub y: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidData(
                "axis range must be finite with min < max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }
}

/// Full-height vertical line drawn at a data-space x position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalMarker {
    pub x: f64,
    pub color: Color,
}

/// Backend-agnostic chart description for one overlay draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInstructions {
    pub mode: PlotMode,
    pub series: Vec<SeriesCall>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend: Option<Legend>,
    pub x_tick_labels: Option<TickLabelLayout>,
    pub minor_ticks: MinorTicks,
    pub y_range: Option<AxisRange>,
    pub markers: Vec<VerticalMarker>,
}

impl ChartInstructions {
    #[must_use]
    pub fn new(mode: PlotMode) -> Self {
        Self {
            mode,
            series: Vec::new(),
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            legend: None,
            x_tick_labels: None,
            minor_ticks: MinorTicks::default(),
            y_range: None,
            markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesCall) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: VerticalMarker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for series in &self.series {
            series.validate()?;
        }
        if let Some(layout) = self.x_tick_labels {
            if !layout.rotation_deg.is_finite() {
                return Err(ChartError::InvalidData(
                    "tick label rotation must be finite".to_owned(),
                ));
            }
        }
        if let Some(range) = self.y_range {
            AxisRange::new(range.min, range.max)?;
        }
        for marker in &self.markers {
            if !marker.x.is_finite() {
                return Err(ChartError::InvalidData(
                    "marker position must be finite".to_owned(),
                ));
            }
            marker.color.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(SeriesCall::is_empty) && self.markers.is_empty()
    }
}

fn validate_points(points: &[DataPoint]) -> ChartResult<()> {
    if points.iter().all(|point| point.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(
            "series coordinates must be finite".to_owned(),
        ))
    }
}

fn validate_bar_width(width: f64) -> ChartResult<()> {
    if width.is_finite() {
        Ok(())
    } else {
        Err(ChartError::InvalidData("bar width must be finite".to_owned()))
    }
}

fn validate_optional_color(color: Option<Color>) -> ChartResult<()> {
    color.map_or(Ok(()), Color::validate)
}
