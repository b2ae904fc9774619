use serde::{Deserialize, Serialize};

use crate::core::PlotMode;
use crate::error::ChartResult;
use crate::render::Color;

/// Chart type requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RequestedPlotMode {
    /// Use the plot mode declared by the table.
    #[default]
    AutoDetect,
    Line,
    Histogram,
    BarChart,
    Scatter,
}

impl RequestedPlotMode {
    /// Explicit mode, or `None` for auto-detection.
    #[must_use]
    pub const fn explicit(self) -> Option<PlotMode> {
        match self {
            Self::AutoDetect => None,
            Self::Line => Some(PlotMode::Line),
            Self::Histogram => Some(PlotMode::Histogram),
            Self::BarChart => Some(PlotMode::BarChart),
            Self::Scatter => Some(PlotMode::Scatter),
        }
    }
}

/// Point of the overlay box that is pinned to the configured position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Anchor {
    #[default]
    NorthWest,
    North,
    NorthEast,
    West,
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Anchor {
    /// Anchor offset inside the box as fractions of its size, origin at the
    /// bottom-left corner.
    #[must_use]
    pub const fn box_fraction(self) -> (f64, f64) {
        match self {
            Self::NorthWest => (0.0, 1.0),
            Self::North => (0.5, 1.0),
            Self::NorthEast => (1.0, 1.0),
            Self::West => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::East => (1.0, 0.5),
            Self::SouthWest => (0.0, 0.0),
            Self::South => (0.5, 0.0),
            Self::SouthEast => (1.0, 0.0),
        }
    }
}

/// Position and appearance of the overlay box in normalized canvas units.
///
/// `x`/`y` use a bottom-left origin, matching the host's overlay coordinate
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayPlacement {
    #[serde(default = "default_position_x")]
    pub x: f64,
    #[serde(default = "default_position_y")]
    pub y: f64,
    #[serde(default = "default_box_size")]
    pub width: f64,
    #[serde(default = "default_box_size")]
    pub height: f64,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default)]
    pub anchor: Anchor,
}

impl Default for OverlayPlacement {
    fn default() -> Self {
        Self {
            x: default_position_x(),
            y: default_position_y(),
            width: default_box_size(),
            height: default_box_size(),
            alpha: default_alpha(),
            anchor: Anchor::default(),
        }
    }
}

/// Colors used for series when no uniform color is forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorStrategy {
    /// Category bars take their table color; other series use the surface
    /// default cycle.
    #[default]
    TableColors,
    /// Every color is left to the plotting surface.
    PlotterDefault,
    /// Series cycle through a fixed ten-color palette.
    FixedCycle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    /// Empty means "use the table title".
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
    #[serde(default)]
    pub uniform_color: bool,
    #[serde(default = "default_color")]
    pub color: Color,
    #[serde(default)]
    pub color_strategy: ColorStrategy,
    #[serde(default = "default_font_scale")]
    pub font_scale: f64,
    #[serde(default)]
    pub x_minor_ticks: bool,
    #[serde(default)]
    pub y_minor_ticks: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            uniform_color: false,
            color: default_color(),
            color_strategy: ColorStrategy::default(),
            font_scale: default_font_scale(),
            x_minor_ticks: false,
            y_minor_ticks: false,
        }
    }
}

/// Optional fixed display range for the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedYRange {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub min: f64,
    #[serde(default = "default_y_range_max")]
    pub max: f64,
}

impl Default for FixedYRange {
    fn default() -> Self {
        Self {
            enabled: false,
            min: 0.0,
            max: default_y_range_max(),
        }
    }
}

/// Vertical line marking the current animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSliderConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_time_slider_color")]
    pub color: Color,
}

impl Default for TimeSliderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: default_time_slider_color(),
        }
    }
}

/// User-editable overlay parameters.
///
/// This type is serializable so host applications can persist the overlay
/// setup in their own property storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OverlayConfig {
    /// Identifier of the table to plot; empty draws nothing.
    #[serde(default)]
    pub table: String,
    #[serde(default)]
    pub plot_mode: RequestedPlotMode,
    #[serde(default)]
    pub placement: OverlayPlacement,
    #[serde(default)]
    pub style: OverlayStyle,
    #[serde(default)]
    pub y_range: FixedYRange,
    #[serde(default)]
    pub time_slider: TimeSliderConfig,
}

impl OverlayConfig {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_plot_mode(mut self, plot_mode: RequestedPlotMode) -> Self {
        self.plot_mode = plot_mode;
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: OverlayPlacement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.style.title = title.into();
        self
    }

    #[must_use]
    pub fn with_axis_labels(
        mut self,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        self.style.x_label = x_label.into();
        self.style.y_label = y_label.into();
        self
    }

    /// Forces every series and bar to `color`.
    #[must_use]
    pub fn with_uniform_color(mut self, color: Color) -> Self {
        self.style.uniform_color = true;
        self.style.color = color;
        self
    }

    #[must_use]
    pub fn with_color_strategy(mut self, strategy: ColorStrategy) -> Self {
        self.style.color_strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_font_scale(mut self, font_scale: f64) -> Self {
        self.style.font_scale = font_scale;
        self
    }

    #[must_use]
    pub fn with_minor_ticks(mut self, x: bool, y: bool) -> Self {
        self.style.x_minor_ticks = x;
        self.style.y_minor_ticks = y;
        self
    }

    #[must_use]
    pub fn with_fixed_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = FixedYRange {
            enabled: true,
            min,
            max,
        };
        self
    }

    #[must_use]
    pub fn with_time_slider(mut self, color: Color) -> Self {
        self.time_slider = TimeSliderConfig {
            enabled: true,
            color,
        };
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        super::validation::validate_overlay_config(self)
    }
}

fn default_position_x() -> f64 {
    0.05
}

fn default_position_y() -> f64 {
    0.95
}

fn default_box_size() -> f64 {
    0.25
}

fn default_alpha() -> f64 {
    0.5
}

fn default_font_scale() -> f64 {
    1.0
}

fn default_color() -> Color {
    Color::rgb(0.401, 0.435, 1.0)
}

fn default_y_range_max() -> f64 {
    1.0
}

fn default_time_slider_color() -> Color {
    Color::rgb(0.8, 0.0, 0.0)
}
