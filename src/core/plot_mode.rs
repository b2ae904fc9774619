use std::fmt;

use serde::{Deserialize, Serialize};

/// Chart type, either declared by a data table or chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlotMode {
    /// The table declares no preferred chart type.
    #[default]
    NoPlot,
    Line,
    Histogram,
    BarChart,
    Scatter,
}

impl PlotMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoPlot => "NoPlot",
            Self::Line => "Line",
            Self::Histogram => "Histogram",
            Self::BarChart => "BarChart",
            Self::Scatter => "Scatter",
        }
    }

    /// Whether the mode draws one bar per row.
    #[must_use]
    pub const fn is_bar_like(self) -> bool {
        matches!(self, Self::Histogram | Self::BarChart)
    }

    /// Minimum number of rows needed for a meaningful chart.
    #[must_use]
    pub const fn min_rows(self) -> usize {
        match self {
            Self::Scatter => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for PlotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
