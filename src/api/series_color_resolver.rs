use crate::core::ElementType;
use crate::render::{Color, FIXED_CYCLE_PALETTE};

use super::{ColorStrategy, OverlayStyle};

/// Picks draw colors for series and category bars.
///
/// `None` means the plotting surface applies its own default cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColorResolver {
    uniform: Option<Color>,
    strategy: ColorStrategy,
}

impl SeriesColorResolver {
    #[must_use]
    pub fn new(uniform: Option<Color>, strategy: ColorStrategy) -> Self {
        Self { uniform, strategy }
    }

    #[must_use]
    pub fn from_style(style: &OverlayStyle) -> Self {
        let uniform = style.uniform_color.then_some(style.color);
        Self::new(uniform, style.color_strategy)
    }

    /// Color of the series drawn from the `series_index`-th y column (0-based).
    #[must_use]
    pub fn series_color(self, series_index: usize) -> Option<Color> {
        if let Some(color) = self.uniform {
            return Some(color);
        }
        match self.strategy {
            ColorStrategy::TableColors | ColorStrategy::PlotterDefault => None,
            ColorStrategy::FixedCycle => {
                Some(FIXED_CYCLE_PALETTE[series_index % FIXED_CYCLE_PALETTE.len()])
            }
        }
    }

    /// Color of one category bar in the `series_index`-th series.
    #[must_use]
    pub fn category_color(self, series_index: usize, category: &ElementType) -> Option<Color> {
        match (self.uniform, self.strategy) {
            (Some(color), _) => Some(color),
            (None, ColorStrategy::TableColors) => Some(category.color),
            (None, _) => self.series_color(series_index),
        }
    }
}
