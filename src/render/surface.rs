use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::ChartInstructions;

/// Pixel-space rectangle on the host canvas, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl OverlayRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "overlay rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidData(
                "overlay rect size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Figure request handed to the plotting surface when a scope opens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    pub rect: OverlayRect,
    /// Opacity applied to the figure and axes background.
    pub alpha: f64,
    pub font_scale: f64,
    pub tight_layout: bool,
}

/// How a figure was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FigureOutcome {
    /// Drawing completed and the figure is composited onto the canvas.
    Composited,
    /// Drawing aborted; all partial work is dropped.
    Discarded,
}

/// Contract implemented by any plotting backend.
///
/// Backends receive fully validated `ChartInstructions`, so rasterization
/// stays isolated from table lookup and chart selection.
pub trait PlotSurface {
    fn open_figure(&mut self, figure: &FigureSpec) -> ChartResult<()>;
    fn draw(&mut self, instructions: &ChartInstructions) -> ChartResult<()>;
    fn close_figure(&mut self, outcome: FigureOutcome);
}

/// Scoped figure on a plotting surface.
///
/// The figure is closed when the scope drops. Unless `commit` was called the
/// surface is told to discard it, so an early `?` return never leaves a
/// half-drawn chart on the canvas.
pub struct FigureScope<'a, S: PlotSurface + ?Sized> {
    surface: &'a mut S,
    outcome: FigureOutcome,
}

impl<'a, S: PlotSurface + ?Sized> FigureScope<'a, S> {
    pub fn open(surface: &'a mut S, figure: &FigureSpec) -> ChartResult<Self> {
        figure.rect.validate()?;
        surface.open_figure(figure)?;
        trace!(rect = ?figure.rect, alpha = figure.alpha, "figure opened");
        Ok(Self {
            surface,
            outcome: FigureOutcome::Discarded,
        })
    }

    pub fn draw(&mut self, instructions: &ChartInstructions) -> ChartResult<()> {
        instructions.validate()?;
        self.surface.draw(instructions)
    }

    /// Marks the figure complete; it is composited when the scope drops.
    pub fn commit(mut self) {
        self.outcome = FigureOutcome::Composited;
    }
}

impl<S: PlotSurface + ?Sized> Drop for FigureScope<'_, S> {
    fn drop(&mut self) {
        trace!(outcome = ?self.outcome, "figure closed");
        self.surface.close_figure(self.outcome);
    }
}
