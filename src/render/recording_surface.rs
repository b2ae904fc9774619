use crate::error::ChartResult;
use crate::render::{ChartInstructions, FigureOutcome, FigureSpec, PlotSurface};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Opened(FigureSpec),
    Drawn(ChartInstructions),
    Closed(FigureOutcome),
}

/// Headless surface used by tests and by hosts that consume instructions
/// directly.
///
/// It keeps the full event log and the most recent composited figure.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
    pub composited_count: usize,
    pub discarded_count: usize,
    pending: Option<(FigureSpec, Option<ChartInstructions>)>,
    last_composited: Option<(FigureSpec, ChartInstructions)>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Figure and instructions of the last successfully composited overlay.
    #[must_use]
    pub fn last_composited(&self) -> Option<(&FigureSpec, &ChartInstructions)> {
        self.last_composited
            .as_ref()
            .map(|(figure, instructions)| (figure, instructions))
    }

    #[must_use]
    pub fn has_open_figure(&self) -> bool {
        self.pending.is_some()
    }
}

impl PlotSurface for RecordingSurface {
    fn open_figure(&mut self, figure: &FigureSpec) -> ChartResult<()> {
        self.events.push(SurfaceEvent::Opened(*figure));
        self.pending = Some((*figure, None));
        Ok(())
    }

    fn draw(&mut self, instructions: &ChartInstructions) -> ChartResult<()> {
        self.events.push(SurfaceEvent::Drawn(instructions.clone()));
        if let Some((_, drawn)) = self.pending.as_mut() {
            *drawn = Some(instructions.clone());
        }
        Ok(())
    }

    fn close_figure(&mut self, outcome: FigureOutcome) {
        self.events.push(SurfaceEvent::Closed(outcome));
        let pending = self.pending.take();
        match outcome {
            FigureOutcome::Composited => {
                self.composited_count += 1;
                if let Some((figure, Some(instructions))) = pending {
                    self.last_composited = Some((figure, instructions));
                }
            }
            FigureOutcome::Discarded => self.discarded_count += 1,
        }
    }
}
