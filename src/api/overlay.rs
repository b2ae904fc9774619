use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DataCollection, Viewport};
use crate::error::ChartResult;
use crate::render::{FigureScope, PlotSurface};

use super::{OverlayConfig, resolve_figure_spec, select_chart};

/// Result of one successful overlay render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayStatus {
    /// No table is configured; the surface was not touched.
    Skipped,
    /// A chart was drawn and composited.
    Rendered,
}

/// Per-frame contract between the host application and an overlay.
///
/// The host calls `render` once per rendered frame. Errors abort this overlay
/// only and are meant to be shown to the user; the rest of the scene renders
/// normally.
pub trait ViewportOverlay {
    fn id(&self) -> &str;

    fn render(
        &self,
        surface: &mut dyn PlotSurface,
        canvas: Viewport,
        data: &DataCollection,
        frame: usize,
    ) -> ChartResult<OverlayStatus>;
}

/// Overlay that plots one data table from the pipeline output.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTablePlotOverlay {
    config: OverlayConfig,
}

impl DataTablePlotOverlay {
    pub fn new(config: OverlayConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    fn draw_chart<S: PlotSurface + ?Sized>(
        &self,
        scope: &mut FigureScope<'_, S>,
        data: &DataCollection,
        frame: usize,
    ) -> ChartResult<()> {
        if let Some(table) = data.resolve(&self.config.table)? {
            let instructions = select_chart(table, &self.config, frame)?;
            scope.draw(&instructions)?;
        }
        Ok(())
    }

    /// Replaces the configuration; the previous one is kept on error.
    pub fn set_config(&mut self, config: OverlayConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }
}

impl ViewportOverlay for DataTablePlotOverlay {
    fn id(&self) -> &str {
        "data-table-plot"
    }

    fn render(
        &self,
        surface: &mut dyn PlotSurface,
        canvas: Viewport,
        data: &DataCollection,
        frame: usize,
    ) -> ChartResult<OverlayStatus> {
        if self.config.table.is_empty() {
            debug!("no data table configured; overlay skipped");
            return Ok(OverlayStatus::Skipped);
        }

        let figure = resolve_figure_spec(&self.config, canvas)?;
        let mut scope = FigureScope::open(surface, &figure)?;

        let result = self.draw_chart(&mut scope, data, frame);
        match result {
            Ok(()) => {
                scope.commit();
                Ok(OverlayStatus::Rendered)
            }
            Err(err) => {
                warn!(table = %self.config.table, error = %err, "overlay render failed");
                Err(err)
            }
        }
    }
}
