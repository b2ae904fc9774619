mod instructions;
mod primitives;
mod recording_surface;
mod surface;

pub use instructions::{
    AxisRange, CategoryBar, ChartInstructions, Legend, LegendPlacement, MinorTicks, SeriesCall,
    TickLabelLayout, VerticalMarker,
};
pub use primitives::{Color, FIXED_CYCLE_PALETTE, TextHAlign};
pub use recording_surface::{RecordingSurface, SurfaceEvent};
pub use surface::{FigureOutcome, FigureScope, FigureSpec, OverlayRect, PlotSurface};
