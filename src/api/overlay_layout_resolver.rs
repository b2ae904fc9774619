use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{FigureSpec, OverlayRect};

use super::{OverlayConfig, OverlayPlacement};

/// Maps a normalized overlay placement onto canvas pixels.
///
/// Placement coordinates have a bottom-left origin; the returned rect uses
/// the canvas' top-left origin. The box may extend past the canvas edges,
/// clipping is left to the compositor.
pub fn resolve_overlay_rect(
    placement: OverlayPlacement,
    canvas: Viewport,
) -> ChartResult<OverlayRect> {
    if !canvas.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: canvas.width,
            height: canvas.height,
        });
    }

    let (anchor_fx, anchor_fy) = placement.anchor.box_fraction();
    let left = placement.x - anchor_fx * placement.width;
    let top = placement.y + (1.0 - anchor_fy) * placement.height;

    let canvas_width = f64::from(canvas.width);
    let canvas_height = f64::from(canvas.height);
    let rect = OverlayRect::new(
        left * canvas_width,
        (1.0 - top) * canvas_height,
        placement.width * canvas_width,
        placement.height * canvas_height,
    );
    rect.validate()?;
    Ok(rect)
}

/// Figure request for an overlay on a canvas of size `canvas`.
pub fn resolve_figure_spec(config: &OverlayConfig, canvas: Viewport) -> ChartResult<FigureSpec> {
    Ok(FigureSpec {
        rect: resolve_overlay_rect(config.placement, canvas)?,
        alpha: config.placement.alpha,
        font_scale: config.style.font_scale,
        tight_layout: true,
    })
}
