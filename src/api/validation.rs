use crate::error::{ChartError, ChartResult};

use super::{FixedYRange, OverlayConfig, OverlayPlacement, OverlayStyle, TimeSliderConfig};

pub(super) const MIN_BOX_SIZE: f64 = 0.05;
pub(super) const MIN_FONT_SCALE: f64 = 0.01;

pub(super) fn validate_overlay_config(config: &OverlayConfig) -> ChartResult<()> {
    validate_overlay_placement(config.placement)?;
    validate_overlay_style(&config.style)?;
    validate_fixed_y_range(config.y_range)?;
    validate_time_slider_config(config.time_slider)
}

fn validate_overlay_placement(placement: OverlayPlacement) -> ChartResult<OverlayPlacement> {
    for (name, value, min) in [
        ("x", placement.x, 0.0),
        ("y", placement.y, 0.0),
        ("width", placement.width, MIN_BOX_SIZE),
        ("height", placement.height, MIN_BOX_SIZE),
        ("alpha", placement.alpha, 0.0),
    ] {
        if !value.is_finite() || !(min..=1.0).contains(&value) {
            return Err(ChartError::InvalidData(format!(
                "overlay placement `{name}` must be finite and in [{min}, 1]"
            )));
        }
    }
    Ok(placement)
}

fn validate_overlay_style(style: &OverlayStyle) -> ChartResult<()> {
    if !style.font_scale.is_finite() || style.font_scale < MIN_FONT_SCALE {
        return Err(ChartError::InvalidData(format!(
            "overlay font scale must be finite and >= {MIN_FONT_SCALE}"
        )));
    }
    style.color.validate()
}

fn validate_fixed_y_range(range: FixedYRange) -> ChartResult<FixedYRange> {
    if !range.enabled {
        return Ok(range);
    }
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(ChartError::InvalidData(
            "fixed y-range bounds must be finite".to_owned(),
        ));
    }
    if range.min >= range.max {
        return Err(ChartError::InvalidData(
            "fixed y-range min must be < max".to_owned(),
        ));
    }
    Ok(range)
}

fn validate_time_slider_config(config: TimeSliderConfig) -> ChartResult<()> {
    if config.enabled {
        config.color.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_fixed_y_range, validate_overlay_placement};
    use crate::api::{FixedYRange, OverlayPlacement};

    #[test]
    fn placement_accepts_range_edges() {
        let placement = OverlayPlacement {
            x: 0.0,
            y: 1.0,
            width: 0.05,
            height: 1.0,
            alpha: 0.0,
            ..OverlayPlacement::default()
        };
        assert!(validate_overlay_placement(placement).is_ok());
    }

    #[test]
    fn placement_rejects_box_below_minimum_size() {
        let placement = OverlayPlacement {
            width: 0.01,
            ..OverlayPlacement::default()
        };
        let err = validate_overlay_placement(placement).expect_err("width too small");
        assert!(format!("{err}").contains("width"));
    }

    #[test]
    fn disabled_y_range_skips_bound_checks() {
        let range = FixedYRange {
            enabled: false,
            min: 5.0,
            max: 1.0,
        };
        assert!(validate_fixed_y_range(range).is_ok());
    }
}
