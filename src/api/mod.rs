mod axis_label_resolver;
mod chart_selector;
mod data_shape_validation;
mod json_contract;
mod overlay;
mod overlay_config;
mod overlay_layout_resolver;
mod plot_mode_resolver;
mod series_call_builder;
mod series_color_resolver;
mod validation;

pub use axis_label_resolver::{ResolvedLabels, resolve_labels, resolve_legend};
pub use chart_selector::select_chart;
pub use data_shape_validation::{MAX_BAR_ROWS, validate_row_count};
pub use json_contract::{OVERLAY_CONFIG_JSON_SCHEMA_V1, OverlayConfigJsonContractV1};
pub use overlay::{DataTablePlotOverlay, OverlayStatus, ViewportOverlay};
pub use overlay_config::{
    Anchor, ColorStrategy, FixedYRange, OverlayConfig, OverlayPlacement, OverlayStyle,
    RequestedPlotMode, TimeSliderConfig,
};
pub use overlay_layout_resolver::{resolve_figure_spec, resolve_overlay_rect};
pub use plot_mode_resolver::resolve_plot_mode;
pub use series_call_builder::{
    BAR_FILL_RATIO, ROTATE_LABELS_ABOVE_CHARS, ROTATED_LABEL_DEG, SeriesPlan, build_series_plan,
};
pub use series_color_resolver::SeriesColorResolver;
