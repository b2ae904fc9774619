//! Optional post-processing steps applied on top of a selected chart.

pub mod time_slider;

pub use time_slider::{nearest_row_index, resolve_time_slider_marker};
