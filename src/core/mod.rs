pub mod data_collection;
pub mod plot_mode;
pub mod table;
pub mod types;

pub use data_collection::DataCollection;
pub use plot_mode::PlotMode;
pub use table::{DataTable, ElementType, XAxis, XyArray, YAxis};
pub use types::{DataPoint, Viewport};
