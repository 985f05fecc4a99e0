pub mod category_scale;
pub mod column_series;
pub mod line_series;
pub mod pie_series;
pub mod primitives;
pub mod scale;
pub mod types;
pub mod value_axis;

pub use category_scale::CategoryScale;
pub use column_series::{ColumnGeometry, project_columns};
pub use line_series::{CurveSegment, project_smoothed_line};
pub use pie_series::{WedgeGeometry, project_pie};
pub use scale::LinearScale;
pub use types::{CategoryValue, PlotArea, Viewport};
pub use value_axis::{ValueAxisLayout, ValueAxisTick, resolve_value_axis};
