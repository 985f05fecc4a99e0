//! dashboard-rs: headless analytics dashboard engine.
//!
//! The crate renders a single analytics screen (stat cards, four charts, a
//! user table and a popular-films list) from fixed sample data. Charts are
//! built through the [`charts::ChartLibrary`] seam into named mount points and
//! released exactly once when the dashboard is unmounted.

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod telemetry;

pub use charts::{ChartLibrary, RenderChartLibrary};
pub use dashboard::{Dashboard, DashboardConfig};
pub use error::{DashboardError, DashboardResult};
