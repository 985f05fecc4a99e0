//! The analytics dashboard screen.

mod config;
mod events;
mod legend;
mod lifecycle;
pub mod sample_data;
mod setup;
mod snapshot;
mod state;
pub mod view;

pub use config::DashboardConfig;
pub use events::{DashboardEvent, DashboardObserver, ObserverContext};
pub use legend::GenreLegend;
pub use lifecycle::{Dashboard, Lifecycle};
pub use setup::{
    ACTIVITY_ACCENT, ACTIVITY_MOUNT, ACTIVITY_STROKE_WIDTH_PX, ACTIVITY_TENSION, COLUMN_COLOR,
    ChartSetupGuard, ChartSlot, GENRE_MOUNT, REVENUE_MOUNT, SUBSCRIPTION_MIN_GRID_DISTANCE_PX,
    SUBSCRIPTION_MOUNT, chart_mount_ids, dashboard_chart_slots, run_chart_setup,
};
pub use snapshot::{
    DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, DashboardSnapshot, DashboardSnapshotJsonContractV1,
    MountSnapshot,
};
pub use state::{CounterValues, DashboardState, Signal, StatCard};
pub use view::{LOADING_MESSAGE, SETUP_ERROR_MESSAGE};
