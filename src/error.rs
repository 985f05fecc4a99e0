use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("mount point `{id}`: {reason}")]
    MountPoint { id: String, reason: String },

    #[error("chart handle {0} is not live")]
    ChartDisposed(u64),

    #[error("lifecycle violation: {0}")]
    Lifecycle(String),

    #[error("chart setup failed while building `{chart}`: {source}")]
    ChartSetup {
        chart: &'static str,
        #[source]
        source: Box<DashboardError>,
    },
}

impl DashboardError {
    pub(crate) fn mount(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MountPoint {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
