//! Chart-library seam.
//!
//! A [`ChartLibrary`] builds a chart from a declarative [`ChartConfig`] into a
//! named mount point and hands back an owned [`ChartHandle`]. The handle is
//! the only way to release the chart again, so a chart cannot be disposed
//! twice through safe code.

mod builder;
mod config;
mod library;
mod mount;

pub use builder::{build_chart_frame, chart_gutters};
pub use config::{
    CategoryAxisConfig, ChartConfig, ColumnChartConfig, LineChartConfig, PieChartConfig, PieSlice,
    TooltipTemplate, ValueAxisConfig,
};
pub use library::RenderChartLibrary;
pub use mount::{MountId, MountPoint, MountRegistry, RenderedChart};

use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Column,
    Pie,
    Line,
}

/// Exclusive ownership token for one constructed chart.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle {
    id: u64,
    mount: MountId,
    kind: ChartKind,
}

impl ChartHandle {
    #[must_use]
    pub fn new(id: u64, mount: MountId, kind: ChartKind) -> Self {
        Self { id, mount, kind }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn mount(&self) -> &MountId {
        &self.mount
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }
}

/// Construction/disposal counters reported by a chart library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartLibraryStats {
    pub constructed: u64,
    pub disposed: u64,
}

impl ChartLibraryStats {
    #[must_use]
    pub fn live(self) -> u64 {
        self.constructed.saturating_sub(self.disposed)
    }
}

/// Contract implemented by any chart library the dashboard can drive.
pub trait ChartLibrary {
    /// Builds `config` into the mount point `mount`.
    fn create_chart(
        &mut self,
        mounts: &mut MountRegistry,
        mount: &MountId,
        config: &ChartConfig,
    ) -> DashboardResult<ChartHandle>;

    /// Tears down the chart behind `handle` and clears its mount point.
    fn dispose_chart(
        &mut self,
        mounts: &mut MountRegistry,
        handle: ChartHandle,
    ) -> DashboardResult<()>;

    fn stats(&self) -> ChartLibraryStats;
}

impl<L: ChartLibrary + ?Sized> ChartLibrary for Box<L> {
    fn create_chart(
        &mut self,
        mounts: &mut MountRegistry,
        mount: &MountId,
        config: &ChartConfig,
    ) -> DashboardResult<ChartHandle> {
        (**self).create_chart(mounts, mount, config)
    }

    fn dispose_chart(
        &mut self,
        mounts: &mut MountRegistry,
        handle: ChartHandle,
    ) -> DashboardResult<()> {
        (**self).dispose_chart(mounts, handle)
    }

    fn stats(&self) -> ChartLibraryStats {
        (**self).stats()
    }
}
