use indexmap::IndexMap;
use tracing::debug;

use crate::charts::{
    ChartConfig, ChartHandle, ChartLibrary, ChartLibraryStats, MountId, MountRegistry,
    RenderedChart, build_chart_frame,
};
use crate::error::{DashboardError, DashboardResult};
use crate::render::Renderer;

/// Default chart library: projects configs into frames, pushes them through a
/// [`Renderer`] and stores the frame in the target mount point.
#[derive(Debug)]
pub struct RenderChartLibrary<R: Renderer> {
    renderer: R,
    next_id: u64,
    live: IndexMap<u64, MountId>,
    stats: ChartLibraryStats,
}

impl<R: Renderer> RenderChartLibrary<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            next_id: 1,
            live: IndexMap::new(),
            stats: ChartLibraryStats::default(),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Ids of charts that have been built and not yet disposed.
    pub fn live_handle_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.live.keys().copied()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R: Renderer> ChartLibrary for RenderChartLibrary<R> {
    fn create_chart(
        &mut self,
        mounts: &mut MountRegistry,
        mount: &MountId,
        config: &ChartConfig,
    ) -> DashboardResult<ChartHandle> {
        let viewport = mounts.vacant_viewport(mount)?;
        let frame = build_chart_frame(config, viewport)?;
        self.renderer.render(&frame)?;

        let id = self.next_id;
        let kind = config.kind();
        mounts.populate(
            mount,
            RenderedChart {
                handle_id: id,
                kind,
                frame,
            },
        )?;
        self.next_id += 1;
        self.live.insert(id, mount.clone());
        self.stats.constructed += 1;
        debug!(handle = id, mount = %mount, ?kind, "chart constructed");
        Ok(ChartHandle::new(id, mount.clone(), kind))
    }

    fn dispose_chart(
        &mut self,
        mounts: &mut MountRegistry,
        handle: ChartHandle,
    ) -> DashboardResult<()> {
        match self.live.get(&handle.id()) {
            None => return Err(DashboardError::ChartDisposed(handle.id())),
            Some(mount) if mount != handle.mount() => {
                return Err(DashboardError::mount(
                    handle.mount().as_str(),
                    format!("chart {} belongs to another mount point", handle.id()),
                ));
            }
            Some(_) => {}
        }
        mounts.clear(handle.mount(), handle.id())?;
        self.live.shift_remove(&handle.id());
        self.stats.disposed += 1;
        debug!(handle = handle.id(), mount = %handle.mount(), "chart disposed");
        Ok(())
    }

    fn stats(&self) -> ChartLibraryStats {
        self.stats
    }
}
