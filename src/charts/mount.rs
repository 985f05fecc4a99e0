use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::charts::ChartKind;
use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};
use crate::render::RenderFrame;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MountId(String);

impl MountId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Chart currently drawn into a mount point.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub handle_id: u64,
    pub kind: ChartKind,
    pub frame: RenderFrame,
}

/// A region of the page a chart is rendered into and later torn down from.
#[derive(Debug, Clone, PartialEq)]
pub struct MountPoint {
    id: MountId,
    viewport: Viewport,
    content: Option<RenderedChart>,
    populate_count: u32,
    attached: bool,
}

impl MountPoint {
    #[must_use]
    pub fn id(&self) -> &MountId {
        &self.id
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn content(&self) -> Option<&RenderedChart> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.content.is_some()
    }

    /// How many times a chart has been drawn into this mount point.
    #[must_use]
    pub fn populate_count(&self) -> u32 {
        self.populate_count
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Ordered set of mount points owned by one dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MountRegistry {
    mounts: IndexMap<MountId, MountPoint>,
}

impl MountRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: MountId, viewport: Viewport) -> DashboardResult<()> {
        let viewport = viewport.validate()?;
        if self.mounts.contains_key(&id) {
            return Err(DashboardError::mount(id.as_str(), "already registered"));
        }
        self.mounts.insert(
            id.clone(),
            MountPoint {
                id,
                viewport,
                content: None,
                populate_count: 0,
                attached: true,
            },
        );
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &MountId) -> Option<&MountPoint> {
        self.mounts.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MountPoint> {
        self.mounts.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    #[must_use]
    pub fn populated_count(&self) -> usize {
        self.mounts.values().filter(|mount| mount.is_populated()).count()
    }

    /// Viewport of an attached, empty mount point ready to receive a chart.
    pub fn vacant_viewport(&self, id: &MountId) -> DashboardResult<Viewport> {
        let mount = self
            .mounts
            .get(id)
            .ok_or_else(|| DashboardError::mount(id.as_str(), "not registered"))?;
        if !mount.attached {
            return Err(DashboardError::mount(id.as_str(), "detached"));
        }
        if mount.content.is_some() {
            return Err(DashboardError::mount(id.as_str(), "already holds a chart"));
        }
        Ok(mount.viewport)
    }

    pub fn populate(&mut self, id: &MountId, chart: RenderedChart) -> DashboardResult<()> {
        self.vacant_viewport(id)?;
        let mount = self
            .mounts
            .get_mut(id)
            .ok_or_else(|| DashboardError::mount(id.as_str(), "not registered"))?;
        mount.content = Some(chart);
        mount.populate_count += 1;
        Ok(())
    }

    /// Removes the chart drawn by `handle_id` from `id`.
    pub fn clear(&mut self, id: &MountId, handle_id: u64) -> DashboardResult<RenderedChart> {
        let mount = self
            .mounts
            .get_mut(id)
            .ok_or_else(|| DashboardError::mount(id.as_str(), "not registered"))?;
        match mount.content.take() {
            Some(chart) if chart.handle_id == handle_id => Ok(chart),
            other => {
                mount.content = other;
                Err(DashboardError::ChartDisposed(handle_id))
            }
        }
    }

    /// Marks every mount point as gone from the page. Detached mounts refuse
    /// new charts but can still be cleared.
    pub fn detach_all(&mut self) {
        for mount in self.mounts.values_mut() {
            mount.attached = false;
        }
    }

    /// Re-attaches every mount point, e.g. when the view is shown again.
    pub fn attach_all(&mut self) {
        for mount in self.mounts.values_mut() {
            mount.attached = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MountId, MountRegistry, RenderedChart};
    use crate::charts::ChartKind;
    use crate::core::Viewport;
    use crate::render::RenderFrame;

    fn chart(handle_id: u64) -> RenderedChart {
        RenderedChart {
            handle_id,
            kind: ChartKind::Column,
            frame: RenderFrame::new(Viewport::new(10, 10)),
        }
    }

    #[test]
    fn occupied_mount_rejects_second_chart() {
        let id = MountId::new("revenueChart");
        let mut mounts = MountRegistry::new();
        mounts.register(id.clone(), Viewport::new(10, 10)).expect("register");
        mounts.populate(&id, chart(1)).expect("first");
        assert!(mounts.populate(&id, chart(2)).is_err());
        assert_eq!(mounts.get(&id).map(|m| m.populate_count()), Some(1));
    }

    #[test]
    fn clear_requires_matching_handle() {
        let id = MountId::new("genreChart");
        let mut mounts = MountRegistry::new();
        mounts.register(id.clone(), Viewport::new(10, 10)).expect("register");
        mounts.populate(&id, chart(7)).expect("populate");
        assert!(mounts.clear(&id, 8).is_err());
        assert!(mounts.get(&id).is_some_and(|m| m.is_populated()));
        assert_eq!(mounts.clear(&id, 7).expect("clear").handle_id, 7);
        assert!(mounts.clear(&id, 7).is_err());
    }

    #[test]
    fn detached_mount_refuses_population() {
        let id = MountId::new("activityChart");
        let mut mounts = MountRegistry::new();
        mounts.register(id.clone(), Viewport::new(10, 10)).expect("register");
        mounts.detach_all();
        assert!(mounts.populate(&id, chart(1)).is_err());
        assert_eq!(mounts.populated_count(), 0);
    }
}
