use tracing::{debug, warn};

use crate::charts::{
    ChartConfig, ChartHandle, ChartLibrary, ColumnChartConfig, LineChartConfig, MountId,
    MountRegistry, PieChartConfig, PieSlice, TooltipTemplate, ValueAxisConfig,
};
use crate::dashboard::sample_data::{self, GENRES, REVENUE_HEADLINE};
use crate::error::{DashboardError, DashboardResult};
use crate::render::Color;

pub const REVENUE_MOUNT: &str = "revenueChart";
pub const GENRE_MOUNT: &str = "genreChart";
pub const ACTIVITY_MOUNT: &str = "activityChart";
pub const SUBSCRIPTION_MOUNT: &str = "subscriptionChart";

// First color of the chart palette; both column charts keep it.
pub const COLUMN_COLOR: &str = "#67b7dc";
pub const ACTIVITY_ACCENT: &str = "#00A2FF";
pub const ACTIVITY_TENSION: f64 = 0.8;
pub const ACTIVITY_STROKE_WIDTH_PX: f64 = 3.0;
pub const SUBSCRIPTION_MIN_GRID_DISTANCE_PX: f64 = 50.0;

/// One chart the dashboard builds: a display name, its card heading, its
/// mount point and the declarative config handed to the chart library.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlot {
    pub name: &'static str,
    pub title: &'static str,
    pub headline: Option<&'static str>,
    pub mount: MountId,
    pub config: ChartConfig,
}

/// Mount ids in construction order.
#[must_use]
pub fn chart_mount_ids() -> [MountId; 4] {
    [
        MountId::new(REVENUE_MOUNT),
        MountId::new(GENRE_MOUNT),
        MountId::new(ACTIVITY_MOUNT),
        MountId::new(SUBSCRIPTION_MOUNT),
    ]
}

/// The four dashboard charts, revenue → genre → activity → subscription.
pub fn dashboard_chart_slots() -> DashboardResult<Vec<ChartSlot>> {
    let revenue = ColumnChartConfig::new(
        sample_data::revenue_series()?,
        Color::from_hex(COLUMN_COLOR)?,
    );

    let genre_slices = GENRES
        .iter()
        .map(|genre| {
            Ok(PieSlice {
                category: genre.name.to_owned(),
                value: genre.share,
                color: Color::from_hex(genre.color)?,
            })
        })
        .collect::<DashboardResult<Vec<_>>>()?;
    let genre = PieChartConfig::new(genre_slices).wedges_only();

    let mut activity = LineChartConfig::new(
        sample_data::activity_series(),
        Color::from_hex(ACTIVITY_ACCENT)?,
    );
    activity.value_axis = ValueAxisConfig::default().with_grid_visible(false);
    activity.tension = ACTIVITY_TENSION;
    activity.stroke_width_px = ACTIVITY_STROKE_WIDTH_PX;
    activity.tooltip = Some(TooltipTemplate::category_value());

    let subscription = ColumnChartConfig::new(
        sample_data::subscription_series(),
        Color::from_hex(COLUMN_COLOR)?,
    )
    .with_value_axis(
        ValueAxisConfig::default()
            .with_min(0.0)
            .with_min_grid_distance(SUBSCRIPTION_MIN_GRID_DISTANCE_PX)
            .with_labels_visible(true),
    );

    Ok(vec![
        ChartSlot {
            name: "revenue",
            title: "Revenue",
            headline: Some(REVENUE_HEADLINE),
            mount: MountId::new(REVENUE_MOUNT),
            config: ChartConfig::Column(revenue),
        },
        ChartSlot {
            name: "genre",
            title: "Movie Genre",
            headline: None,
            mount: MountId::new(GENRE_MOUNT),
            config: ChartConfig::Pie(genre),
        },
        ChartSlot {
            name: "activity",
            title: "Audience Activity",
            headline: None,
            mount: MountId::new(ACTIVITY_MOUNT),
            config: ChartConfig::Line(activity),
        },
        ChartSlot {
            name: "subscription",
            title: "Subscription Packages",
            headline: None,
            mount: MountId::new(SUBSCRIPTION_MOUNT),
            config: ChartConfig::Column(subscription),
        },
    ])
}

/// Scoped owner of charts built during one setup pass.
///
/// Dropping the guard without [`ChartSetupGuard::commit`] disposes every chart
/// it holds, so a failure after chart N never leaks charts 1..N.
pub struct ChartSetupGuard<'a, L: ChartLibrary> {
    library: &'a mut L,
    mounts: &'a mut MountRegistry,
    built: Vec<ChartHandle>,
}

impl<'a, L: ChartLibrary> ChartSetupGuard<'a, L> {
    pub fn new(library: &'a mut L, mounts: &'a mut MountRegistry) -> Self {
        Self {
            library,
            mounts,
            built: Vec::new(),
        }
    }

    pub fn build(&mut self, slot: &ChartSlot) -> DashboardResult<()> {
        let handle = self
            .library
            .create_chart(self.mounts, &slot.mount, &slot.config)
            .map_err(|source| DashboardError::ChartSetup {
                chart: slot.name,
                source: Box::new(source),
            })?;
        debug!(chart = slot.name, handle = handle.id(), "setup built chart");
        self.built.push(handle);
        Ok(())
    }

    #[must_use]
    pub fn built_count(&self) -> usize {
        self.built.len()
    }

    /// Hands ownership of every built chart to the caller.
    #[must_use]
    pub fn commit(mut self) -> Vec<ChartHandle> {
        std::mem::take(&mut self.built)
    }
}

impl<L: ChartLibrary> Drop for ChartSetupGuard<'_, L> {
    fn drop(&mut self) {
        let released = self.built.len();
        for handle in self.built.drain(..).rev() {
            let handle_id = handle.id();
            if let Err(err) = self.library.dispose_chart(self.mounts, handle) {
                warn!(handle = handle_id, error = %err, "failed to release chart after aborted setup");
            }
        }
        if released > 0 {
            debug!(released, "released charts from aborted setup");
        }
    }
}

/// Builds every slot in order. Either all charts come back or none stay live.
pub fn run_chart_setup<L: ChartLibrary>(
    library: &mut L,
    mounts: &mut MountRegistry,
    slots: &[ChartSlot],
) -> DashboardResult<Vec<ChartHandle>> {
    let mut guard = ChartSetupGuard::new(library, mounts);
    for slot in slots {
        guard.build(slot)?;
    }
    Ok(guard.commit())
}
