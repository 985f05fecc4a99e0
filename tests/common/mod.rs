#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashboard_rs::charts::{
    ChartConfig, ChartHandle, ChartLibrary, ChartLibraryStats, MountId, MountRegistry,
    RenderChartLibrary,
};
use dashboard_rs::dashboard::{Dashboard, DashboardConfig};
use dashboard_rs::render::NullRenderer;
use dashboard_rs::{DashboardError, DashboardResult};

pub const TEST_DELAY: Duration = Duration::from_millis(1_000);

#[derive(Debug, Default)]
pub struct LibraryCounters {
    pub create_attempts: AtomicU64,
    pub created: AtomicU64,
    pub disposed: AtomicU64,
}

impl LibraryCounters {
    pub fn created(&self) -> u64 {
        self.created.load(Ordering::SeqCst)
    }

    pub fn disposed(&self) -> u64 {
        self.disposed.load(Ordering::SeqCst)
    }

    pub fn create_attempts(&self) -> u64 {
        self.create_attempts.load(Ordering::SeqCst)
    }
}

/// Wraps the default library, counting calls into shared counters and
/// optionally failing the n-th (1-based) construction.
pub struct CountingLibrary {
    inner: RenderChartLibrary<NullRenderer>,
    counters: Arc<LibraryCounters>,
    fail_on_attempt: Option<u64>,
}

impl CountingLibrary {
    pub fn new(counters: Arc<LibraryCounters>) -> Self {
        Self {
            inner: RenderChartLibrary::new(NullRenderer::default()),
            counters,
            fail_on_attempt: None,
        }
    }

    pub fn failing_on(counters: Arc<LibraryCounters>, attempt: u64) -> Self {
        Self {
            fail_on_attempt: Some(attempt),
            ..Self::new(counters)
        }
    }
}

impl ChartLibrary for CountingLibrary {
    fn create_chart(
        &mut self,
        mounts: &mut MountRegistry,
        mount: &MountId,
        config: &ChartConfig,
    ) -> DashboardResult<ChartHandle> {
        let attempt = self.counters.create_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_attempt == Some(attempt) {
            return Err(DashboardError::InvalidData(format!(
                "injected failure on attempt {attempt}"
            )));
        }
        let handle = self.inner.create_chart(mounts, mount, config)?;
        self.counters.created.fetch_add(1, Ordering::SeqCst);
        Ok(handle)
    }

    fn dispose_chart(
        &mut self,
        mounts: &mut MountRegistry,
        handle: ChartHandle,
    ) -> DashboardResult<()> {
        self.inner.dispose_chart(mounts, handle)?;
        self.counters.disposed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn stats(&self) -> ChartLibraryStats {
        self.inner.stats()
    }
}

pub fn test_config() -> DashboardConfig {
    DashboardConfig::default().with_setup_delay(TEST_DELAY)
}

pub fn null_dashboard() -> Dashboard<RenderChartLibrary<NullRenderer>> {
    Dashboard::new(test_config(), RenderChartLibrary::new(NullRenderer::default()))
        .expect("dashboard init")
}

pub fn counting_dashboard() -> (Dashboard<CountingLibrary>, Arc<LibraryCounters>) {
    let counters = Arc::new(LibraryCounters::default());
    let dashboard = Dashboard::new(test_config(), CountingLibrary::new(Arc::clone(&counters)))
        .expect("dashboard init");
    (dashboard, counters)
}

pub fn failing_dashboard(attempt: u64) -> (Dashboard<CountingLibrary>, Arc<LibraryCounters>) {
    let counters = Arc::new(LibraryCounters::default());
    let dashboard = Dashboard::new(
        test_config(),
        CountingLibrary::failing_on(Arc::clone(&counters), attempt),
    )
    .expect("dashboard init");
    (dashboard, counters)
}

pub fn populated_mounts<L: ChartLibrary + Send + 'static>(dashboard: &Dashboard<L>) -> usize {
    dashboard.with_mounts(|mounts| mounts.populated_count())
}
