use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::charts::{ChartHandle, ChartLibrary, ChartLibraryStats, MountRegistry};
use crate::dashboard::events::ObserverRegistry;
use crate::dashboard::legend::GenreLegend;
use crate::dashboard::sample_data::{GENRES, POPULAR_FILMS, USERS};
use crate::dashboard::setup::{ChartSlot, dashboard_chart_slots, run_chart_setup};
use crate::dashboard::view::{PageContext, SETUP_ERROR_MESSAGE, render_page};
use crate::dashboard::{
    DashboardConfig, DashboardEvent, DashboardObserver, DashboardSnapshot, DashboardState,
    MountSnapshot, ObserverContext, StatCard,
};
use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Constructed, never shown.
    Idle,
    Mounted,
    Unmounted,
}

struct DashboardCore<L> {
    config: DashboardConfig,
    state: DashboardState,
    library: L,
    mounts: MountRegistry,
    slots: Vec<ChartSlot>,
    handles: Vec<ChartHandle>,
    lifecycle: Lifecycle,
    generation: u64,
    render_count: u64,
    legend: GenreLegend,
    // Events waiting for delivery once the core lock is released.
    pending: Vec<(DashboardEvent, ObserverContext)>,
}

impl<L: ChartLibrary> DashboardCore<L> {
    fn context(&self) -> ObserverContext {
        ObserverContext {
            counters: self.state.counters(),
            loading: self.state.is_loading(),
            has_error: self.state.error().is_some(),
            render_count: self.render_count,
        }
    }

    fn emit(&mut self, event: DashboardEvent) {
        self.render_count += 1;
        let context = self.context();
        self.pending.push((event, context));
    }

    fn set_loading(&mut self, loading: bool) {
        self.state.set_loading(loading);
        self.emit(DashboardEvent::LoadingChanged(loading));
    }

    fn set_error(&mut self, error: Option<String>) {
        self.state.set_error(error.clone());
        self.emit(DashboardEvent::ErrorChanged(error));
    }

    fn increment(&mut self, card: StatCard) -> u64 {
        let value = self.state.increment(card);
        debug!(card = card.key(), value, "stat card clicked");
        self.emit(DashboardEvent::CounterChanged { card, value });
        value
    }

    fn begin_mount(&mut self) -> DashboardResult<u64> {
        if self.lifecycle == Lifecycle::Mounted {
            return Err(DashboardError::Lifecycle(
                "dashboard is already mounted".to_owned(),
            ));
        }
        self.generation += 1;
        self.lifecycle = Lifecycle::Mounted;
        self.mounts.attach_all();
        if !self.state.is_loading() {
            self.set_loading(true);
        }
        if self.state.error().is_some() {
            self.set_error(None);
        }
        info!(
            generation = self.generation,
            delay_ms = self.config.setup_delay_ms,
            "dashboard mounted"
        );
        Ok(self.generation)
    }

    fn complete_setup(&mut self, generation: u64) {
        if self.lifecycle != Lifecycle::Mounted || self.generation != generation {
            debug!(
                generation,
                current = self.generation,
                lifecycle = ?self.lifecycle,
                "skipping stale chart setup"
            );
            return;
        }
        if !self.handles.is_empty() {
            warn!(generation, "charts already built for this mount");
            return;
        }

        match run_chart_setup(&mut self.library, &mut self.mounts, &self.slots) {
            Ok(handles) => {
                let count = handles.len();
                self.handles = handles;
                self.set_loading(false);
                self.emit(DashboardEvent::ChartsReady { count });
                info!(generation, charts = count, "dashboard charts ready");
            }
            Err(err) => {
                warn!(generation, error = %err, "chart setup failed");
                self.set_loading(false);
                self.set_error(Some(SETUP_ERROR_MESSAGE.to_owned()));
            }
        }
    }

    fn teardown(&mut self) -> usize {
        if self.lifecycle != Lifecycle::Mounted {
            return 0;
        }
        self.lifecycle = Lifecycle::Unmounted;
        self.mounts.detach_all();

        let handles = std::mem::take(&mut self.handles);
        let live = handles.len();
        let mut disposed = 0;
        for handle in handles {
            let handle_id = handle.id();
            match self.library.dispose_chart(&mut self.mounts, handle) {
                Ok(()) => disposed += 1,
                Err(err) => warn!(handle = handle_id, error = %err, "chart disposal failed"),
            }
        }
        if live > 0 {
            self.emit(DashboardEvent::ChartsDisposed { count: disposed });
        }
        info!(generation = self.generation, disposed, "dashboard unmounted");
        disposed
    }

    fn snapshot(&self) -> DashboardSnapshot {
        let mounts: IndexMap<String, MountSnapshot> = self
            .mounts
            .iter()
            .map(|mount| {
                (
                    mount.id().as_str().to_owned(),
                    MountSnapshot {
                        populated: mount.is_populated(),
                        populate_count: mount.populate_count(),
                        attached: mount.is_attached(),
                    },
                )
            })
            .collect();
        DashboardSnapshot {
            lifecycle: self.lifecycle,
            generation: self.generation,
            counters: self.state.counters(),
            loading: self.state.is_loading(),
            error: self.state.error().map(str::to_owned),
            render_count: self.render_count,
            chart_stats: self.library.stats(),
            mounts,
        }
    }

    fn page(&self) -> PageContext<'_> {
        PageContext {
            config: &self.config,
            counters: self.state.counters(),
            loading: self.state.is_loading(),
            error: self.state.error(),
            slots: &self.slots,
            mounts: &self.mounts,
            legend: &self.legend,
            users: &USERS,
            films: &POPULAR_FILMS,
        }
    }
}

/// State shared with the setup task. Observers live behind their own lock so
/// they run after the core lock is released and may call back into the
/// dashboard.
struct Shared<L> {
    core: Mutex<DashboardCore<L>>,
    observers: Mutex<ObserverRegistry>,
}

impl<L: ChartLibrary> Shared<L> {
    /// Delivers queued events. A call made while another dispatch is running
    /// (e.g. from inside an observer) leaves its events to that dispatch.
    fn dispatch(&self) {
        loop {
            {
                let Some(mut observers) = self.observers.try_lock() else {
                    return;
                };
                loop {
                    let pending = std::mem::take(&mut self.core.lock().pending);
                    if pending.is_empty() {
                        break;
                    }
                    for (event, context) in &pending {
                        observers.emit(event, *context);
                    }
                }
            }
            // Events queued between the last drain and the unlock.
            if self.core.lock().pending.is_empty() {
                return;
            }
        }
    }
}

/// One dashboard screen bound to a chart library.
///
/// `mount` schedules chart construction after the configured delay on the
/// current tokio runtime; `unmount` (or dropping the dashboard) cancels a
/// pending setup and disposes every live chart exactly once.
pub struct Dashboard<L: ChartLibrary + Send + 'static> {
    shared: Arc<Shared<L>>,
    shutdown_tx: broadcast::Sender<()>,
    setup_task: Mutex<Option<JoinHandle<()>>>,
}

impl<L: ChartLibrary + Send + 'static> Dashboard<L> {
    pub fn new(config: DashboardConfig, library: L) -> DashboardResult<Self> {
        config.validate()?;
        let slots = dashboard_chart_slots()?;
        let mut mounts = MountRegistry::new();
        for slot in &slots {
            mounts.register(slot.mount.clone(), config.chart_viewport)?;
        }

        let core = DashboardCore {
            state: DashboardState::new(config.initial_counters),
            config,
            library,
            mounts,
            slots,
            handles: Vec::new(),
            lifecycle: Lifecycle::Idle,
            generation: 0,
            render_count: 0,
            legend: GenreLegend::build(&GENRES),
            pending: Vec::new(),
        };
        let (shutdown_tx, _) = broadcast::channel(1);

        Ok(Self {
            shared: Arc::new(Shared {
                core: Mutex::new(core),
                observers: Mutex::new(ObserverRegistry::default()),
            }),
            shutdown_tx,
            setup_task: Mutex::new(None),
        })
    }

    /// Shows the dashboard and schedules chart setup after the configured
    /// delay. Must be called from within a tokio runtime.
    pub fn mount(&self) -> DashboardResult<()> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|err| {
            DashboardError::Lifecycle(format!("mount requires a tokio runtime: {err}"))
        })?;
        let (generation, delay) = {
            let mut core = self.shared.core.lock();
            let generation = core.begin_mount()?;
            (generation, core.config.setup_delay())
        };
        self.shared.dispatch();

        let shared = Arc::clone(&self.shared);
        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let task = runtime.spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    shared.core.lock().complete_setup(generation);
                    shared.dispatch();
                }
                _ = shutdown_rx.recv() => {
                    debug!(generation, "chart setup cancelled before delay elapsed");
                }
            }
        });
        *self.setup_task.lock() = Some(task);
        Ok(())
    }

    /// Waits for the pending setup task, if any, to finish.
    pub async fn settled(&self) -> DashboardResult<()> {
        let task = self.setup_task.lock().take();
        if let Some(task) = task {
            task.await.map_err(|err| {
                DashboardError::Lifecycle(format!("chart setup task failed: {err}"))
            })?;
        }
        Ok(())
    }

    /// Tears the dashboard down and returns how many charts were disposed.
    /// Calling it again, or before `mount`, disposes nothing.
    pub fn unmount(&self) -> usize {
        // No receivers just means no setup is pending.
        let _ = self.shutdown_tx.send(());
        let disposed = self.shared.core.lock().teardown();
        self.shared.dispatch();
        disposed
    }

    /// Handles a click on `card` and returns its new count.
    pub fn click(&self, card: StatCard) -> u64 {
        let value = self.shared.core.lock().increment(card);
        self.shared.dispatch();
        value
    }

    #[must_use]
    pub fn counter(&self, card: StatCard) -> u64 {
        self.shared.core.lock().state.counter(card)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.shared.core.lock().state.is_loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.shared.core.lock().state.error().map(str::to_owned)
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.shared.core.lock().lifecycle
    }

    /// Number of re-renders requested so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.shared.core.lock().render_count
    }

    #[must_use]
    pub fn chart_stats(&self) -> ChartLibraryStats {
        self.shared.core.lock().library.stats()
    }

    #[must_use]
    pub fn live_chart_count(&self) -> usize {
        self.shared.core.lock().handles.len()
    }

    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.shared.core.lock().snapshot()
    }

    /// Renders the whole page as HTML.
    #[must_use]
    pub fn render_html(&self) -> String {
        let core = self.shared.core.lock();
        render_page(&core.page()).into_string()
    }

    pub fn with_mounts<T>(&self, f: impl FnOnce(&MountRegistry) -> T) -> T {
        f(&self.shared.core.lock().mounts)
    }

    pub fn with_library<T>(&self, f: impl FnOnce(&L) -> T) -> T {
        f(&self.shared.core.lock().library)
    }

    /// Registers an observer with a unique identifier.
    ///
    /// Observers may read and click the dashboard from `on_event`, but must
    /// not register or unregister observers there.
    pub fn register_observer(&self, observer: Box<dyn DashboardObserver>) -> DashboardResult<()> {
        self.shared.observers.lock().register(observer)
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&self, observer_id: &str) -> bool {
        self.shared.observers.lock().unregister(observer_id)
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.shared.observers.lock().contains(observer_id)
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.shared.observers.lock().len()
    }
}

impl<L: ChartLibrary + Send + 'static> Drop for Dashboard<L> {
    fn drop(&mut self) {
        let disposed = self.unmount();
        if disposed > 0 {
            debug!(disposed, "released charts on drop");
        }
    }
}
