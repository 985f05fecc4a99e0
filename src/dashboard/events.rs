use serde::{Deserialize, Serialize};

use crate::dashboard::{CounterValues, StatCard};
use crate::error::{DashboardError, DashboardResult};

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub counters: CounterValues,
    pub loading: bool,
    pub has_error: bool,
    pub render_count: u64,
}

/// One state change. Every signal write emits exactly one event and asks the
/// host for exactly one re-render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardEvent {
    CounterChanged { card: StatCard, value: u64 },
    LoadingChanged(bool),
    ErrorChanged(Option<String>),
    ChartsReady { count: usize },
    ChartsDisposed { count: usize },
}

/// Hook interface for hosts that re-render or record on state changes.
pub trait DashboardObserver: Send {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &DashboardEvent, context: ObserverContext);
}

#[derive(Default)]
pub(crate) struct ObserverRegistry {
    observers: Vec<Box<dyn DashboardObserver>>,
}

impl ObserverRegistry {
    pub(crate) fn register(&mut self, observer: Box<dyn DashboardObserver>) -> DashboardResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(DashboardError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.contains(&observer_id) {
            return Err(DashboardError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Returns `true` when an observer was removed.
    pub(crate) fn unregister(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    pub(crate) fn contains(&self, observer_id: &str) -> bool {
        self.observers.iter().any(|entry| entry.id() == observer_id)
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn emit(&mut self, event: &DashboardEvent, context: ObserverContext) {
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
