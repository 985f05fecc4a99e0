use serde::{Deserialize, Serialize};

/// Observable value: `get` returns the latest write, every write bumps the
/// version exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal<T> {
    value: T,
    version: u64,
}

impl<T> Signal<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value, version: 0 }
    }

    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replaces the value and returns the new version.
    pub fn set(&mut self, value: T) -> u64 {
        self.value = value;
        self.version += 1;
        self.version
    }

    /// Applies `f` in place and returns the new version.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> u64 {
        f(&mut self.value);
        self.version += 1;
        self.version
    }
}

impl<T: Copy> Signal<T> {
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }
}

/// The three clickable summary tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatCard {
    TotalUsers,
    ActiveUsers,
    TotalMovies,
}

impl StatCard {
    pub const ALL: [Self; 3] = [Self::TotalUsers, Self::ActiveUsers, Self::TotalMovies];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TotalUsers => "Total Users",
            Self::ActiveUsers => "Active Users",
            Self::TotalMovies => "Total Movies",
        }
    }

    /// Stable key used in markup attributes.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::TotalUsers => "total-users",
            Self::ActiveUsers => "active-users",
            Self::TotalMovies => "total-movies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterValues {
    pub total_users: u64,
    pub active_users: u64,
    pub total_movies: u64,
}

impl Default for CounterValues {
    fn default() -> Self {
        Self {
            total_users: 3_520_000,
            active_users: 3_200_000,
            total_movies: 3_520_000,
        }
    }
}

impl CounterValues {
    #[must_use]
    pub fn get(self, card: StatCard) -> u64 {
        match card {
            StatCard::TotalUsers => self.total_users,
            StatCard::ActiveUsers => self.active_users,
            StatCard::TotalMovies => self.total_movies,
        }
    }
}

/// Render-scoped reactive state of one dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    total_users: Signal<u64>,
    active_users: Signal<u64>,
    total_movies: Signal<u64>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
}

impl DashboardState {
    #[must_use]
    pub fn new(counters: CounterValues) -> Self {
        Self {
            total_users: Signal::new(counters.total_users),
            active_users: Signal::new(counters.active_users),
            total_movies: Signal::new(counters.total_movies),
            loading: Signal::new(true),
            error: Signal::new(None),
        }
    }

    #[must_use]
    pub fn counters(&self) -> CounterValues {
        CounterValues {
            total_users: self.total_users.value(),
            active_users: self.active_users.value(),
            total_movies: self.total_movies.value(),
        }
    }

    #[must_use]
    pub fn counter(&self, card: StatCard) -> u64 {
        self.counter_signal(card).value()
    }

    #[must_use]
    pub fn counter_signal(&self, card: StatCard) -> &Signal<u64> {
        match card {
            StatCard::TotalUsers => &self.total_users,
            StatCard::ActiveUsers => &self.active_users,
            StatCard::TotalMovies => &self.total_movies,
        }
    }

    /// Adds one to `card`'s counter and returns the new count.
    pub fn increment(&mut self, card: StatCard) -> u64 {
        let signal = match card {
            StatCard::TotalUsers => &mut self.total_users,
            StatCard::ActiveUsers => &mut self.active_users,
            StatCard::TotalMovies => &mut self.total_movies,
        };
        signal.update(|count| *count = count.saturating_add(1));
        signal.value()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.value()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.get().as_deref()
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error.set(error);
    }

    /// Sum of all signal versions; grows by exactly one per write.
    #[must_use]
    pub fn write_count(&self) -> u64 {
        self.total_users.version()
            + self.active_users.version()
            + self.total_movies.version()
            + self.loading.version()
            + self.error.version()
    }
}

#[cfg(test)]
mod tests {
    use super::{CounterValues, DashboardState, Signal, StatCard};

    #[test]
    fn signal_reads_latest_write() {
        let mut signal = Signal::new(1);
        assert_eq!(signal.set(5), 1);
        assert_eq!(signal.value(), 5);
        assert_eq!(signal.update(|value| *value += 1), 2);
        assert_eq!(*signal.get(), 6);
    }

    #[test]
    fn increment_saturates() {
        let mut state = DashboardState::new(CounterValues {
            total_users: u64::MAX,
            active_users: 0,
            total_movies: 0,
        });
        assert_eq!(state.increment(StatCard::TotalUsers), u64::MAX);
        assert_eq!(state.write_count(), 1);
    }
}
