use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::dashboard::CounterValues;
use crate::error::{DashboardError, DashboardResult};

/// Dashboard bootstrap configuration.
///
/// Every field has a default so hosts can persist only what they override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Artificial latency before the charts are built, in milliseconds.
    #[serde(default = "default_setup_delay_ms")]
    pub setup_delay_ms: u64,
    #[serde(default = "default_chart_viewport")]
    pub chart_viewport: Viewport,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_range_start")]
    pub date_range_start: NaiveDate,
    #[serde(default = "default_range_end")]
    pub date_range_end: NaiveDate,
    #[serde(default)]
    pub initial_counters: CounterValues,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            setup_delay_ms: default_setup_delay_ms(),
            chart_viewport: default_chart_viewport(),
            title: default_title(),
            user_name: default_user_name(),
            date_range_start: default_range_start(),
            date_range_end: default_range_end(),
            initial_counters: CounterValues::default(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn with_setup_delay(mut self, delay: Duration) -> Self {
        self.setup_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_chart_viewport(mut self, viewport: Viewport) -> Self {
        self.chart_viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_initial_counters(mut self, counters: CounterValues) -> Self {
        self.initial_counters = counters;
        self
    }

    #[must_use]
    pub fn setup_delay(&self) -> Duration {
        Duration::from_millis(self.setup_delay_ms)
    }

    /// Header label such as `02 OKT 2024 - 03 OKT 2024`.
    #[must_use]
    pub fn date_range_label(&self) -> String {
        format!(
            "{} - {}",
            header_date(self.date_range_start),
            header_date(self.date_range_end)
        )
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if !self.chart_viewport.is_valid() {
            return Err(DashboardError::InvalidConfig(format!(
                "chart viewport must be non-zero, got {}x{}",
                self.chart_viewport.width, self.chart_viewport.height
            )));
        }
        if self.title.trim().is_empty() {
            return Err(DashboardError::InvalidConfig(
                "title must not be empty".to_owned(),
            ));
        }
        if self.date_range_end < self.date_range_start {
            return Err(DashboardError::InvalidConfig(format!(
                "date range ends ({}) before it starts ({})",
                self.date_range_end, self.date_range_start
            )));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| DashboardError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::InvalidConfig(format!("failed to serialize config: {e}"))
        })
    }
}

// Indonesian month abbreviations, as printed in the report header.
const HEADER_MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MEI", "JUN", "JUL", "AGU", "SEP", "OKT", "NOV", "DES",
];

fn header_date(date: NaiveDate) -> String {
    let month = HEADER_MONTHS[date.month0() as usize];
    format!("{:02} {month} {}", date.day(), date.year())
}

fn default_setup_delay_ms() -> u64 {
    1_000
}

fn default_chart_viewport() -> Viewport {
    Viewport::new(480, 300)
}

fn default_title() -> String {
    "ULO REPORT".to_owned()
}

fn default_user_name() -> String {
    "William Andre".to_owned()
}

fn default_range_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 2).unwrap_or(NaiveDate::MIN)
}

fn default_range_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 3).unwrap_or(NaiveDate::MIN)
}
