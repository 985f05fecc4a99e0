use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Band scale that splits a horizontal pixel span into one equal band per
/// category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScale {
    labels: Vec<String>,
    range_start: f64,
    range_end: f64,
}

impl CategoryScale {
    pub fn new(labels: Vec<String>, range_start: f64, range_end: f64) -> DashboardResult<Self> {
        if labels.is_empty() {
            return Err(DashboardError::InvalidData(
                "category scale needs at least one label".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_end <= range_start {
            return Err(DashboardError::InvalidData(
                "category range must be finite and increasing".to_owned(),
            ));
        }
        Ok(Self {
            labels,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        (self.range_end - self.range_start) / self.labels.len() as f64
    }

    pub fn index_of(&self, category: &str) -> DashboardResult<usize> {
        self.labels
            .iter()
            .position(|label| label == category)
            .ok_or_else(|| {
                DashboardError::InvalidData(format!("unknown category `{category}`"))
            })
    }

    /// Pixel center of the band at `index`.
    pub fn band_center(&self, index: usize) -> DashboardResult<f64> {
        if index >= self.labels.len() {
            return Err(DashboardError::InvalidData(format!(
                "category index {index} out of range (len {})",
                self.labels.len()
            )));
        }
        Ok(self.range_start + (index as f64 + 0.5) * self.band_width())
    }

    pub fn category_center(&self, category: &str) -> DashboardResult<f64> {
        self.band_center(self.index_of(category)?)
    }
}
