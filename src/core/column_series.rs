use serde::{Deserialize, Serialize};

use crate::core::{CategoryScale, CategoryValue, LinearScale};
use crate::error::{DashboardError, DashboardResult};

/// Deterministic column geometry in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnGeometry {
    pub category: String,
    pub value: f64,
    pub x_center: f64,
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

impl ColumnGeometry {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_right - self.x_left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_bottom - self.y_top
    }
}

/// Projects categorical samples into column bars.
///
/// Each column spans from `baseline` to the sample value and occupies
/// `band_fill_ratio` of its category band.
pub fn project_columns(
    samples: &[CategoryValue],
    categories: &CategoryScale,
    values: LinearScale,
    band_fill_ratio: f64,
    baseline: f64,
) -> DashboardResult<Vec<ColumnGeometry>> {
    if !band_fill_ratio.is_finite() || band_fill_ratio <= 0.0 || band_fill_ratio > 1.0 {
        return Err(DashboardError::InvalidData(
            "column band fill ratio must be in (0, 1]".to_owned(),
        ));
    }

    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let baseline_y = values.domain_to_pixel(baseline)?;
    let half_width = categories.band_width() * band_fill_ratio * 0.5;

    let mut columns = Vec::with_capacity(samples.len());
    for sample in samples {
        let x_center = categories.category_center(&sample.category)?;
        let y_value = values.domain_to_pixel(sample.value)?;
        columns.push(ColumnGeometry {
            category: sample.category.clone(),
            value: sample.value,
            x_center,
            x_left: x_center - half_width,
            x_right: x_center + half_width,
            y_top: y_value.min(baseline_y),
            y_bottom: y_value.max(baseline_y),
        });
    }

    Ok(columns)
}
