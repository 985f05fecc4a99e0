use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::CategoryValue;
use crate::error::{DashboardError, DashboardResult};

/// Wedge geometry for one pie slice. Angles are radians, clockwise in screen
/// space, with `-PI / 2` pointing at twelve o'clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WedgeGeometry {
    pub category: String,
    pub value: f64,
    pub share: f64,
    pub center: (f64, f64),
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl WedgeGeometry {
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Point on the rim at `angle`.
    #[must_use]
    pub fn rim_point(&self, angle: f64) -> (f64, f64) {
        (
            self.center.0 + self.radius * angle.cos(),
            self.center.1 + self.radius * angle.sin(),
        )
    }
}

/// Splits a full circle into wedges proportional to each sample value.
pub fn project_pie(
    samples: &[CategoryValue],
    center: (f64, f64),
    radius: f64,
) -> DashboardResult<Vec<WedgeGeometry>> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(DashboardError::InvalidData(
            "pie radius must be finite and > 0".to_owned(),
        ));
    }
    if samples
        .iter()
        .any(|sample| !sample.value.is_finite() || sample.value < 0.0)
    {
        return Err(DashboardError::InvalidData(
            "pie values must be finite and >= 0".to_owned(),
        ));
    }

    let total: f64 = samples.iter().map(|sample| sample.value).sum();
    if total <= 0.0 {
        return Ok(Vec::new());
    }

    let mut wedges = Vec::with_capacity(samples.len());
    let mut angle = -FRAC_PI_2;
    for (index, sample) in samples.iter().enumerate() {
        let share = sample.value / total;
        let end_angle = if index + 1 == samples.len() {
            -FRAC_PI_2 + TAU
        } else {
            angle + share * TAU
        };
        wedges.push(WedgeGeometry {
            category: sample.category.clone(),
            value: sample.value,
            share,
            center,
            radius,
            start_angle: angle,
            end_angle,
        });
        angle = end_angle;
    }

    Ok(wedges)
}
