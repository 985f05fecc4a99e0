use serde::{Deserialize, Serialize};

use crate::core::{CategoryScale, CategoryValue, LinearScale};
use crate::error::{DashboardError, DashboardResult};

/// One cubic Bézier segment of a smoothed line, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub start: (f64, f64),
    pub control1: (f64, f64),
    pub control2: (f64, f64),
    pub end: (f64, f64),
}

/// Projects categorical samples into a smoothed line.
///
/// `tension` follows the usual charting convention: `1.0` draws straight
/// segments and lower values bend the curve more. Control points are
/// Catmull-Rom tangents scaled by `(1 - tension) / 2`; the first and last
/// points act as their own missing neighbour.
pub fn project_smoothed_line(
    samples: &[CategoryValue],
    categories: &CategoryScale,
    values: LinearScale,
    tension: f64,
) -> DashboardResult<Vec<CurveSegment>> {
    if !tension.is_finite() || !(0.0..=1.0).contains(&tension) {
        return Err(DashboardError::InvalidData(
            "line tension must be finite and in [0, 1]".to_owned(),
        ));
    }
    if samples.len() < 2 {
        return Ok(Vec::new());
    }

    let mut mapped = Vec::with_capacity(samples.len());
    for sample in samples {
        let x = categories.category_center(&sample.category)?;
        let y = values.domain_to_pixel(sample.value)?;
        mapped.push((x, y));
    }

    let factor = (1.0 - tension) * 0.5;
    let last = mapped.len() - 1;
    let mut segments = Vec::with_capacity(last);
    for index in 0..last {
        let previous = mapped[index.saturating_sub(1)];
        let start = mapped[index];
        let end = mapped[index + 1];
        let next = mapped[(index + 2).min(last)];

        segments.push(CurveSegment {
            start,
            control1: (
                start.0 + (end.0 - previous.0) * factor,
                start.1 + (end.1 - previous.1) * factor,
            ),
            control2: (
                end.0 - (next.0 - start.0) * factor,
                end.1 - (next.1 - start.1) * factor,
            ),
            end,
        });
    }

    Ok(segments)
}
