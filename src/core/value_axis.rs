use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::primitives::ensure_finite;
use crate::error::{DashboardError, DashboardResult};

const NICE_STEP_MANTISSAS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
const MAX_STEP_WIDENING_PASSES: usize = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisTick {
    pub value: f64,
    pub label: String,
}

/// Resolved numeric axis: domain snapped to nice steps plus its ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisLayout {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub ticks: Vec<ValueAxisTick>,
}

/// Resolves a value axis for `values` drawn over `axis_span_px` pixels.
///
/// When `pinned_min` is set the axis starts exactly there, otherwise the
/// minimum snaps down to the nearest step. Tick spacing never drops below
/// `min_grid_distance_px`.
pub fn resolve_value_axis(
    values: &[f64],
    pinned_min: Option<f64>,
    axis_span_px: f64,
    min_grid_distance_px: f64,
) -> DashboardResult<ValueAxisLayout> {
    if values.is_empty() {
        return Err(DashboardError::InvalidData(
            "value axis needs at least one value".to_owned(),
        ));
    }
    let axis_span_px = ensure_finite(axis_span_px, "axis span")?;
    let min_grid_distance_px = ensure_finite(min_grid_distance_px, "min grid distance")?;
    if axis_span_px <= 0.0 || min_grid_distance_px <= 0.0 {
        return Err(DashboardError::InvalidData(
            "axis span and min grid distance must be > 0".to_owned(),
        ));
    }
    for value in values {
        ensure_finite(*value, "axis value")?;
    }

    let data_min = values
        .iter()
        .copied()
        .map(OrderedFloat)
        .min()
        .map_or(0.0, |value| value.0);
    let data_max = values
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |value| value.0);
    if let Some(pinned) = pinned_min {
        ensure_finite(pinned, "pinned axis minimum")?;
    }

    let lower = pinned_min.unwrap_or(data_min);
    let upper = data_max.max(lower);
    let span = if upper > lower { upper - lower } else { 1.0 };

    let max_ticks = (axis_span_px / min_grid_distance_px).floor().max(1.0);
    let mut step = nice_step_at_least(span / max_ticks);

    for _ in 0..MAX_STEP_WIDENING_PASSES {
        let (min, max) = snap_domain(lower, upper, step, pinned_min.is_some());
        let intervals = ((max - min) / step).round().max(1.0);
        if axis_span_px / intervals >= min_grid_distance_px {
            return Ok(ValueAxisLayout {
                min,
                max,
                step,
                ticks: build_ticks(min, max, step),
            });
        }
        step = nice_step_at_least(step * 1.000_001);
    }

    Err(DashboardError::InvalidData(format!(
        "could not fit value axis ticks into {axis_span_px}px with {min_grid_distance_px}px spacing"
    )))
}

fn snap_domain(lower: f64, upper: f64, step: f64, pinned: bool) -> (f64, f64) {
    let min = if pinned {
        lower
    } else {
        (lower / step).floor() * step
    };
    let mut max = min + ((upper - min) / step).ceil() * step;
    if max <= min {
        max = min + step;
    }
    (min, max)
}

fn build_ticks(min: f64, max: f64, step: f64) -> Vec<ValueAxisTick> {
    let count = ((max - min) / step).round() as usize;
    (0..=count)
        .map(|index| {
            let value = min + index as f64 * step;
            ValueAxisTick {
                value,
                label: format_axis_value(value, step),
            }
        })
        .collect()
}

/// Smallest `m * 10^k` with `m` in {1, 2, 2.5, 5, 10} that is `>= raw`.
fn nice_step_at_least(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    NICE_STEP_MANTISSAS
        .iter()
        .map(|mantissa| mantissa * magnitude)
        .find(|candidate| *candidate >= raw * (1.0 - 1e-12))
        .unwrap_or(10.0 * magnitude)
}

/// Formats an axis value with thousands separators; fractional steps keep
/// up to two decimals.
#[must_use]
pub fn format_axis_value(value: f64, step: f64) -> String {
    let decimals = if step.fract().abs() < 1e-9 {
        0
    } else if (step * 10.0).fract().abs() < 1e-9 {
        1
    } else {
        2
    };
    let rendered = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && rendered.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_axis_value, nice_step_at_least, resolve_value_axis};

    #[test]
    fn nice_steps_snap_upwards() {
        assert_eq!(nice_step_at_least(0.7), 1.0);
        assert_eq!(nice_step_at_least(1.3), 2.0);
        assert_eq!(nice_step_at_least(2.2), 2.5);
        assert_eq!(nice_step_at_least(3.0), 5.0);
        assert_eq!(nice_step_at_least(730.0), 1000.0);
    }

    #[test]
    fn pinned_minimum_is_kept() {
        let layout = resolve_value_axis(&[320.0, 180.0, 950.0], Some(0.0), 240.0, 40.0)
            .expect("axis");
        assert_eq!(layout.min, 0.0);
        assert!(layout.max >= 950.0);
        assert_eq!(layout.ticks.first().map(|tick| tick.value), Some(0.0));
    }

    #[test]
    fn tick_spacing_respects_min_grid_distance() {
        let layout =
            resolve_value_axis(&[12.0, 88.0, 47.0], None, 200.0, 50.0).expect("axis");
        let intervals = layout.ticks.len() - 1;
        assert!(200.0 / intervals as f64 >= 50.0);
    }

    #[test]
    fn labels_use_thousands_separators() {
        assert_eq!(format_axis_value(45_000.0, 5_000.0), "45,000");
        assert_eq!(format_axis_value(2.5, 0.5), "2.5");
        assert_eq!(format_axis_value(-1_200.0, 100.0), "-1,200");
    }
}
