use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{DashboardError, DashboardResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> DashboardResult<f64> {
    value.to_f64().ok_or_else(|| {
        DashboardError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

pub(crate) fn ensure_finite(value: f64, field_name: &str) -> DashboardResult<f64> {
    if !value.is_finite() {
        return Err(DashboardError::InvalidData(format!(
            "{field_name} must be finite"
        )));
    }
    Ok(value)
}
