use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> DashboardResult<Self> {
        if !self.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// One categorical sample, e.g. a month and its revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub category: String,
    pub value: f64,
}

impl CategoryValue {
    #[must_use]
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }

    pub fn from_decimal(category: impl Into<String>, value: Decimal) -> DashboardResult<Self> {
        Ok(Self {
            category: category.into(),
            value: decimal_to_f64(value, "category value")?,
        })
    }
}

/// Pixel rectangle left for series drawing once axis gutters are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Insets the viewport by the given gutters.
    pub fn inset(
        viewport: Viewport,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> DashboardResult<Self> {
        let viewport = viewport.validate()?;
        let width = f64::from(viewport.width) - left - right;
        let height = f64::from(viewport.height) - top - bottom;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(DashboardError::InvalidData(format!(
                "plot area collapsed to {width}x{height} inside {}x{} viewport",
                viewport.width, viewport.height
            )));
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}
