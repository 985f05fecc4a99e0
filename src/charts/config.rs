use crate::core::CategoryValue;
use crate::error::{DashboardError, DashboardResult};
use crate::render::Color;

/// Hover text template. `{category}` and `{value}` are substituted per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipTemplate(String);

impl TooltipTemplate {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The default "category: value" tooltip.
    #[must_use]
    pub fn category_value() -> Self {
        Self::new("{category}: {value}")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn render(&self, category: &str, value: &str) -> String {
        self.0
            .replace("{category}", category)
            .replace("{value}", value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryAxisConfig {
    pub labels_visible: bool,
    pub label_color: Color,
}

impl Default for CategoryAxisConfig {
    fn default() -> Self {
        Self {
            labels_visible: true,
            label_color: Color::rgb(0.4, 0.4, 0.45),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxisConfig {
    /// Pins the axis start; `None` snaps to the data.
    pub min: Option<f64>,
    pub min_grid_distance_px: f64,
    pub labels_visible: bool,
    pub grid_visible: bool,
    pub grid_color: Color,
    pub label_color: Color,
}

impl Default for ValueAxisConfig {
    fn default() -> Self {
        Self {
            min: None,
            min_grid_distance_px: 30.0,
            labels_visible: true,
            grid_visible: true,
            grid_color: Color::rgb(0.9, 0.9, 0.92),
            label_color: Color::rgb(0.4, 0.4, 0.45),
        }
    }
}

impl ValueAxisConfig {
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_min_grid_distance(mut self, min_grid_distance_px: f64) -> Self {
        self.min_grid_distance_px = min_grid_distance_px;
        self
    }

    #[must_use]
    pub fn with_labels_visible(mut self, visible: bool) -> Self {
        self.labels_visible = visible;
        self
    }

    #[must_use]
    pub fn with_grid_visible(mut self, visible: bool) -> Self {
        self.grid_visible = visible;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnChartConfig {
    pub data: Vec<CategoryValue>,
    pub category_axis: CategoryAxisConfig,
    pub value_axis: ValueAxisConfig,
    pub color: Color,
    pub band_fill_ratio: f64,
    pub corner_radius_px: f64,
    pub tooltip: Option<TooltipTemplate>,
}

impl ColumnChartConfig {
    #[must_use]
    pub fn new(data: Vec<CategoryValue>, color: Color) -> Self {
        Self {
            data,
            category_axis: CategoryAxisConfig::default(),
            value_axis: ValueAxisConfig::default(),
            color,
            band_fill_ratio: 0.8,
            corner_radius_px: 0.0,
            tooltip: Some(TooltipTemplate::category_value()),
        }
    }

    #[must_use]
    pub fn with_value_axis(mut self, value_axis: ValueAxisConfig) -> Self {
        self.value_axis = value_axis;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartConfig {
    pub data: Vec<CategoryValue>,
    pub category_axis: CategoryAxisConfig,
    pub value_axis: ValueAxisConfig,
    pub stroke_color: Color,
    pub stroke_width_px: f64,
    pub tension: f64,
    pub tooltip: Option<TooltipTemplate>,
}

impl LineChartConfig {
    #[must_use]
    pub fn new(data: Vec<CategoryValue>, stroke_color: Color) -> Self {
        Self {
            data,
            category_axis: CategoryAxisConfig::default(),
            value_axis: ValueAxisConfig::default(),
            stroke_color,
            stroke_width_px: 2.0,
            tension: 1.0,
            tooltip: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: String,
    pub value: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChartConfig {
    pub slices: Vec<PieSlice>,
    pub radius_ratio: f64,
    pub labels_visible: bool,
    pub ticks_visible: bool,
    pub tooltips_visible: bool,
}

impl PieChartConfig {
    #[must_use]
    pub fn new(slices: Vec<PieSlice>) -> Self {
        Self {
            slices,
            radius_ratio: 0.8,
            labels_visible: true,
            ticks_visible: true,
            tooltips_visible: true,
        }
    }

    /// Hides labels, tick lines and tooltips so only colored wedges render.
    #[must_use]
    pub fn wedges_only(mut self) -> Self {
        self.labels_visible = false;
        self.ticks_visible = false;
        self.tooltips_visible = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartConfig {
    Column(ColumnChartConfig),
    Pie(PieChartConfig),
    Line(LineChartConfig),
}

impl ChartConfig {
    #[must_use]
    pub fn kind(&self) -> super::ChartKind {
        match self {
            Self::Column(_) => super::ChartKind::Column,
            Self::Pie(_) => super::ChartKind::Pie,
            Self::Line(_) => super::ChartKind::Line,
        }
    }

    pub fn validate(&self) -> DashboardResult<()> {
        match self {
            Self::Column(config) => {
                validate_samples(&config.data)?;
                validate_value_axis(config.value_axis)?;
                config.color.validate()
            }
            Self::Line(config) => {
                validate_samples(&config.data)?;
                validate_value_axis(config.value_axis)?;
                if !config.stroke_width_px.is_finite() || config.stroke_width_px <= 0.0 {
                    return Err(DashboardError::InvalidData(
                        "line stroke width must be finite and > 0".to_owned(),
                    ));
                }
                config.stroke_color.validate()
            }
            Self::Pie(config) => {
                if config.slices.is_empty() {
                    return Err(DashboardError::InvalidData(
                        "pie chart needs at least one slice".to_owned(),
                    ));
                }
                if !config.radius_ratio.is_finite()
                    || config.radius_ratio <= 0.0
                    || config.radius_ratio > 1.0
                {
                    return Err(DashboardError::InvalidData(
                        "pie radius ratio must be in (0, 1]".to_owned(),
                    ));
                }
                for slice in &config.slices {
                    slice.color.validate()?;
                }
                Ok(())
            }
        }
    }
}

fn validate_samples(samples: &[CategoryValue]) -> DashboardResult<()> {
    if samples.is_empty() {
        return Err(DashboardError::InvalidData(
            "chart needs at least one sample".to_owned(),
        ));
    }
    for (index, sample) in samples.iter().enumerate() {
        if samples[..index]
            .iter()
            .any(|other| other.category == sample.category)
        {
            return Err(DashboardError::InvalidData(format!(
                "duplicate category `{}`",
                sample.category
            )));
        }
    }
    Ok(())
}

fn validate_value_axis(axis: ValueAxisConfig) -> DashboardResult<()> {
    if !axis.min_grid_distance_px.is_finite() || axis.min_grid_distance_px <= 0.0 {
        return Err(DashboardError::InvalidData(
            "value axis min grid distance must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
