use tracing::trace;

use crate::charts::{
    CategoryAxisConfig, ChartConfig, ChartKind, ColumnChartConfig, LineChartConfig,
    PieChartConfig, TooltipTemplate, ValueAxisConfig,
};
use crate::core::value_axis::format_axis_value;
use crate::core::{
    CategoryScale, CategoryValue, LinearScale, PlotArea, ValueAxisLayout, Viewport,
    project_columns, project_pie, project_smoothed_line, resolve_value_axis,
};
use crate::error::DashboardResult;
use crate::render::{
    Color, CurvePathPrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive, WedgePrimitive,
};

const AXIS_FONT_SIZE_PX: f64 = 11.0;
const AXIS_LINE_COLOR: Color = Color::rgb(0.75, 0.75, 0.78);
const PIE_LABEL_COLOR: Color = Color::rgb(0.25, 0.25, 0.3);

/// `(left, top, right, bottom)` pixel gutters reserved around the plot.
#[must_use]
pub fn chart_gutters(kind: ChartKind) -> (f64, f64, f64, f64) {
    match kind {
        ChartKind::Column | ChartKind::Line => (52.0, 12.0, 12.0, 28.0),
        ChartKind::Pie => (8.0, 8.0, 8.0, 8.0),
    }
}

/// Projects a chart config into a deterministic frame for `viewport`.
pub fn build_chart_frame(config: &ChartConfig, viewport: Viewport) -> DashboardResult<RenderFrame> {
    config.validate()?;
    let (left, top, right, bottom) = chart_gutters(config.kind());
    let plot = PlotArea::inset(viewport, left, top, right, bottom)?;

    let frame = match config {
        ChartConfig::Column(column) => build_column_frame(column, viewport, plot)?,
        ChartConfig::Line(line) => build_line_frame(line, viewport, plot)?,
        ChartConfig::Pie(pie) => build_pie_frame(pie, viewport, plot)?,
    };
    frame.validate()?;
    trace!(
        kind = ?config.kind(),
        rects = frame.rects.len(),
        wedges = frame.wedges.len(),
        curves = frame.curves.len(),
        texts = frame.texts.len(),
        "built chart frame"
    );
    Ok(frame)
}

struct CartesianAxes {
    categories: CategoryScale,
    values: LinearScale,
    layout: ValueAxisLayout,
}

/// Columns grow from zero, so an unpinned column axis always spans 0.
fn resolve_axes(
    data: &[CategoryValue],
    value_axis: ValueAxisConfig,
    plot: PlotArea,
    include_zero: bool,
) -> DashboardResult<CartesianAxes> {
    let labels = data.iter().map(|sample| sample.category.clone()).collect();
    let categories = CategoryScale::new(labels, plot.left, plot.right())?;
    let mut raw: Vec<f64> = data.iter().map(|sample| sample.value).collect();
    if include_zero && value_axis.min.is_none() {
        raw.push(0.0);
    }
    let layout = resolve_value_axis(
        &raw,
        value_axis.min,
        plot.height,
        value_axis.min_grid_distance_px,
    )?;
    let values = LinearScale::new(layout.min, layout.max, plot.bottom(), plot.top)?;
    Ok(CartesianAxes {
        categories,
        values,
        layout,
    })
}

fn push_axes(
    mut frame: RenderFrame,
    axes: &CartesianAxes,
    category_axis: CategoryAxisConfig,
    value_axis: ValueAxisConfig,
    plot: PlotArea,
) -> DashboardResult<RenderFrame> {
    for tick in &axes.layout.ticks {
        let y = axes.values.domain_to_pixel(tick.value)?;
        if value_axis.grid_visible {
            frame.lines.push(LinePrimitive::new(
                plot.left,
                y,
                plot.right(),
                y,
                1.0,
                value_axis.grid_color,
            ));
        }
        if value_axis.labels_visible {
            frame.texts.push(TextPrimitive::new(
                tick.label.clone(),
                plot.left - 6.0,
                y + AXIS_FONT_SIZE_PX * 0.35,
                AXIS_FONT_SIZE_PX,
                value_axis.label_color,
                TextHAlign::Right,
            ));
        }
    }

    frame.lines.push(LinePrimitive::new(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        1.0,
        AXIS_LINE_COLOR,
    ));

    if category_axis.labels_visible {
        for (index, label) in axes.categories.labels().iter().enumerate() {
            frame.texts.push(TextPrimitive::new(
                label.clone(),
                axes.categories.band_center(index)?,
                plot.bottom() + 16.0,
                AXIS_FONT_SIZE_PX,
                category_axis.label_color,
                TextHAlign::Center,
            ));
        }
    }

    Ok(frame)
}

fn tooltip_text(template: Option<&TooltipTemplate>, sample: &CategoryValue) -> Option<String> {
    template.map(|template| template.render(&sample.category, &format_sample_value(sample.value)))
}

fn format_sample_value(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format_axis_value(value, 1.0)
    } else {
        format_axis_value(value, 0.01)
    }
}

fn build_column_frame(
    config: &ColumnChartConfig,
    viewport: Viewport,
    plot: PlotArea,
) -> DashboardResult<RenderFrame> {
    let axes = resolve_axes(&config.data, config.value_axis, plot, true)?;
    let mut frame = push_axes(
        RenderFrame::new(viewport),
        &axes,
        config.category_axis,
        config.value_axis,
        plot,
    )?;

    let (min, max) = axes.values.domain();
    let baseline = 0.0_f64.clamp(min, max);
    let columns = project_columns(
        &config.data,
        &axes.categories,
        axes.values,
        config.band_fill_ratio,
        baseline,
    )?;
    for (column, sample) in columns.iter().zip(&config.data) {
        frame.rects.push(
            RectPrimitive::new(
                column.x_left,
                column.y_top,
                column.width(),
                column.height(),
                config.color,
            )
            .with_corner_radius(config.corner_radius_px)
            .with_tooltip(tooltip_text(config.tooltip.as_ref(), sample)),
        );
    }
    Ok(frame)
}

fn build_line_frame(
    config: &LineChartConfig,
    viewport: Viewport,
    plot: PlotArea,
) -> DashboardResult<RenderFrame> {
    let axes = resolve_axes(&config.data, config.value_axis, plot, false)?;
    let mut frame = push_axes(
        RenderFrame::new(viewport),
        &axes,
        config.category_axis,
        config.value_axis,
        plot,
    )?;

    let segments =
        project_smoothed_line(&config.data, &axes.categories, axes.values, config.tension)?;
    if let Some(first) = segments.first() {
        frame.curves.push(CurvePathPrimitive {
            start: first.start,
            segments: segments
                .iter()
                .map(|segment| (segment.control1, segment.control2, segment.end))
                .collect(),
            stroke_width: config.stroke_width_px,
            color: config.stroke_color,
        });
    }

    // Hover targets: one transparent band per category.
    if config.tooltip.is_some() {
        let band = axes.categories.band_width();
        for (index, sample) in config.data.iter().enumerate() {
            let center = axes.categories.band_center(index)?;
            frame.rects.push(
                RectPrimitive::new(
                    center - band * 0.5,
                    plot.top,
                    band,
                    plot.height,
                    Color::rgba(0.0, 0.0, 0.0, 0.0),
                )
                .with_tooltip(tooltip_text(config.tooltip.as_ref(), sample)),
            );
        }
    }
    Ok(frame)
}

fn build_pie_frame(
    config: &PieChartConfig,
    viewport: Viewport,
    plot: PlotArea,
) -> DashboardResult<RenderFrame> {
    let samples: Vec<CategoryValue> = config
        .slices
        .iter()
        .map(|slice| CategoryValue::new(slice.category.clone(), slice.value))
        .collect();
    let radius = plot.width.min(plot.height) * 0.5 * config.radius_ratio;
    let wedges = project_pie(&samples, plot.center(), radius)?;

    let mut frame = RenderFrame::new(viewport);
    for (wedge, slice) in wedges.iter().zip(&config.slices) {
        let tooltip = config
            .tooltips_visible
            .then(|| format!("{}: {:.1}%", wedge.category, wedge.share * 100.0));
        frame.wedges.push(WedgePrimitive {
            center_x: wedge.center.0,
            center_y: wedge.center.1,
            radius: wedge.radius,
            start_angle: wedge.start_angle,
            end_angle: wedge.end_angle,
            fill_color: slice.color,
            tooltip,
        });

        let mid = (wedge.start_angle + wedge.end_angle) * 0.5;
        if config.ticks_visible {
            let inner = wedge.rim_point(mid);
            let (cos, sin) = (mid.cos(), mid.sin());
            frame.lines.push(LinePrimitive::new(
                inner.0,
                inner.1,
                wedge.center.0 + radius * 1.1 * cos,
                wedge.center.1 + radius * 1.1 * sin,
                1.0,
                slice.color,
            ));
        }
        if config.labels_visible {
            let (cos, sin) = (mid.cos(), mid.sin());
            frame.texts.push(TextPrimitive::new(
                format!("{} {:.1}%", wedge.category, wedge.share * 100.0),
                wedge.center.0 + radius * 1.15 * cos,
                wedge.center.1 + radius * 1.15 * sin,
                AXIS_FONT_SIZE_PX,
                PIE_LABEL_COLOR,
                if cos >= 0.0 {
                    TextHAlign::Left
                } else {
                    TextHAlign::Right
                },
            ));
        }
    }
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::format_sample_value;

    #[test]
    fn sample_values_keep_cents_only_when_needed() {
        assert_eq!(format_sample_value(4200.0), "4,200");
        assert_eq!(format_sample_value(4200.5), "4,200.50");
    }
}
