use std::f64::consts::{FRAC_PI_2, TAU};

use approx::assert_relative_eq;
use proptest::prelude::*;

use dashboard_rs::charts::{ChartConfig, build_chart_frame};
use dashboard_rs::core::{CategoryValue, Viewport, project_pie};
use dashboard_rs::dashboard::{ChartSlot, dashboard_chart_slots};
use dashboard_rs::render::Color;

const VIEWPORT: Viewport = Viewport {
    width: 480,
    height: 300,
};

fn slot(name: &str) -> ChartSlot {
    dashboard_chart_slots()
        .expect("slots")
        .into_iter()
        .find(|slot| slot.name == name)
        .expect("slot exists")
}

#[test]
fn slots_are_built_in_declared_order() {
    let names: Vec<&str> = dashboard_chart_slots()
        .expect("slots")
        .iter()
        .map(|slot| slot.name)
        .collect();
    assert_eq!(names, ["revenue", "genre", "activity", "subscription"]);
}

#[test]
fn revenue_columns_fill_eighty_percent_of_each_band() {
    let frame = build_chart_frame(&slot("revenue").config, VIEWPORT).expect("frame");
    assert_eq!(frame.rects.len(), 12);

    let band = 416.0 / 12.0;
    for (index, rect) in frame.rects.iter().enumerate() {
        assert_relative_eq!(rect.width, band * 0.8, epsilon = 1e-9);
        let center = 52.0 + band * (index as f64 + 0.5);
        assert_relative_eq!(rect.x + rect.width * 0.5, center, epsilon = 1e-9);
        assert_relative_eq!(rect.y + rect.height, 272.0, epsilon = 1e-9);
    }
    assert_eq!(frame.rects[0].tooltip.as_deref(), Some("Jan: 50"));
    assert_eq!(frame.rects[11].tooltip.as_deref(), Some("Dec: 120"));
    assert_eq!(frame.tooltip_count(), 12);
}

#[test]
fn taller_revenue_means_taller_column() {
    let frame = build_chart_frame(&slot("revenue").config, VIEWPORT).expect("frame");
    // Jan and June (50) are the lowest months, May, Oct and Dec (120) the highest.
    assert!(frame.rects[0].height > 0.0);
    assert_relative_eq!(frame.rects[0].height, frame.rects[5].height);
    assert!(frame.rects[0].height < frame.rects[1].height);
    let tallest = frame
        .rects
        .iter()
        .map(|rect| rect.height)
        .fold(f64::MIN, f64::max);
    for month in [4, 9, 11] {
        assert_relative_eq!(frame.rects[month].height, tallest);
    }
    // The axis spans 0..120, so the tallest column fills the plot.
    assert_relative_eq!(tallest, 260.0, epsilon = 1e-9);
}

#[test]
fn genre_pie_renders_wedges_only() {
    let frame = build_chart_frame(&slot("genre").config, VIEWPORT).expect("frame");
    assert_eq!(frame.wedges.len(), 5);
    assert!(frame.lines.is_empty());
    assert!(frame.texts.is_empty());
    assert_eq!(frame.tooltip_count(), 0);

    let first = &frame.wedges[0];
    assert_relative_eq!(first.start_angle, -FRAC_PI_2);
    assert_relative_eq!(first.end_angle - first.start_angle, 70.0 / 150.0 * TAU, epsilon = 1e-9);
    assert_relative_eq!(first.radius, 113.6, epsilon = 1e-9);
    assert_relative_eq!(first.center_x, 240.0);
    assert_relative_eq!(first.center_y, 150.0);

    let swept: f64 = frame
        .wedges
        .iter()
        .map(|wedge| wedge.end_angle - wedge.start_angle)
        .sum();
    assert_relative_eq!(swept, TAU, epsilon = 1e-9);
}

#[test]
fn activity_line_is_one_smoothed_curve_without_grid() {
    let frame = build_chart_frame(&slot("activity").config, VIEWPORT).expect("frame");
    assert_eq!(frame.curves.len(), 1);
    let curve = &frame.curves[0];
    assert_eq!(curve.segments.len(), 12);
    assert_relative_eq!(curve.stroke_width, 3.0);
    assert_eq!(curve.color, Color::from_hex("#00A2FF").expect("hex"));

    // Grid hidden: only the baseline remains.
    assert_eq!(frame.lines.len(), 1);
    assert_eq!(frame.rects.len(), 13);
    assert_eq!(frame.tooltip_count(), 13);
    assert!(
        frame
            .rects
            .iter()
            .all(|rect| rect.fill_color.alpha == 0.0)
    );

    // Each segment ends where the next begins.
    let mut cursor = curve.start;
    for (_, _, end) in &curve.segments {
        assert!(end.0 > cursor.0);
        cursor = *end;
    }
}

#[test]
fn activity_tension_bends_control_points_by_a_tenth_of_the_neighbour_span() {
    let frame = build_chart_frame(&slot("activity").config, VIEWPORT).expect("frame");
    let curve = &frame.curves[0];
    let p0 = curve.start;
    let p1 = curve.segments[0].2;
    let p2 = curve.segments[1].2;

    // Tension 0.8 scales the Catmull-Rom tangent by (1 - 0.8) / 2.
    let control1 = curve.segments[1].0;
    assert_relative_eq!(control1.0, p1.0 + (p2.0 - p0.0) * 0.1, epsilon = 1e-9);
    assert_relative_eq!(control1.1, p1.1 + (p2.1 - p0.1) * 0.1, epsilon = 1e-9);

    // The audience changes between samples, so the curve really bends.
    assert!((control1.1 - p1.1).abs() > 1e-6);
}

#[test]
fn full_tension_draws_straight_segments() {
    let ChartConfig::Line(mut line) = slot("activity").config else {
        panic!("activity is a line chart");
    };
    line.tension = 1.0;
    let frame = build_chart_frame(&ChartConfig::Line(line), VIEWPORT).expect("frame");
    let curve = &frame.curves[0];

    let mut start = curve.start;
    for (control1, control2, end) in &curve.segments {
        assert_relative_eq!(control1.0, start.0);
        assert_relative_eq!(control1.1, start.1);
        assert_relative_eq!(control2.0, end.0);
        assert_relative_eq!(control2.1, end.1);
        start = *end;
    }
}

#[test]
fn subscription_axis_starts_at_zero_with_wide_grid() {
    let frame = build_chart_frame(&slot("subscription").config, VIEWPORT).expect("frame");
    assert_eq!(frame.rects.len(), 5);

    // 6 grid lines (0..=25,000 step 5,000) plus the baseline.
    assert_eq!(frame.lines.len(), 7);
    let mut grid_ys: Vec<f64> = frame.lines[..6].iter().map(|line| line.y1).collect();
    grid_ys.sort_by(f64::total_cmp);
    for pair in grid_ys.windows(2) {
        assert!(pair[1] - pair[0] >= 50.0);
    }

    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert!(labels.contains(&"0"));
    assert!(labels.contains(&"25,000"));
    assert!(labels.contains(&"ULO MAX"));
    assert_eq!(frame.texts.len(), 6 + 5);
}

#[test]
fn empty_or_duplicate_data_is_rejected() {
    let ChartConfig::Column(mut column) = slot("revenue").config else {
        panic!("revenue is a column chart");
    };
    column.data.clear();
    assert!(build_chart_frame(&ChartConfig::Column(column.clone()), VIEWPORT).is_err());

    column.data = vec![CategoryValue::new("Jan", 1.0), CategoryValue::new("Jan", 2.0)];
    assert!(build_chart_frame(&ChartConfig::Column(column), VIEWPORT).is_err());
}

#[test]
fn zero_viewport_is_rejected() {
    let config = slot("genre").config;
    assert!(build_chart_frame(&config, Viewport::new(0, 300)).is_err());
}

proptest! {
    #[test]
    fn pie_sweeps_always_close_the_circle(values in prop::collection::vec(0.01f64..1_000.0, 1..12)) {
        let samples: Vec<CategoryValue> = values
            .iter()
            .enumerate()
            .map(|(index, value)| CategoryValue::new(format!("s{index}"), *value))
            .collect();
        let wedges = project_pie(&samples, (100.0, 100.0), 50.0).expect("pie");
        prop_assert_eq!(wedges.len(), samples.len());

        let swept: f64 = wedges.iter().map(|wedge| wedge.sweep()).sum();
        prop_assert!((swept - TAU).abs() < 1e-9);
        for pair in wedges.windows(2) {
            prop_assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-12);
        }
        let shares: f64 = wedges.iter().map(|wedge| wedge.share).sum();
        prop_assert!((shares - 1.0).abs() < 1e-9);
    }
}
