use std::f64::consts::{PI, TAU};

use maud::{Markup, html};

use crate::error::DashboardResult;
use crate::render::{RenderFrame, Renderer, TextHAlign, WedgePrimitive};

/// Renderer that turns frames into inline SVG markup.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_svg: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn last_svg(&self) -> Option<&str> {
        self.last_svg.as_deref()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> DashboardResult<()> {
        frame.validate()?;
        self.last_svg = Some(frame_to_svg(frame).into_string());
        Ok(())
    }
}

/// Builds SVG markup for a frame. Tooltips become `<title>` children.
#[must_use]
pub fn frame_to_svg(frame: &RenderFrame) -> Markup {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width=(width) height=(height)
            viewBox=(format!("0 0 {width} {height}")) {
            @for line in &frame.lines {
                line x1=(px(line.x1)) y1=(px(line.y1)) x2=(px(line.x2)) y2=(px(line.y2))
                    stroke=(line.color.to_hex()) stroke-opacity=(px(line.color.alpha))
                    stroke-width=(px(line.stroke_width)) {}
            }
            @for rect in &frame.rects {
                rect x=(px(rect.x)) y=(px(rect.y)) width=(px(rect.width)) height=(px(rect.height))
                    rx=(px(rect.corner_radius)) fill=(rect.fill_color.to_hex())
                    fill-opacity=(px(rect.fill_color.alpha)) {
                    @if let Some(tooltip) = &rect.tooltip {
                        title { (tooltip) }
                    }
                }
            }
            @for wedge in &frame.wedges {
                path d=(wedge_path(wedge)) fill=(wedge.fill_color.to_hex())
                    fill-opacity=(px(wedge.fill_color.alpha)) {
                    @if let Some(tooltip) = &wedge.tooltip {
                        title { (tooltip) }
                    }
                }
            }
            @for curve in &frame.curves {
                path d=(curve_path(curve.start, &curve.segments)) fill="none"
                    stroke=(curve.color.to_hex()) stroke-width=(px(curve.stroke_width))
                    stroke-linecap="round" stroke-linejoin="round" {}
            }
            @for text in &frame.texts {
                text x=(px(text.x)) y=(px(text.y)) font-size=(px(text.font_size_px))
                    fill=(text.color.to_hex()) text-anchor=(anchor(text.h_align)) {
                    (text.text)
                }
            }
        }
    }
}

fn px(value: f64) -> String {
    let rendered = format!("{value:.2}");
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

fn anchor(align: TextHAlign) -> &'static str {
    match align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    }
}

fn wedge_path(wedge: &WedgePrimitive) -> String {
    let (cx, cy, r) = (wedge.center_x, wedge.center_y, wedge.radius);
    let sweep = wedge.end_angle - wedge.start_angle;
    if sweep >= TAU - 1e-9 {
        // A single arc cannot close on itself, so a full disc is two halves.
        return format!(
            "M {} {} A {r} {r} 0 1 1 {} {} A {r} {r} 0 1 1 {} {} Z",
            px(cx - r),
            px(cy),
            px(cx + r),
            px(cy),
            px(cx - r),
            px(cy),
            r = px(r)
        );
    }
    let (x1, y1) = (cx + r * wedge.start_angle.cos(), cy + r * wedge.start_angle.sin());
    let (x2, y2) = (cx + r * wedge.end_angle.cos(), cy + r * wedge.end_angle.sin());
    let large_arc = u8::from(sweep > PI);
    format!(
        "M {} {} L {} {} A {r} {r} 0 {large_arc} 1 {} {} Z",
        px(cx),
        px(cy),
        px(x1),
        px(y1),
        px(x2),
        px(y2),
        r = px(r)
    )
}

fn curve_path(start: (f64, f64), segments: &[((f64, f64), (f64, f64), (f64, f64))]) -> String {
    let mut d = format!("M {} {}", px(start.0), px(start.1));
    for (control1, control2, end) in segments {
        d.push_str(&format!(
            " C {} {} {} {} {} {}",
            px(control1.0),
            px(control1.1),
            px(control2.0),
            px(control2.1),
            px(end.0),
            px(end.1)
        ));
    }
    d
}
