// Inline SVG line chart for the dashboard page
use super::page::{escape, format_time};
use crate::domain::telemetry::SeriesData;
use chrono::TimeZone;
use std::fmt::{Display, Write};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 320.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 56.0;
const MAX_X_LABELS: usize = 6;

/// Render `series` as a straight-segment line chart. Points are spaced
/// evenly along x, one slot per reading, labelled with their timestamp.
pub fn render_line_chart<Tz>(series: &SeriesData, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some((lo, hi)) = series.value_range() else {
        return String::new();
    };
    let (lo, hi) = if lo == hi { (lo - 1.0, hi + 1.0) } else { (lo, hi) };

    let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let n = series.points.len();

    let x = |i: usize| {
        if n == 1 {
            PAD_LEFT + plot_w / 2.0
        } else {
            PAD_LEFT + plot_w * i as f64 / (n - 1) as f64
        }
    };
    let y = |v: f64| PAD_TOP + plot_h * (hi - v) / (hi - lo);

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="{}">"#,
        escape(&series.name)
    );

    // y axis: bottom, middle and top of the value range
    for v in [lo, (lo + hi) / 2.0, hi] {
        let _ = write!(
            svg,
            r##"<line x1="{PAD_LEFT}" y1="{y:.1}" x2="{x2}" y2="{y:.1}" stroke="#e0e0e0"/><text x="{tx}" y="{ty:.1}" text-anchor="end" font-size="11">{v:.1}</text>"##,
            y = y(v),
            x2 = WIDTH - PAD_RIGHT,
            tx = PAD_LEFT - 6.0,
            ty = y(v) + 4.0,
        );
    }

    // x axis labels, thinned out for long series
    let step = n.div_ceil(MAX_X_LABELS).max(1);
    for (i, point) in series.points.iter().enumerate().step_by(step) {
        let _ = write!(
            svg,
            r#"<text x="{x:.1}" y="{ly}" text-anchor="middle" font-size="10">{label}</text>"#,
            x = x(i),
            ly = HEIGHT - PAD_BOTTOM + 18.0,
            label = escape(&format_time(&point.time, tz)),
        );
    }

    let points: Vec<String> = series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", x(i), y(p.value)))
        .collect();

    let _ = write!(
        svg,
        r#"<polyline fill="none" stroke="{color}" stroke-width="2" points="{points}"/>"#,
        color = escape(&series.color),
        points = points.join(" "),
    );
    for (i, p) in series.points.iter().enumerate() {
        let _ = write!(
            svg,
            r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="{}"><title>{}: {}</title></circle>"#,
            x(i),
            y(p.value),
            escape(&series.color),
            escape(&format_time(&p.time, tz)),
            p.value
        );
    }

    // legend
    let _ = write!(
        svg,
        r#"<g class="legend"><rect x="{rx}" y="{ry}" width="12" height="12" fill="{color}"/><text x="{tx}" y="{ty}" font-size="12">{name}</text></g>"#,
        rx = WIDTH - PAD_RIGHT - 96.0,
        ry = HEIGHT - 20.0,
        tx = WIDTH - PAD_RIGHT - 78.0,
        ty = HEIGHT - 10.0,
        color = escape(&series.color),
        name = escape(&series.name),
    );

    svg.push_str("</svg>");
    svg
}
