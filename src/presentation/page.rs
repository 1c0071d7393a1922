// Server-rendered dashboard page
use super::chart::render_line_chart;
use crate::domain::dashboard::{Dashboard, DashboardView};
use crate::domain::reading::WINDOW_DAYS;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;color:#222}\
.dashboard{max-width:840px;margin:auto}\
.chart-container{margin-top:1.5rem}\
.chart{width:100%;height:auto}\
.error{color:#c62828}";

pub fn format_time<Tz>(time: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(tz).format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a settled dashboard load, with timestamps shown in `tz`
pub fn render_page<Tz>(view: &DashboardView, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let body = match view {
        DashboardView::Error { message } => {
            format!(r#"<p class="error">Error: {}</p>"#, escape(message))
        }
        DashboardView::Ready(dashboard) => render_dashboard(dashboard, tz),
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Humidity Dashboard</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n{body}\n</body>\n</html>\n"
    )
}

fn render_dashboard<Tz>(dashboard: &Dashboard, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut html = format!(
        "<div class=\"dashboard\">\n<h1>{}</h1>\n",
        escape(&dashboard.title)
    );

    match &dashboard.summary {
        None => {
            html.push_str(&format!(
                "<p>No humidity readings in the last {} days.</p>\n",
                WINDOW_DAYS
            ));
        }
        Some(summary) => {
            html.push_str(&format!(
                "<p>Highest Humidity: {}% on {}</p>\n",
                summary.highest.value,
                format_time(&summary.highest.time, tz)
            ));
            html.push_str(&format!(
                "<p>Lowest Humidity: {}% on {}</p>\n",
                summary.lowest.value,
                format_time(&summary.lowest.time, tz)
            ));
            html.push_str(&format!("<p>Mean Humidity: {:.2}%</p>\n", summary.mean));
            html.push_str(&format!(
                "<div class=\"chart-container\">{}</div>\n",
                render_line_chart(&dashboard.series, tz)
            ));
        }
    }

    html.push_str("</div>");
    html
}
