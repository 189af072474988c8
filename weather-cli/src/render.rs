//! Text and SVG output for a report.

use weather_core::{
    WeatherReport,
    chart::{CANVAS_HEIGHT, CANVAS_PADDING, CANVAS_WIDTH},
    format::round_half_up,
};

pub const LINE_WIDTH: usize = 48;

const UV_BAR_WIDTH: usize = 22;

pub fn report_text(report: &WeatherReport) -> String {
    let rule = "─".repeat(LINE_WIDTH);
    let night = if report.is_night { "  (night)" } else { "" };

    let mut lines = vec![
        format!("{}  ·  {} {}", report.location, report.local_date, report.local_time),
        rule.clone(),
        format!(
            "{}°  {} with {}{night}",
            report.temperature_c, report.headline, report.description
        ),
        format!(
            "Low {}°  ·  Now {}°  ·  High {}°",
            report.temp_min_c, report.temperature_c, report.temp_max_c
        ),
        format!("Wind {} km/h  ·  Humidity {}%", report.wind_kmh, report.humidity_pct),
        format!(
            "UV {:>2} {}",
            report.uv_index,
            gauge(report.uv_fraction, UV_BAR_WIDTH)
        ),
        format!("Sunrise {}  ·  Sunset {}", report.sunrise, report.sunset),
    ];

    if !report.daily.is_empty() {
        lines.push(rule.clone());
        lines.extend(
            report
                .daily
                .iter()
                .map(|day| format!("{:<4} {}  {:>3}°", day.weekday, day.icon, day.temperature_c)),
        );
    }

    lines.push(rule);
    lines.push(
        report
            .weekly
            .iter()
            .map(|p| {
                if p.is_today {
                    format!("[{}]", p.weekday)
                } else {
                    format!(" {} ", p.weekday)
                }
            })
            .collect(),
    );
    lines.push(
        report
            .weekly
            .iter()
            .map(|p| format!("{:^5}", round_half_up(p.temperature_c)))
            .collect(),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn gauge(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Standalone SVG with the weekly line, its filled area, one marker per day
/// and the weekday labels underneath.
pub fn chart_svg(report: &WeatherReport) -> String {
    let chart = &report.chart;
    let label_y = CANVAS_HEIGHT + 20.0;

    let mut lines = vec![
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {CANVAS_WIDTH} {}">"#,
            CANVAS_HEIGHT + 30.0
        ),
        r#"  <defs>
    <linearGradient id="gradient" x1="0%" y1="0%" x2="0%" y2="100%">
      <stop offset="0%" style="stop-color:white;stop-opacity:0.5" />
      <stop offset="100%" style="stop-color:white;stop-opacity:0" />
    </linearGradient>
  </defs>"#
            .to_string(),
        format!(
            r#"  <polyline class="chart-line" fill="none" stroke="white" points="{}"/>"#,
            chart.polyline_points()
        ),
        format!(
            r#"  <polygon class="chart-area" fill="url(#gradient)" points="{}"/>"#,
            chart.area_polygon_points()
        ),
    ];

    lines.extend(chart.points.iter().map(|point| {
        format!(
            r#"  <circle class="chart-point" cx="{}" cy="{}" r="6"/>"#,
            point.x, point.y
        )
    }));
    lines.extend(chart.points.iter().zip(&report.weekly).map(|(point, day)| {
        let class = if day.is_today {
            "chart-label current-day"
        } else {
            "chart-label"
        };
        format!(
            r#"  <text class="{class}" x="{}" y="{label_y}" text-anchor="middle">{}</text>"#,
            point.x, day.weekday
        )
    }));
    lines.push(format!(
        r#"  <text x="{CANVAS_PADDING}" y="15">{}° .. {}°</text>"#,
        round_half_up(chart.min_temp),
        round_half_up(chart.max_temp)
    ));
    lines.push("</svg>".to_string());

    let mut svg = lines.join("\n");
    svg.push('\n');
    svg
}
