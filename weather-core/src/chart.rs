//! Plot coordinates for the weekly temperature line.

use serde::Serialize;

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 100.0;
pub const CANVAS_PADDING: f64 = 50.0;

/// Headroom added above the maximum and below the minimum temperature.
const TEMP_MARGIN: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub points: Vec<ChartPoint>,
    pub min_temp: f64,
    pub max_temp: f64,
}

impl ChartGeometry {
    pub fn range(&self) -> f64 {
        self.max_temp - self.min_temp
    }

    /// `"x,y x,y .."` for a polyline.
    pub fn polyline_points(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The line closed along the canvas floor, for a filled area.
    pub fn area_polygon_points(&self) -> String {
        format!(
            "{} {},{} {},{}",
            self.polyline_points(),
            CANVAS_WIDTH - CANVAS_PADDING,
            CANVAS_HEIGHT,
            CANVAS_PADDING,
            CANVAS_HEIGHT
        )
    }
}

/// Maps a temperature series onto the fixed canvas.
///
/// The ±5° margin keeps the value range at 10 or more, so a flat series is
/// drawn across the vertical middle.
pub fn project(series: &[f64]) -> ChartGeometry {
    let max_temp = series.iter().copied().fold(f64::NEG_INFINITY, f64::max) + TEMP_MARGIN;
    let min_temp = series.iter().copied().fold(f64::INFINITY, f64::min) - TEMP_MARGIN;
    let range = max_temp - min_temp;

    let plot_width = CANVAS_WIDTH - CANVAS_PADDING * 2.0;
    let plot_height = CANVAS_HEIGHT - CANVAS_PADDING * 2.0;
    let last = series.len().saturating_sub(1).max(1) as f64;

    let points = series
        .iter()
        .enumerate()
        .map(|(i, &temp)| ChartPoint {
            x: (i as f64 / last) * plot_width + CANVAS_PADDING,
            y: CANVAS_HEIGHT - ((temp - min_temp) / range) * plot_height - CANVAS_PADDING,
        })
        .collect();

    ChartGeometry {
        points,
        min_temp,
        max_temp,
    }
}
