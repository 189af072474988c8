//! Projects forecast temperatures onto a 7-day window starting today.

use chrono::{Datelike, NaiveDate, TimeZone, Timelike, Weekday};
use serde::Serialize;

use crate::{
    error::WeatherError, forecast::NOON_WINDOW, format::local_time, format::round_half_up,
    model::WeatherSample,
};

pub const DAYS_IN_WEEK: usize = 7;

const WEEKDAY_LABELS: [&str; DAYS_IN_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTemperaturePoint {
    pub weekday: &'static str,
    pub is_today: bool,
    pub temperature_c: f64,
}

pub fn weekday_label(day: Weekday) -> &'static str {
    WEEKDAY_LABELS[day.num_days_from_sunday() as usize]
}

/// Builds the 7-point series `today, today+1, .., today+6`.
///
/// Each weekday takes the first sample seen for it, replaced by any later
/// noon-window sample. Weekdays the forecast does not reach get the mean of
/// every known weekday, rounded. Fails with `DegenerateInput` when no sample
/// maps to any weekday.
pub fn build_weekly_series<Tz: TimeZone>(
    samples: &[WeatherSample],
    tz: &Tz,
    today: NaiveDate,
) -> Result<Vec<WeeklyTemperaturePoint>, WeatherError> {
    let by_weekday = temperatures_by_weekday(samples, tz);

    let known: Vec<f64> = by_weekday.iter().flatten().copied().collect();
    if known.is_empty() {
        return Err(WeatherError::DegenerateInput(
            "forecast contained no temperature samples".to_string(),
        ));
    }
    let fallback = round_half_up(known.iter().sum::<f64>() / known.len() as f64) as f64;

    let start = today.weekday().num_days_from_sunday() as usize;
    let series = (0..DAYS_IN_WEEK)
        .map(|offset| {
            let idx = (start + offset) % DAYS_IN_WEEK;
            WeeklyTemperaturePoint {
                weekday: WEEKDAY_LABELS[idx],
                is_today: offset == 0,
                temperature_c: by_weekday[idx].unwrap_or(fallback),
            }
        })
        .collect();

    Ok(series)
}

/// Temperatures indexed by days from Sunday.
fn temperatures_by_weekday<Tz: TimeZone>(
    samples: &[WeatherSample],
    tz: &Tz,
) -> [Option<f64>; DAYS_IN_WEEK] {
    let mut by_weekday = [None; DAYS_IN_WEEK];

    for sample in samples {
        let Some(local) = local_time(sample.timestamp, tz) else {
            continue;
        };
        let slot = &mut by_weekday[local.weekday().num_days_from_sunday() as usize];

        if slot.is_none() || NOON_WINDOW.contains(&local.hour()) {
            *slot = Some(sample.temperature_c);
        }
    }

    by_weekday
}

/// Plain temperature values, ready for the chart.
pub fn temperatures(series: &[WeeklyTemperaturePoint]) -> Vec<f64> {
    series.iter().map(|p| p.temperature_c).collect()
}
