//! Reduces the 3-hourly forecast series to one entry per calendar day.

use chrono::{Datelike, NaiveDate, TimeZone, Timelike};
use serde::Serialize;
use std::collections::HashSet;

use crate::{
    condition::{ConditionCategory, classify},
    format::{icon_glyph, local_time, round_half_up},
    model::WeatherSample,
    weekly::weekday_label,
};

/// Default number of days shown in the forecast strip.
pub const DEFAULT_MAX_DAYS: usize = 5;

/// Local hours (inclusive) whose readings represent a whole day.
pub(crate) const NOON_WINDOW: std::ops::RangeInclusive<u32> = 11..=13;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub category: ConditionCategory,
    pub icon: &'static str,
    pub temperature_c: i64,
}

/// Picks the first noon-window sample of each local calendar day.
///
/// `samples` must be in chronological order. A day without any sample in
/// the noon window produces no entry. At most `max_days` entries are
/// returned.
pub fn reduce_to_daily_entries<Tz: TimeZone>(
    samples: &[WeatherSample],
    tz: &Tz,
    max_days: usize,
) -> Vec<DailyForecastEntry> {
    let mut seen = HashSet::new();
    let mut daily = Vec::new();

    for sample in samples {
        if daily.len() >= max_days {
            break;
        }

        let Some(local) = local_time(sample.timestamp, tz) else {
            continue;
        };
        let day = local.date_naive();

        if seen.contains(&day) || !NOON_WINDOW.contains(&local.hour()) {
            continue;
        }
        seen.insert(day);

        daily.push(DailyForecastEntry {
            date: day,
            weekday: weekday_label(local.weekday()),
            category: classify(sample.condition_code),
            icon: icon_glyph(&sample.icon),
            temperature_c: round_half_up(sample.temperature_c),
        });
    }

    daily
}
