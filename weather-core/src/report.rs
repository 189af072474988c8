//! Assembles everything a front end needs to draw one search result.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::Serialize;

use crate::{
    chart::{ChartGeometry, project},
    condition::{ConditionCategory, classify, estimate_uv, is_night},
    config::ZoneSetting,
    effects::{Effect, effects_for},
    error::WeatherError,
    forecast::{DEFAULT_MAX_DAYS, DailyForecastEntry, reduce_to_daily_entries},
    format::{clock, day_label, local_time, mps_to_kmh, round_half_up},
    model::{CurrentWeather, Forecast},
    weekly::{WeeklyTemperaturePoint, build_weekly_series, temperatures},
};

/// Highest value on the UV gauge.
const UV_SCALE_MAX: f64 = 11.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub location: String,
    pub headline: String,
    pub description: String,
    pub category: ConditionCategory,
    pub is_night: bool,
    pub temperature_c: i64,
    pub temp_min_c: i64,
    pub temp_max_c: i64,
    pub wind_kmh: i64,
    pub humidity_pct: u8,
    pub uv_index: i32,
    /// Fill of the UV gauge, 0.0..=1.0.
    pub uv_fraction: f64,
    pub sunrise: String,
    pub sunset: String,
    pub local_date: String,
    pub local_time: String,
    pub daily: Vec<DailyForecastEntry>,
    pub weekly: Vec<WeeklyTemperaturePoint>,
    pub chart: ChartGeometry,
    pub effects: Vec<Effect>,
}

impl WeatherReport {
    /// Resolves the zone setting, then builds the report.
    pub fn build_in_zone(
        current: &CurrentWeather,
        forecast: &Forecast,
        zone: &ZoneSetting,
        now: DateTime<Utc>,
    ) -> Result<Self, WeatherError> {
        match zone {
            ZoneSetting::Named(tz) => Self::build(current, forecast, tz, now),
            ZoneSetting::CityOffset => {
                let offset = FixedOffset::east_opt(forecast.utc_offset_secs).ok_or_else(|| {
                    WeatherError::MalformedResponse(format!(
                        "invalid UTC offset {}",
                        forecast.utc_offset_secs
                    ))
                })?;
                Self::build(current, forecast, &offset, now)
            }
        }
    }

    pub fn build<Tz>(
        current: &CurrentWeather,
        forecast: &Forecast,
        tz: &Tz,
        now: DateTime<Utc>,
    ) -> Result<Self, WeatherError>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let sample = &current.sample;
        let category = classify(sample.condition_code);
        let night = is_night(&sample.icon);
        let uv_index = estimate_uv(sample.condition_code, u32::from(sample.cloud_pct));

        let local_now = now.with_timezone(tz);
        let weekly = build_weekly_series(&forecast.samples, tz, local_now.date_naive())?;
        let chart = project(&temperatures(&weekly));

        Ok(Self {
            location: current.location_name.clone(),
            headline: current.headline.clone(),
            description: current.description.clone(),
            category,
            is_night: night,
            temperature_c: round_half_up(sample.temperature_c),
            temp_min_c: round_half_up(current.temp_min_c),
            temp_max_c: round_half_up(current.temp_max_c),
            wind_kmh: mps_to_kmh(sample.wind_speed_mps),
            humidity_pct: sample.humidity_pct,
            uv_index,
            uv_fraction: (f64::from(uv_index) / UV_SCALE_MAX).clamp(0.0, 1.0),
            sunrise: format_epoch(current.sunrise, tz)?,
            sunset: format_epoch(current.sunset, tz)?,
            local_date: day_label(&local_now),
            local_time: clock(&local_now),
            daily: reduce_to_daily_entries(&forecast.samples, tz, DEFAULT_MAX_DAYS),
            weekly,
            chart,
            effects: effects_for(category, night),
        })
    }

    /// One-paragraph summary, e.g. for a status line.
    pub fn summary(&self) -> String {
        format!(
            "Current weather in {}. {}. Wind speed {} km/h. Humidity {}%.",
            self.location, self.description, self.wind_kmh, self.humidity_pct
        )
    }
}

fn format_epoch<Tz>(timestamp: i64, tz: &Tz) -> Result<String, WeatherError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    local_time(timestamp, tz)
        .map(|dt| clock(&dt))
        .ok_or_else(|| WeatherError::MalformedResponse(format!("timestamp {timestamp} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{current_weather, forecast_week, utc_ts};

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(utc_ts(2026, 10, 19, 9), 0).unwrap()
    }

    #[test]
    fn clear_day_report() {
        let current = current_weather(800, "01d", 0, 25.0);
        let report = WeatherReport::build(&current, &forecast_week(), &Utc, now()).unwrap();

        assert_eq!(report.category, ConditionCategory::Clear);
        assert!(!report.is_night);
        assert_eq!(report.uv_index, 8);
        assert_eq!(report.temperature_c.to_string(), "25");
        assert_eq!(report.effects, vec![Effect::Sun { partial: false }]);
    }

    #[test]
    fn rainy_night_report() {
        let current = current_weather(501, "10n", 90, 12.4);
        let report = WeatherReport::build(&current, &forecast_week(), &Utc, now()).unwrap();

        assert_eq!(report.category, ConditionCategory::Rain);
        assert!(report.is_night);
        assert_eq!(report.temperature_c, 12);
        assert_eq!(report.effects, vec![Effect::Rain]);
    }

    #[test]
    fn report_carries_forecast_projections() {
        let current = current_weather(803, "04d", 75, 18.0);
        let report = WeatherReport::build(&current, &forecast_week(), &Utc, now()).unwrap();

        assert_eq!(report.daily.len(), 5);
        assert_eq!(report.weekly.len(), 7);
        assert_eq!(report.weekly[0].weekday, "Mon");
        assert_eq!(report.chart.points.len(), 7);
        assert_eq!(report.local_date, "Oct 19");
        assert_eq!(report.local_time, "09:00");
        assert_eq!(report.sunrise, "06:15");
        assert_eq!(report.sunset, "17:45");
        assert_eq!(report.wind_kmh, 13);
        assert!(report.summary().starts_with("Current weather in Bengaluru."));
    }

    #[test]
    fn city_offset_zone_shifts_clock() {
        let current = current_weather(800, "01d", 0, 25.0);
        let mut forecast = forecast_week();
        forecast.utc_offset_secs = 19_800;

        let report =
            WeatherReport::build_in_zone(&current, &forecast, &ZoneSetting::CityOffset, now())
                .unwrap();

        assert_eq!(report.local_time, "14:30");
        assert_eq!(report.sunrise, "11:45");
    }

    #[test]
    fn empty_forecast_fails_the_report() {
        let current = current_weather(800, "01d", 0, 25.0);
        let mut forecast = forecast_week();
        forecast.samples.clear();

        let err = WeatherReport::build(&current, &forecast, &Utc, now()).unwrap_err();
        assert!(matches!(err, WeatherError::DegenerateInput(_)));
    }
}
