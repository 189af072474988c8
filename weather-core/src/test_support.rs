//! Fixtures shared by unit tests.

use chrono::{NaiveDate, NaiveTime};

use crate::model::{CurrentWeather, Forecast, WeatherSample};

/// Epoch seconds for a whole UTC hour.
pub fn utc_ts(year: i32, month: u32, day: u32, hour: u32) -> i64 {
    let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date");
    let time = NaiveTime::from_hms_opt(hour, 0, 0).expect("valid fixture hour");
    date.and_time(time).and_utc().timestamp()
}

pub fn sample_at(timestamp: i64, temperature_c: f64) -> WeatherSample {
    WeatherSample {
        timestamp,
        temperature_c,
        humidity_pct: 60,
        wind_speed_mps: 3.5,
        cloud_pct: 20,
        condition_code: 801,
        icon: "02d".to_string(),
    }
}

pub fn current_weather(code: i32, icon: &str, cloud_pct: u8, temperature_c: f64) -> CurrentWeather {
    CurrentWeather {
        location_name: "Bengaluru".to_string(),
        sample: WeatherSample {
            condition_code: code,
            icon: icon.to_string(),
            cloud_pct,
            ..sample_at(utc_ts(2026, 10, 19, 9), temperature_c)
        },
        temp_min_c: temperature_c - 3.0,
        temp_max_c: temperature_c + 4.0,
        headline: "Clear".to_string(),
        description: "clear sky".to_string(),
        sunrise: utc_ts(2026, 10, 19, 6) + 15 * 60,
        sunset: utc_ts(2026, 10, 19, 17) + 45 * 60,
    }
}

/// Five days of 3-hourly samples starting 2026-10-19 00:00 UTC (a Monday).
pub fn forecast_week() -> Forecast {
    let start = utc_ts(2026, 10, 19, 0);
    let samples = (0..40)
        .map(|i| sample_at(start + i * 3 * 3600, 15.0 + (i % 8) as f64))
        .collect();

    Forecast {
        city_name: "Bengaluru".to_string(),
        utc_offset_secs: 0,
        samples,
    }
}
