use serde::{Deserialize, Serialize};

/// One reading from either the current-weather or the forecast endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Cloud coverage, 0..=100.
    pub cloud_pct: u8,
    pub condition_code: i32,
    /// Pictogram token such as `"10n"`.
    pub icon: String,
}

/// Current conditions for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub location_name: String,
    pub sample: WeatherSample,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    /// Short condition name, e.g. `"Rain"`.
    pub headline: String,
    pub description: String,
    pub sunrise: i64,
    pub sunset: i64,
}

/// The 5-day / 3-hour forecast series for a city, oldest sample first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub city_name: String,
    /// Offset of the city's local time from UTC.
    pub utc_offset_secs: i32,
    pub samples: Vec<WeatherSample>,
}
