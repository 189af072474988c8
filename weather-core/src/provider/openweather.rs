use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use crate::{
    error::WeatherError,
    model::{CurrentWeather, Forecast, WeatherSample},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// GETs `{base_url}/{endpoint}` for a city and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(url = %url, city, "Requesting OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::connection(&e))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| WeatherError::connection(&e))?;

        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::NotFound {
                city: city.to_string(),
            });
        }
        if !status.is_success() {
            return Err(WeatherError::http(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| WeatherError::MalformedResponse(format!("{endpoint}: {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    #[serde(default)]
    temp_min: Option<f64>,
    #[serde(default)]
    temp_max: Option<f64>,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i32,
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
    icon: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwClouds {
    #[serde(default)]
    all: u8,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    #[serde(default)]
    clouds: OwClouds,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    #[serde(default)]
    clouds: OwClouds,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

fn to_sample(
    dt: i64,
    main: &OwMain,
    weather: &[OwWeather],
    wind: &OwWind,
    clouds: &OwClouds,
) -> Result<WeatherSample, WeatherError> {
    let condition = weather.first().ok_or_else(|| {
        WeatherError::MalformedResponse(format!("no weather condition for sample at {dt}"))
    })?;

    Ok(WeatherSample {
        timestamp: dt,
        temperature_c: main.temp,
        humidity_pct: main.humidity,
        wind_speed_mps: wind.speed,
        cloud_pct: clouds.all,
        condition_code: condition.id,
        icon: condition.icon.clone(),
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let parsed: OwCurrentResponse = self.get_json("weather", city).await?;

        let sample = to_sample(
            parsed.dt,
            &parsed.main,
            &parsed.weather,
            &parsed.wind,
            &parsed.clouds,
        )?;
        // `to_sample` guarantees a first element.
        let (headline, description) = parsed
            .weather
            .first()
            .map(|w| (w.main.clone(), w.description.clone()))
            .unwrap_or_default();

        Ok(CurrentWeather {
            location_name: parsed.name,
            temp_min_c: parsed.main.temp_min.unwrap_or(parsed.main.temp),
            temp_max_c: parsed.main.temp_max.unwrap_or(parsed.main.temp),
            sample,
            headline,
            description,
            sunrise: parsed.sys.sunrise,
            sunset: parsed.sys.sunset,
        })
    }

    #[instrument(skip(self))]
    async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
        let parsed: OwForecastResponse = self.get_json("forecast", city).await?;

        let samples = parsed
            .list
            .iter()
            .map(|e| to_sample(e.dt, &e.main, &e.weather, &e.wind, &e.clouds))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(samples = samples.len(), "Parsed OpenWeather forecast");

        Ok(Forecast {
            city_name: parsed.city.name,
            utc_offset_secs: parsed.city.timezone,
            samples,
        })
    }
}
