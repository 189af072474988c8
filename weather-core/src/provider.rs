use crate::{
    Config, CurrentWeather, Forecast, WeatherError, provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, WeatherError>;

    /// Forecast samples in chronological order.
    async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError>;

    /// Both endpoints, requested concurrently.
    async fn fetch_all(&self, city: &str) -> Result<(CurrentWeather, Forecast), WeatherError> {
        tokio::try_join!(self.current_weather(city), self.forecast(city))
    }
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    Ok(Box::new(OpenWeatherProvider::with_base_url(
        api_key.to_owned(),
        config.base_url.clone(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("API key not configured"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg).is_ok());
    }

    #[tokio::test]
    async fn provider_from_config_uses_configured_base_url() {
        use wiremock::{Mock, MockServer, ResponseTemplate, matchers::path};

        let server = MockServer::start().await;
        Mock::given(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "city": { "name": "Oslo", "timezone": 3600 },
                "list": []
            })))
            .mount(&server)
            .await;

        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());
        cfg.base_url = server.uri();

        let forecast = provider_from_config(&cfg).unwrap().forecast("Oslo").await.unwrap();
        assert_eq!(forecast.city_name, "Oslo");
        assert_eq!(forecast.utc_offset_secs, 3600);
    }
}
