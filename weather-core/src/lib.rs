//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider behind a `WeatherProvider` abstraction
//! - The forecast projection pipeline: condition classification, daily
//!   reduction, the rotating weekly series and chart geometry
//! - Search sessions that publish one report per search
//!
//! It is used by `weather-cli`, but rendering is left entirely to the caller.

pub mod chart;
pub mod condition;
pub mod config;
pub mod effects;
pub mod error;
pub mod forecast;
pub mod format;
pub mod model;
pub mod provider;
pub mod report;
pub mod session;
pub mod weekly;

#[cfg(test)]
mod test_support;

pub use chart::{ChartGeometry, ChartPoint};
pub use condition::ConditionCategory;
pub use config::{Config, ZoneSetting};
pub use effects::{Effect, EffectRenderer};
pub use error::WeatherError;
pub use forecast::DailyForecastEntry;
pub use model::{CurrentWeather, Forecast, WeatherSample};
pub use provider::WeatherProvider;
pub use report::WeatherReport;
pub use session::{SearchOutcome, SearchSession};
pub use weekly::WeeklyTemperaturePoint;
