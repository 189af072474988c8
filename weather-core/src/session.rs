//! Search orchestration: fetch, build, and publish a report.
//!
//! Overlapping searches are resolved by issue order. Every search takes a
//! generation number when it starts; its report is published only if no
//! newer search has started since, so a slow response can never overwrite
//! the result of a later query.

use chrono::Utc;
use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicU64, Ordering},
};
use tracing::{debug, warn};

use crate::{config::ZoneSetting, error::WeatherError, provider::WeatherProvider, report::WeatherReport};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The report is now the displayed one.
    Applied(Box<WeatherReport>),
    /// A newer search was issued while this one was in flight.
    Stale,
}

#[derive(Debug)]
pub struct SearchSession {
    provider: Box<dyn WeatherProvider>,
    zone: ZoneSetting,
    generation: AtomicU64,
    display: Mutex<Option<WeatherReport>>,
}

impl SearchSession {
    pub fn new(provider: Box<dyn WeatherProvider>, zone: ZoneSetting) -> Self {
        Self {
            provider,
            zone,
            generation: AtomicU64::new(0),
            display: Mutex::new(None),
        }
    }

    /// Runs one search. Errors leave the displayed report untouched.
    pub async fn search(&self, city: &str) -> Result<SearchOutcome, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyQuery);
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(city, generation, "Search started");

        let result = self.provider.fetch_all(city).await.and_then(|(current, forecast)| {
            WeatherReport::build_in_zone(&current, &forecast, &self.zone, Utc::now())
        });

        let mut display = self.display.lock().unwrap_or_else(PoisonError::into_inner);
        if self.generation.load(Ordering::SeqCst) != generation {
            warn!(city, generation, "Discarding result of superseded search");
            return Ok(SearchOutcome::Stale);
        }

        let report = result?;
        *display = Some(report.clone());
        Ok(SearchOutcome::Applied(Box::new(report)))
    }

    /// The report currently on display, if any search has succeeded.
    pub fn current(&self) -> Option<WeatherReport> {
        self.display
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
