use thiserror::Error;

/// Failures surfaced to the user by a search.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Please enter a city name")]
    EmptyQuery,

    /// The provider has no such city.
    #[error("City not found: {city}")]
    NotFound { city: String },

    /// Network failure (`status: None`) or a non-success HTTP status other than 404.
    #[error("{}", transport_message(.status, .message))]
    Transport { status: Option<u16>, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Not enough samples to derive a value, e.g. an empty forecast list.
    #[error("Not enough forecast data: {0}")]
    DegenerateInput(String),
}

impl WeatherError {
    pub(crate) fn http(status: u16, body: &str) -> Self {
        Self::Transport {
            status: Some(status),
            message: truncate_body(body),
        }
    }

    pub(crate) fn connection(err: &reqwest::Error) -> Self {
        Self::Transport {
            status: None,
            message: err.to_string(),
        }
    }
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match *status {
        Some(code) if message.is_empty() => format!("HTTP error! status: {code}"),
        Some(code) => format!("HTTP error! status: {code}: {message}"),
        None => format!("Network error: {message}"),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
