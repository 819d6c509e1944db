//! Effects - side effects declared by the reducer

use crate::action::Action;
use crate::api::{FetchError, WeatherProvider};

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current conditions for a city, tagged with its request id
    FetchWeather { city: String, request: u64 },
}

/// Run one lookup and turn the outcome into the matching result action.
pub async fn resolve_search(provider: &dyn WeatherProvider, city: String, request: u64) -> Action {
    tracing::debug!(%city, request, "fetching current weather");
    match provider.current(&city).await {
        Ok(record) => Action::WeatherDidLoad { request, record },
        Err(FetchError::Rejected(message)) => {
            tracing::info!(%city, request, %message, "provider rejected weather request");
            Action::WeatherDidReject { request, message }
        }
        Err(FetchError::Transport(error)) => {
            tracing::warn!(%city, request, %error, "weather request failed");
            Action::WeatherDidFail { request, error }
        }
    }
}
