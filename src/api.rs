//! OpenWeather API client

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::icon;
use crate::state::WeatherRecord;

/// Default provider host; the current-conditions path is appended.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Connection settings handed to the client at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Why a lookup produced no record
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The provider answered with a non-success status; carries its message.
    #[error("{0}")]
    Rejected(String),
    /// Network failure, unreadable body or unexpected payload.
    #[error("weather request failed: {0}")]
    Transport(String),
}

/// Source of current conditions for a city
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Result<WeatherRecord, FetchError>;
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    weather: Vec<Condition>,
    main: MainReadings,
    wind: Wind,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Condition {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    humidity: u8,
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Turn a provider response into a record.
///
/// The body must be JSON whatever the status. Error statuses surface the
/// provider's `message` field, falling back to the status text.
pub fn parse_response(status: StatusCode, body: &str) -> Result<WeatherRecord, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::Transport(e.to_string()))?;

    if !status.is_success() {
        let message = serde_json::from_value::<ErrorResponse>(value)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| status.to_string());
        return Err(FetchError::Rejected(message));
    }

    let data: CurrentResponse =
        serde_json::from_value(value).map_err(|e| FetchError::Transport(e.to_string()))?;
    let condition = data
        .weather
        .first()
        .ok_or_else(|| FetchError::Transport("response has no weather entry".into()))?;

    Ok(WeatherRecord {
        humidity: data.main.humidity,
        wind_speed: data.wind.speed,
        temperature: data.main.temp.floor() as i32,
        location: data.name,
        icon_url: icon::icon_url(&condition.icon),
    })
}

// ============================================================================
// Client
// ============================================================================

/// Client for the OpenWeather current-conditions endpoint
#[derive(Clone, Debug)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl OpenWeatherClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Full request URL for a city, metric units.
    pub fn request_url(&self, city: &str) -> String {
        format!(
            "{}{}?q={}&units=metric&appid={}",
            self.config.base_url.trim_end_matches('/'),
            CURRENT_WEATHER_PATH,
            urlencoding::encode(city),
            urlencoding::encode(&self.config.api_key)
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        let response = self
            .http
            .get(self.request_url(city))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;

        parse_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LONDON: &str = r#"{
        "weather": [{"id": 500, "main": "Rain", "icon": "10d"}],
        "main": {"temp": 18.7, "humidity": 65, "pressure": 1012},
        "wind": {"speed": 4.1, "deg": 250},
        "name": "London",
        "cod": 200
    }"#;

    #[test]
    fn test_parse_success() {
        let record = parse_response(StatusCode::OK, LONDON).unwrap();
        assert_eq!(
            record,
            WeatherRecord {
                humidity: 65,
                wind_speed: 4.1,
                temperature: 18,
                location: "London".into(),
                icon_url: "https://openweathermap.org/img/wn/10d@2x.png".into(),
            }
        );
    }

    #[test]
    fn test_temperature_is_floored() {
        let body = LONDON.replace("18.7", "-0.5");
        let record = parse_response(StatusCode::OK, &body).unwrap();
        assert_eq!(record.temperature, -1);
    }

    #[test]
    fn test_error_status_uses_provider_message() {
        let err = parse_response(
            StatusCode::NOT_FOUND,
            r#"{"cod": "404", "message": "city not found"}"#,
        )
        .unwrap_err();
        assert_eq!(err, FetchError::Rejected("city not found".into()));
        assert_eq!(err.to_string(), "city not found");
    }

    #[test]
    fn test_error_status_without_message_uses_status() {
        let err = parse_response(StatusCode::UNAUTHORIZED, "{}").unwrap_err();
        assert_eq!(err, FetchError::Rejected("401 Unauthorized".into()));
    }

    #[test]
    fn test_invalid_json_is_transport_even_on_error_status() {
        let err = parse_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn test_missing_fields_are_transport() {
        let err = parse_response(StatusCode::OK, r#"{"name": "London"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));

        let body = LONDON.replace(r#"[{"id": 500, "main": "Rain", "icon": "10d"}]"#, "[]");
        let err = parse_response(StatusCode::OK, &body).unwrap_err();
        assert_eq!(
            err,
            FetchError::Transport("response has no weather entry".into())
        );
    }

    #[test]
    fn test_request_url_encodes_city() {
        let client = OpenWeatherClient::new(ApiConfig {
            api_key: "KEY".into(),
            base_url: "http://localhost:9000/".into(),
        });
        assert_eq!(
            client.request_url("São Paulo"),
            "http://localhost:9000/data/2.5/weather?q=S%C3%A3o%20Paulo&units=metric&appid=KEY"
        );
    }

    #[test]
    fn test_default_config_targets_provider() {
        let client = OpenWeatherClient::new(ApiConfig::default());
        assert_eq!(
            client.request_url("London"),
            "https://api.openweathermap.org/data/2.5/weather?q=London&units=metric&appid="
        );
    }
}
