//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::icon;

/// City searched once when the panel first comes up.
pub const STARTUP_CITY: &str = "London";

/// Shown whenever there is no weather to display, before the first load
/// and after a failed one alike.
pub const FALLBACK_MESSAGE: &str = "Cannot connect to the Server, Try again later";

/// Notice raised when a search is submitted with an empty city name.
pub const EMPTY_CITY_NOTICE: &str = "Enter City Name";

/// Current conditions for one city, as resolved by the provider
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherRecord {
    /// Relative humidity in percent
    pub humidity: u8,
    pub wind_speed: f64,
    /// Degrees Celsius, floored
    pub temperature: i32,
    pub location: String,
    pub icon_url: String,
}

impl WeatherRecord {
    pub fn temperature_label(&self) -> String {
        format!("{}°c", self.temperature)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity)
    }

    pub fn wind_label(&self) -> String {
        format!("{} km/h", self.wind_speed)
    }

    /// Provider icon code (e.g. `10d`) recovered from the icon URL.
    pub fn icon_code(&self) -> Option<&str> {
        icon::code_from_url(&self.icon_url)
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// `None` until a search succeeds, and again after a transport failure
    #[debug(section = "Weather", label = "Current", debug_fmt)]
    pub current_weather: Option<WeatherRecord>,

    /// Sequence number of the most recently issued fetch
    #[debug(section = "Weather", label = "Latest request")]
    pub latest_request: u64,

    /// Text of the search field
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    /// Pending blocking notification
    #[debug(section = "Search", label = "Notice", debug_fmt)]
    pub notice: Option<String>,
}

impl AppState {
    pub fn has_weather(&self) -> bool {
        self.current_weather.is_some()
    }

    pub fn notice_open(&self) -> bool {
        self.notice.is_some()
    }

    /// Whether a result tagged with `request` belongs to the latest search.
    pub fn is_current_request(&self, request: u64) -> bool {
        request == self.latest_request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> WeatherRecord {
        WeatherRecord {
            humidity: 65,
            wind_speed: 4.1,
            temperature: 18,
            location: "London".into(),
            icon_url: icon::icon_url("10d"),
        }
    }

    #[test]
    fn test_labels() {
        let record = record();
        assert_eq!(record.temperature_label(), "18°c");
        assert_eq!(record.humidity_label(), "65%");
        assert_eq!(record.wind_label(), "4.1 km/h");
    }

    #[test]
    fn test_wind_label_drops_trailing_zero() {
        let record = WeatherRecord {
            wind_speed: 5.0,
            ..record()
        };
        assert_eq!(record.wind_label(), "5 km/h");
    }

    #[test]
    fn test_icon_code_from_record() {
        assert_eq!(record().icon_code(), Some("10d"));
    }

    #[test]
    fn test_default_state_is_absent() {
        let state = AppState::default();
        assert!(!state.has_weather());
        assert!(!state.notice_open());
        assert_eq!(state.latest_request, 0);
        assert!(state.query.is_empty());
    }
}
