//! Weather icons
//!
//! The provider identifies conditions with short icon codes such as `01d`
//! (clear, day) or `10n` (rain, night). The panel shows a glyph for the code
//! next to the provider-hosted image URL.

/// Provider-hosted icon images.
pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Image URL for an icon code.
pub fn icon_url(code: &str) -> String {
    format!("{ICON_BASE_URL}/{code}@2x.png")
}

/// Recover the icon code from a URL built by [`icon_url`].
pub fn code_from_url(url: &str) -> Option<&str> {
    url.rsplit('/')
        .next()
        .and_then(|file| file.strip_suffix("@2x.png"))
        .filter(|code| !code.is_empty())
}

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    PartlyCloudy,
    Cloudy,
    Drizzle,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
}

impl WeatherCondition {
    /// Map a provider icon code to a condition.
    ///
    /// Unknown codes fall back to clear sky, the panel's default icon.
    pub fn from_icon_code(code: &str) -> Self {
        match code.get(..2) {
            Some("01") => WeatherCondition::ClearSky,
            Some("02") => WeatherCondition::PartlyCloudy,
            Some("03") | Some("04") => WeatherCondition::Cloudy,
            Some("09") => WeatherCondition::Drizzle,
            Some("10") => WeatherCondition::Rain,
            Some("11") => WeatherCondition::Thunderstorm,
            Some("13") => WeatherCondition::Snow,
            Some("50") => WeatherCondition::Mist,
            _ => WeatherCondition::ClearSky,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "Clear sky",
            WeatherCondition::PartlyCloudy => "Few clouds",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Drizzle => "Shower rain",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Mist => "Mist",
        }
    }

    pub fn emoji(self, night: bool) -> &'static str {
        match self {
            WeatherCondition::ClearSky if night => "\u{1f319}",
            WeatherCondition::ClearSky => "\u{2600}\u{fe0f}",
            WeatherCondition::PartlyCloudy => "\u{26c5}",
            WeatherCondition::Cloudy => "\u{2601}\u{fe0f}",
            WeatherCondition::Drizzle => "\u{1f326}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f327}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Mist => "\u{1f32b}\u{fe0f}",
        }
    }
}

/// Glyph for an icon code; `None` picks the default (clear, day).
pub fn glyph(code: Option<&str>) -> &'static str {
    let code = code.unwrap_or("01d");
    WeatherCondition::from_icon_code(code).emoji(code.ends_with('n'))
}
