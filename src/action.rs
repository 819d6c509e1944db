//! Actions: user intents and the results of async fetches

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherRecord;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search field text changed
    SearchQueryChange(String),

    /// Intent: look up the weather for a city (triggers async task)
    SearchSubmit(String),

    // ===== Weather category =====
    /// Result: provider returned current conditions
    WeatherDidLoad { request: u64, record: WeatherRecord },

    /// Result: provider answered with an error status and message
    WeatherDidReject { request: u64, message: String },

    /// Result: request never produced a usable response
    WeatherDidFail { request: u64, error: String },

    // ===== Notice category =====
    /// Close the blocking notification
    NoticeDismiss,

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Exit the application
    Quit,
}

impl Action {
    /// The search dispatched once when the panel starts.
    pub fn mount(city: impl Into<String>) -> Self {
        Action::SearchSubmit(city.into())
    }
}
