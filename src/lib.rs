//! Weather panel - a terminal weather widget
//!
//! A search field plus a panel showing the current conditions for one city,
//! backed by the OpenWeather current-weather endpoint. The library exposes
//! the modules for the binary and for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod icon;
pub mod logging;
pub mod reducer;
pub mod state;
