//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, EMPTY_CITY_NOTICE};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchQueryChange(query) => {
            if query == state.query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        Action::SearchSubmit(city) => {
            if city.is_empty() {
                state.notice = Some(EMPTY_CITY_NOTICE.to_string());
                return DispatchResult::changed();
            }
            state.latest_request += 1;
            DispatchResult::changed_with(Effect::FetchWeather {
                city,
                request: state.latest_request,
            })
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad { request, record } => {
            if !accept(state, request) {
                return DispatchResult::unchanged();
            }
            state.current_weather = Some(record);
            DispatchResult::changed()
        }

        // Leaves the current reading in place; only the notice changes.
        Action::WeatherDidReject { request, message } => {
            if !accept(state, request) {
                return DispatchResult::unchanged();
            }
            state.notice = Some(message);
            DispatchResult::changed()
        }

        Action::WeatherDidFail { request, .. } => {
            if !accept(state, request) {
                return DispatchResult::unchanged();
            }
            state.current_weather = None;
            DispatchResult::changed()
        }

        // ===== Notice actions =====
        Action::NoticeDismiss => {
            if state.notice.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Results from superseded searches are dropped.
fn accept(state: &AppState, request: u64) -> bool {
    if state.is_current_request(request) {
        return true;
    }
    tracing::debug!(
        request,
        latest = state.latest_request,
        "dropping stale weather result"
    );
    false
}
