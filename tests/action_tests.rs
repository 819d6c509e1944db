//! Action and state tests using EffectStore and TestHarness
//!
//! - Dispatch actions against the real reducer
//! - Drive components with key events and assert emitted actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, EventKind, NumericComponentId, assert_emitted, assert_not_emitted};
use weather_panel::{
    action::Action,
    components::{Component, WeatherPanel, WeatherPanelProps},
    effect::Effect,
    icon::icon_url,
    reducer::reducer,
    state::{AppState, WeatherRecord},
};

fn record(location: &str) -> WeatherRecord {
    WeatherRecord {
        humidity: 65,
        wind_speed: 4.1,
        temperature: 18,
        location: location.into(),
        icon_url: icon_url("10d"),
    }
}

#[test]
fn test_submit_emits_single_fetch() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::SearchSubmit("New York".into()));

    assert!(result.changed, "State should change");
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(
        &result.effects[0],
        Effect::FetchWeather { city, request: 1 } if city == "New York"
    ));
}

#[test]
fn test_empty_submit_has_no_effect_on_weather() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::SearchSubmit("London".into()));
    store.dispatch(Action::WeatherDidLoad {
        request: 1,
        record: record("London"),
    });

    let result = store.dispatch(Action::SearchSubmit(String::new()));

    assert!(result.effects.is_empty());
    assert_eq!(store.state().current_weather, Some(record("London")));
    assert_eq!(store.state().notice.as_deref(), Some("Enter City Name"));
}

#[test]
fn test_reject_leaves_weather_untouched() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::SearchSubmit("London".into()));
    store.dispatch(Action::WeatherDidLoad {
        request: 1,
        record: record("London"),
    });
    let before = store.state().current_weather.clone();

    store.dispatch(Action::SearchSubmit("Atlantis".into()));
    store.dispatch(Action::WeatherDidReject {
        request: 2,
        message: "city not found".into(),
    });

    assert_eq!(store.state().current_weather, before);
    assert_eq!(store.state().notice.as_deref(), Some("city not found"));
}

#[test]
fn test_typing_updates_query() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherPanel::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("l", |state, event| {
        let props = WeatherPanelProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    assert_emitted!(actions, Action::SearchQueryChange(_));
    assert_not_emitted!(actions, Action::SearchSubmit(_));
}

#[test]
fn test_enter_submits_typed_query() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let mut component = WeatherPanel::new();
    store.dispatch(Action::SearchQueryChange("Tokyo".into()));

    let actions: Vec<_> = component
        .handle_event(
            &EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            WeatherPanelProps {
                state: store.state(),
                is_focused: true,
            },
        )
        .into_iter()
        .collect();

    actions.assert_count(1);
    actions.assert_first(Action::SearchSubmit("Tokyo".into()));
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherPanel::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("a b c", |state, event| {
        let props = WeatherPanelProps {
            state,
            is_focused: false,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_mount_searches_startup_city() {
    assert_eq!(
        Action::mount("London"),
        Action::SearchSubmit("London".into())
    );
}

#[test]
fn test_action_categories() {
    let did_load = Action::WeatherDidLoad {
        request: 1,
        record: record("London"),
    };
    let quit = Action::Quit;

    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(quit.category(), None);
    assert!(did_load.is_weather_did());
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::SearchSubmit("London".into()),
        Action::WeatherDidFail {
            request: 1,
            error: "offline".into(),
        },
    ];

    assert_emitted!(actions, Action::SearchSubmit(_));
    assert_emitted!(actions, Action::WeatherDidFail { .. });
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::WeatherDidLoad { .. });
}
