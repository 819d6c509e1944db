//! Weather panel - terminal weather widget

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_panel::action::Action;
use weather_panel::api::{OpenWeatherClient, WeatherProvider};
use weather_panel::components::{
    Component, NoticeModal, NoticeModalProps, WeatherPanel, WeatherPanelProps,
};
use weather_panel::config::Config;
use weather_panel::effect::{self, Effect};
use weather_panel::logging;
use weather_panel::reducer::reducer;
use weather_panel::state::AppState;

/// Current weather for a city, in the terminal
#[derive(Parser, Debug)]
#[command(name = "weather-panel")]
#[command(about = "Search a city and show its current weather")]
struct Args {
    #[command(flatten)]
    config: Config,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum PanelComponentId {
    Panel,
    Notice,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum PanelContext {
    Main,
    Notice,
}

impl EventRoutingState<PanelComponentId, PanelContext> for AppState {
    fn focused(&self) -> Option<PanelComponentId> {
        if self.notice_open() {
            Some(PanelComponentId::Notice)
        } else {
            Some(PanelComponentId::Panel)
        }
    }

    fn modal(&self) -> Option<PanelComponentId> {
        if self.notice_open() {
            Some(PanelComponentId::Notice)
        } else {
            None
        }
    }

    fn binding_context(&self, id: PanelComponentId) -> PanelContext {
        match id {
            PanelComponentId::Panel => PanelContext::Main,
            PanelComponentId::Notice => PanelContext::Notice,
        }
    }

    fn default_context(&self) -> PanelContext {
        PanelContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        config,
        debug: debug_args,
    } = Args::parse();

    logging::init(&config.log_path())?;

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::default()) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherClient::new(config.api_config()));
    tracing::info!(city = %config.city, base_url = %config.base_url, "starting weather panel");

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        provider,
        Action::mount(config.city),
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct PanelUi {
    panel: WeatherPanel,
    notice: NoticeModal,
}

impl PanelUi {
    fn new() -> Self {
        Self {
            panel: WeatherPanel::new(),
            notice: NoticeModal::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<PanelComponentId>,
    ) {
        event_ctx.set_component_area(PanelComponentId::Panel, area);

        let props = WeatherPanelProps {
            state,
            is_focused: render_ctx.is_focused() && !state.notice_open(),
        };
        self.panel.render(frame, area, props);

        if let Some(message) = state.notice.as_deref() {
            event_ctx.set_component_area(PanelComponentId::Notice, area);
            let props = NoticeModalProps {
                message,
                is_focused: render_ctx.is_focused(),
            };
            self.notice.render(frame, area, props);
        } else {
            event_ctx
                .component_areas
                .remove(&PanelComponentId::Notice);
        }
    }

    fn handle_panel_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherPanelProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.panel.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_notice_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let Some(message) = state.notice.as_deref() else {
            return HandlerResponse::ignored();
        };
        let props = NoticeModalProps {
            message,
            is_focused: true,
        };
        let actions: Vec<_> = self.notice.handle_event(event, props).into_iter().collect();
        // Modal: swallow everything while open
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    provider: Arc<dyn WeatherProvider>,
    mount: Action,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(PanelUi::new()));
    let mut bus: EventBus<AppState, Action, PanelComponentId, PanelContext> = EventBus::new();
    let keybindings: Keybindings<PanelContext> = Keybindings::new();

    let ui_panel = Rc::clone(&ui);
    bus.register(PanelComponentId::Panel, move |event, state| {
        ui_panel.borrow_mut().handle_panel_event(&event.kind, state)
    });

    let ui_notice = Rc::clone(&ui);
    bus.register(PanelComponentId::Notice, move |event, state| {
        ui_notice
            .borrow_mut()
            .handle_notice_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(mount),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &provider),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, provider: &Arc<dyn WeatherProvider>) {
    match effect {
        Effect::FetchWeather { city, request } => {
            // One task per request: earlier searches keep running and the
            // reducer drops their results if they arrive late.
            let provider = Arc::clone(provider);
            ctx.tasks()
                .spawn(TaskKey::new(format!("weather_{request}")), async move {
                    effect::resolve_search(provider.as_ref(), city, request).await
                });
        }
    }
}
