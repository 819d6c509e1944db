use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const SEARCH_PLACEHOLDER: &str = "Search";
pub const SEARCH_BUTTON_LABEL: &str = "[ Search ]";

/// Width reserved for the button, label plus a gap.
const BUTTON_WIDTH: u16 = SEARCH_BUTTON_LABEL.len() as u16 + 2;

/// City input with a clickable search button beside it
pub struct SearchBar {
    input: TextInput,
    button: Rect,
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub is_focused: bool,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            button: Rect::default(),
        }
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen area of the button as of the last render.
    pub fn button_area(&self) -> Rect {
        self.button
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let key = match event {
            EventKind::Mouse(mouse) => {
                let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                    && self.button.contains(Position::new(mouse.column, mouse.row));
                if clicked {
                    return vec![(props.on_submit)(props.query.to_string())];
                }
                return Vec::new();
            }
            EventKind::Key(key) => key,
            _ => return Vec::new(),
        };

        match key.code {
            KeyCode::Enter => return vec![(props.on_submit)(props.query.to_string())],
            KeyCode::Esc => return vec![Action::Quit],
            _ => {}
        }

        // All other keys go to the input
        let input_props = TextInputProps {
            value: props.query,
            placeholder: SEARCH_PLACEHOLDER,
            is_focused: true,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::xy(1, 0),
                    bg: None,
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };

        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Min(10),              // Input
            Constraint::Length(BUTTON_WIDTH), // Button
        ])
        .split(area);

        let input_props = TextInputProps {
            value: props.query,
            placeholder: SEARCH_PLACEHOLDER,
            is_focused: props.is_focused,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::xy(1, 0),
                    bg: Some(Color::Rgb(50, 50, 60)),
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[0], input_props);

        // One column gap between the input and the button
        self.button = Rect {
            x: chunks[1].x.saturating_add(1),
            width: chunks[1].width.saturating_sub(1),
            ..chunks[1]
        };
        frame.render_widget(
            Paragraph::new(Line::from(SEARCH_BUTTON_LABEL).centered()).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            self.button,
        );
    }
}
