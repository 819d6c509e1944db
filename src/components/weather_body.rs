use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::icon::{self, WeatherCondition};
use crate::state::{FALLBACK_MESSAGE, WeatherRecord};

/// Reading area below the search bar
pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub weather: Option<&'a WeatherRecord>,
}

/// Rows for the large temperature read-out (terminus font height).
const TEMPERATURE_ROWS: u16 = 6;

/// Below this height the reading collapses to two plain lines.
const FULL_LAYOUT_MIN_ROWS: u16 = 10;

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match props.weather {
            Some(record) if area.height < FULL_LAYOUT_MIN_ROWS => {
                render_compact(frame, area, record)
            }
            Some(record) => render_record(frame, area, record),
            None => render_fallback(frame, area),
        }
    }
}

fn render_record(frame: &mut Frame, area: Rect, record: &WeatherRecord) {
    let chunks = Layout::vertical([
        Constraint::Length(1),                // icon glyph + condition
        Constraint::Length(1),                // icon url
        Constraint::Length(1),                // blank
        Constraint::Max(TEMPERATURE_ROWS),    // temperature
        Constraint::Length(1),                // location
        Constraint::Length(1),                // blank
        Constraint::Length(2),                // humidity / wind
    ])
    .flex(Flex::Center)
    .split(area);

    let code = record.icon_code();
    let condition = code.map(WeatherCondition::from_icon_code);
    let mut icon_spans = vec![Span::raw(icon::glyph(code))];
    if let Some(condition) = condition {
        icon_spans.push(Span::raw("  "));
        icon_spans.push(Span::styled(
            condition.label(),
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(icon_spans).centered()), chunks[0]);
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                record.icon_url.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ),
        chunks[1],
    );

    let temp_text = record.temperature_label();
    let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_gradient(record.temperature));
    frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[3]);

    frame.render_widget(
        Paragraph::new(Line::from(record.location.as_str().bold()).centered()),
        chunks[4],
    );

    let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(chunks[6]);
    render_reading(frame, columns[0], &record.humidity_label(), "Humidity");
    render_reading(frame, columns[1], &record.wind_label(), "Wind Speed");
}

fn render_compact(frame: &mut Frame, area: Rect, record: &WeatherRecord) {
    let lines = vec![
        Line::from(vec![
            Span::raw(icon::glyph(record.icon_code())),
            Span::raw(" "),
            Span::styled(record.temperature_label(), Style::default().bold()),
            Span::raw("  "),
            Span::raw(record.location.as_str()),
        ])
        .centered(),
        Line::from(Span::styled(
            format!("{}  {}", record.humidity_label(), record.wind_label()),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    ];
    let chunks = Layout::vertical([Constraint::Length(2)])
        .flex(Flex::Center)
        .split(area);
    frame.render_widget(Paragraph::new(lines), chunks[0]);
}

fn render_reading(frame: &mut Frame, area: Rect, value: &str, caption: &str) {
    let lines = vec![
        Line::from(Span::styled(value.to_string(), Style::default().bold())).centered(),
        Line::from(Span::styled(
            caption.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_fallback(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                FALLBACK_MESSAGE,
                Style::default().fg(Color::Red).bold(),
            ))
            .centered(),
        ),
        chunks[0],
    );
}

fn temperature_gradient(celsius: i32) -> Fill {
    let (start, end) = match celsius {
        t if t < 0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}
