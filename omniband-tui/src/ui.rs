//! Layout and drawing — slider row, value readout, status bar.

use chrono::NaiveDateTime;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use omniband_core::{HandleSide, SliderValue};

use crate::app::AppState;
use crate::theme;

/// Draw the entire UI. Also records the track rect on the view so mouse
/// hit-testing agrees with what is on screen.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // slider block
            Constraint::Length(2), // value readout
            Constraint::Min(0),    // spacer
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    draw_slider(f, chunks[0], app);
    draw_values(f, chunks[1], app);
    draw_status(f, chunks[3], app);
}

fn draw_slider(f: &mut Frame, area: Rect, app: &mut AppState) {
    let title = if app.slider.view().one_way {
        " omniband (one-way) "
    } else {
        " omniband "
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Center row of the inner area is the track.
    let track = Rect {
        y: inner.y + inner.height / 2,
        height: 1,
        ..inner
    };
    app.slider.view_mut().set_area(track);

    let view = app.slider.view();
    let disabled = view.disabled;
    let left_col = view.handle_column(HandleSide::Left);
    let right_col = view.handle_column(HandleSide::Right);

    let mut spans: Vec<Span> = Vec::with_capacity(track.width as usize);
    for col in track.x..track.x + track.width {
        let span = if !view.one_way && col == left_col {
            Span::styled(
                "█",
                theme::handle(view.is_raised(HandleSide::Left), disabled),
            )
        } else if col == right_col {
            Span::styled(
                "█",
                theme::handle(view.is_raised(HandleSide::Right), disabled),
            )
        } else if col > left_col && col < right_col {
            Span::styled("━", theme::fill(disabled))
        } else {
            Span::styled("─", theme::track(disabled))
        };
        spans.push(span);
    }
    f.render_widget(Paragraph::new(Line::from(spans)), track);
}

fn draw_values(f: &mut Frame, area: Rect, app: &AppState) {
    let info = app.slider.info();
    let line = Line::from(vec![
        Span::styled("  left: ", theme::label()),
        Span::styled(format_value(&info.left), theme::value()),
        Span::styled("    right: ", theme::label()),
        Span::styled(format_value(&info.right), theme::value()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans = vec![Span::styled(
        " drag handles | h/l:left \u{2190}/\u{2192}:right r:reset d:disable m:mute q:quit",
        theme::muted(),
    )];

    if let Some((topic, _)) = &app.last_event {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} ({} events)", topic, app.events_seen),
            theme::accent(),
        ));
    }
    if app.slider.view().capturing() {
        spans.push(Span::styled(" [dragging]", theme::accent()));
    }
    if app.moving_muted() {
        spans.push(Span::styled(" [moving muted]", theme::muted()));
    }
    if let Some(status) = &app.status {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(status.as_str(), theme::accent()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn format_value(value: &SliderValue) -> String {
    match value {
        SliderValue::Number(n) => format!("{n:.2}"),
        SliderValue::Date(dt) => format_date(*dt),
    }
}

fn format_date(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}
