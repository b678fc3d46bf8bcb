//! Styles for the slider demo.

use ratatui::style::{Color, Modifier, Style};

pub fn track(disabled: bool) -> Style {
    if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    }
}

pub fn fill(disabled: bool) -> Style {
    if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

pub fn handle(raised: bool, disabled: bool) -> Style {
    let base = if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    if raised {
        base.add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

pub fn label() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn value() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn accent() -> Style {
    Style::default().fg(Color::Yellow)
}
