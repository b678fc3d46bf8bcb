//! Keyboard and mouse dispatch into the slider core.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use omniband_core::{MoveInput, PointerEvent, SliderValue};

use crate::app::AppState;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('d') => {
            let disabled = !app.slider.is_disabled();
            app.slider.disable(disabled);
            app.set_status(if disabled { "Disabled" } else { "Enabled" });
        }
        KeyCode::Char('m') => {
            app.mute_moving();
            app.set_status("Moving events muted (token removed)");
        }
        KeyCode::Char('r') => {
            let (min, max) = (app.bounds.min, app.bounds.max);
            app.slider.set_position(MoveInput::pair(min, max), false);
            app.set_status("Reset to full range");
        }
        // Nudge the left handle...
        KeyCode::Char('h') => nudge(app, true, -1.0),
        KeyCode::Char('l') => nudge(app, true, 1.0),
        // ...and the right one.
        KeyCode::Left => nudge(app, false, -1.0),
        KeyCode::Right => nudge(app, false, 1.0),
        _ => {}
    }
}

fn nudge(app: &mut AppState, left_side: bool, direction: f64) {
    let info = app.slider.info();
    let delta = app.step() * direction;
    let input = if left_side {
        MoveInput::Pair {
            left: Some(SliderValue::Number(info.left.as_f64() + delta)),
            right: None,
        }
    } else {
        MoveInput::Pair {
            left: None,
            right: Some(SliderValue::Number(info.right.as_f64() + delta)),
        }
    };
    app.slider.set_position(input, false);
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let (x, y) = (mouse.column as f64, mouse.row as f64);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(target) = app.slider.view().target_at(mouse.column, mouse.row) {
                app.slider.pointer_down(PointerEvent::down(x, y, target));
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.slider.pointer_move(PointerEvent::at(x, y));
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.slider.pointer_up();
        }
        _ => {}
    }
}
