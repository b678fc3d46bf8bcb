//! omniband demo — a range slider on a terminal row.
//!
//! Drag the handles with the mouse; the status bar shows the lifecycle
//! events (`start`, `moving`, `stop`) arriving through the pub/sub bus.

mod app;
mod input;
mod theme;
mod ui;
mod view;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use omniband_core::mapping::Bounds;
use omniband_core::{BoundInput, Slider, SliderConfig};

use crate::app::AppState;
use crate::view::TermView;

#[derive(Parser)]
#[command(name = "omniband", about = "omniband demo — terminal range slider")]
struct Args {
    /// Lower bound (number, or date like 2020-01-01T00:00 with --date).
    #[arg(long)]
    min: Option<String>,

    /// Upper bound.
    #[arg(long)]
    max: Option<String>,

    /// Starting lower value.
    #[arg(long)]
    start: Option<String>,

    /// Starting upper value.
    #[arg(long)]
    end: Option<String>,

    /// Treat bounds as dates.
    #[arg(long, default_value_t = false)]
    date: bool,

    /// Let the handles cross.
    #[arg(long, default_value_t = false)]
    overlap: bool,

    /// Single-handle mode (upper bound only).
    #[arg(long, default_value_t = false)]
    one_way: bool,
}

impl Args {
    fn to_config(&self) -> SliderConfig {
        let bound = |arg: &Option<String>| -> Option<BoundInput> {
            arg.as_ref().map(|s| {
                s.parse::<f64>()
                    .map(BoundInput::Number)
                    .unwrap_or_else(|_| BoundInput::Date(s.clone()))
            })
        };
        SliderConfig {
            is_one_way: self.one_way,
            is_date: self.date,
            overlap: self.overlap,
            min: bound(&self.min),
            max: bound(&self.max),
            start: bound(&self.start),
            end: bound(&self.end),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.to_config().normalized();
    let bounds = Bounds::from_config(&config);

    let slider = Slider::new(TermView::new(), config.clone());
    let mut app = AppState::new(slider, config.is_date, bounds);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // The collaborator is going away; end any live drag session first.
    app.slider.unmount();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render (this also records the track rect for hit-testing).
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain lifecycle events published since the last frame.
        app.drain_events();

        // 3. Poll for input events (50ms timeout for ~20 FPS tick).
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
