//! Runtime: terminal lifecycle and the input loop for the colors screen.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode,
//!   mouse capture).
//! - Block on `crossterm::event::read()` on the calling thread; every
//!   operation is synchronous so no async runtime is involved.
//! - Route input to the colors component and apply the returned `Effect`s
//!   to the `App`, redrawing after each event.
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use swatchgrid_types::Rgb;
use tracing::{debug, info};

use crate::app::{App, Effect, ScreenOptions};
use crate::ui::components::{ColorsComponent, Component};

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Translate one terminal event into effects.
fn handle_input_event(app: &mut App, component: &mut ColorsComponent, input_event: Event) -> Vec<Effect> {
    match input_event {
        // Key release/repeat events are reported on some platforms; act on presses only.
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => component.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => component.handle_mouse_events(app, mouse_event),
        _ => Vec::new(),
    }
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    component: &mut ColorsComponent,
) -> Result<()> {
    loop {
        terminal.draw(|frame| component.render(frame, frame.area(), app))?;

        let input_event = event::read().context("failed to read terminal event")?;
        for effect in handle_input_event(app, component, input_event) {
            debug!(?effect, "applying effect");
            if !app.apply(effect) {
                return Ok(());
            }
        }
    }
}

/// Entry point for the colors screen: sets up the terminal, runs the input
/// loop and always restores the terminal before returning.
pub fn run_app(options: ScreenOptions) -> Result<Option<Rgb>> {
    let mut app = App::new(options);
    let mut component = ColorsComponent;
    let mut terminal = setup_terminal()?;

    let outcome = event_loop(&mut terminal, &mut app, &mut component);
    cleanup_terminal(&mut terminal)?;
    outcome?;

    let selected = app.selected();
    info!(selected = ?selected.map(|color| color.to_string()), "colors screen closed");
    Ok(selected)
}
