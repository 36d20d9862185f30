//! Presentation layer - ratatui front end
//!
//! A pure consumer of the entry store: key events dispatch intents, each
//! frame re-renders from derived state.

pub mod app;
pub mod render;
pub mod theme;

pub use app::App;
pub use theme::Theme;

use crate::infrastructure::{Config, TerminalSession};
use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use std::time::{Duration, Instant};

/// Event poll timeout; also bounds how late the splash transition fires.
const TICK_RATE: Duration = Duration::from_millis(200);

/// Run the interactive session until the user quits.
pub fn run(config: &Config, no_splash: bool) -> Result<()> {
    let theme = Theme::from_mode(config.theme);
    let mut app = App::new(config.splash && !no_splash);

    let mut session = TerminalSession::enter()?;
    let terminal = session.terminal_mut();

    while !app.should_quit {
        terminal
            .draw(|f| render::draw(f, &app, &theme))
            .context("drawing UI frame")?;

        if event::poll(TICK_RATE).context("polling events")? {
            match event::read().context("reading event")? {
                Event::Key(key) => app.on_key(key),
                Event::Paste(text) => app.on_paste(&text),
                _ => {}
            }
        }
        app.on_tick(Instant::now());
    }

    Ok(())
}
