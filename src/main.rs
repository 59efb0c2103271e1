// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Pomodoro Timer TUI.
//!
//! A terminal-based Pomodoro timer.
//!
//! The user enters focus, break and long break durations, then the timer
//! counts down, cycling between focus and break sessions with a long break
//! after every fourth focus session.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all application state, manages the terminal
//!   lifecycle and renders the UI.
//! * An **Input Thread** forwards keyboard and resize events.
//! * **Tick Threads** each deliver a single one-second tick, re-armed by the
//!   main thread for as long as the timer is running.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Communication
//! with the main thread is handled via a single `std::sync::mpsc` channel.

mod config;
mod events;
mod render;
mod setup;
mod theme;
mod timer;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Size};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::{
    config::AppConfig,
    events::{AppEvent, process_events, scheduler::TickScheduler},
    setup::SetupForm,
    theme::Theme,
    timer::Timer,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Setup,
    Running,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub mode: Mode,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub ticker: Box<dyn TickScheduler>,
    pub tick_epoch: u64,

    pub timer: Timer,
    pub setup: SetupForm,

    pub viewport: Size,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let ticker = Box::new(event_tx.clone());

        Self::from_parts(config, event_tx, event_rx, ticker)
    }

    pub fn from_parts(
        config: AppConfig,
        event_tx: Sender<AppEvent>,
        event_rx: Receiver<AppEvent>,
        ticker: Box<dyn TickScheduler>,
    ) -> Self {
        let setup = SetupForm::new(config.long_break);

        Self {
            config,
            theme: Theme::default(),
            mode: Mode::Setup,
            event_tx,
            event_rx,
            ticker,
            tick_epoch: 0,
            timer: Timer::default(),
            setup,
            viewport: Size::default(),
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, initializes the application state, manages the
/// terminal lifecycle, and returns an error if any part of the execution
/// fails.
fn main() -> Result<()> {
    let config = config::load_config();
    config::init_logging(&config);

    info!("Starting with {config:?}");

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&mut app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Records the initial terminal size.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &mut App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let (width, height) = terminal::size().context("Failed to read terminal size")?;
    app.viewport = Size::new(width, height);

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], disabling raw mode
/// and leaving the alternate screen. It also ensures the cursor is made
/// visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input thread and enters the main event loop.
///
/// No tick is armed here, the first one is scheduled when the setup form is
/// confirmed.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// terminal error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(width, height)) => AppEvent::Resize(width, height),
                Ok(_) => continue,
                Err(e) => {
                    tx_input
                        .send(AppEvent::FatalError(format!("Failed to read terminal input: {e}")))
                        .ok();
                    break;
                }
            };

            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
