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

//! Application event distribution.
//!
//! Every input to the application arrives as an [`AppEvent`] on a single
//! channel and is handled completely before the next one is taken:
//!
//! 1. **Capture**: the input thread forwards key presses and resizes, and
//!    the [`scheduler`] delivers one-second ticks.
//! 2. **Process**: [`dispatch`] routes the event according to the current
//!    [`Mode`], to the setup form or to the timer.
//! 3. **Render**: after each event the UI is re-drawn using the `ratatui`
//!    terminal.
//!
//! While the application is running, each accepted tick arms the next one,
//! whether or not the timer is paused. Every change of mode starts a new
//! tick epoch so that a tick still in flight from an earlier run is dropped
//! instead of starting a second chain.

mod handlers;
pub(crate) mod scheduler;

use handlers::*;

use std::io::Stdout;

use anyhow::{Result, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::error;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, Mode, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Resize(u16, u16),

    Tick(u64),

    ExitApplication,

    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        dispatch(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Applies a single event to the application state.
///
/// # Errors
///
/// Returns an error for [`AppEvent::FatalError`], or if the exit request
/// cannot be queued.
pub(crate) fn dispatch(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Resize(width, height) => handle_resize(app, width, height),
        AppEvent::Tick(epoch) => handle_tick(app, epoch),
        AppEvent::ExitApplication => {}
        AppEvent::FatalError(message) => {
            error!("{message}");
            bail!(message);
        }
    }
    Ok(())
}

/// Routes a key press to the setup form or the timer, depending on the mode.
///
/// Quitting is handled first and works in both modes. Keys with no meaning
/// in the current mode are ignored.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if is_quit_key(key) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    match app.mode {
        Mode::Setup => handle_setup_key(app, key),
        Mode::Running => handle_running_key(app, key),
    }

    Ok(())
}

fn is_quit_key(key: KeyEvent) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), modifiers) => modifiers.contains(KeyModifiers::CONTROL),
        (KeyCode::Char('q'), _) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, sync::mpsc, time::Duration};

    use crossterm::event::KeyEventState;
    use ratatui::layout::Size;

    use super::*;
    use crate::{
        config::AppConfig,
        events::scheduler::TickScheduler,
        timer::SessionKind,
    };

    #[derive(Clone, Default)]
    struct RecordingTicker(Rc<RefCell<Vec<u64>>>);

    impl RecordingTicker {
        fn armed(&self) -> Vec<u64> {
            self.0.borrow().clone()
        }
    }

    impl TickScheduler for RecordingTicker {
        fn schedule(&self, epoch: u64) {
            self.0.borrow_mut().push(epoch);
        }
    }

    fn test_app(long_break: bool) -> (App, RecordingTicker) {
        let ticker = RecordingTicker::default();
        let (event_tx, event_rx) = mpsc::channel();
        let config = AppConfig {
            long_break,
            ..AppConfig::default()
        };
        let app = App::from_parts(config, event_tx, event_rx, Box::new(ticker.clone()));
        (app, ticker)
    }

    fn press(app: &mut App, code: KeyCode) {
        dispatch(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn tick(app: &mut App) {
        let epoch = app.tick_epoch;
        dispatch(app, AppEvent::Tick(epoch)).unwrap();
    }

    /// Fills in every field and confirms the form.
    fn start_timer(app: &mut App, minutes: &[&str]) {
        for value in minutes {
            type_text(app, value);
            press(app, KeyCode::Enter);
        }
    }

    #[test]
    fn enter_advances_through_fields_before_starting() {
        let (mut app, ticker) = test_app(true);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.setup.active_index(), 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.setup.active_index(), 2);
        assert_eq!(app.mode, Mode::Setup);
        assert!(ticker.armed().is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Running);
        assert!(app.timer.is_running());
        assert_eq!(ticker.armed(), vec![app.tick_epoch]);
    }

    #[test]
    fn empty_fields_start_with_default_durations() {
        let (mut app, _) = test_app(true);
        start_timer(&mut app, &["", "", ""]);
        assert_eq!(app.timer.session(), SessionKind::Focus);
        assert_eq!(app.timer.remaining(), Duration::from_secs(25 * 60));
        assert_eq!(app.timer.settings().long_break, Some(Duration::from_secs(15 * 60)));
    }

    #[test]
    fn invalid_focus_text_falls_back_to_default() {
        let (mut app, _) = test_app(true);
        start_timer(&mut app, &["-5", "3", "9"]);
        assert_eq!(app.mode, Mode::Running);
        assert_eq!(app.timer.remaining(), Duration::from_secs(25 * 60));
        assert_eq!(app.timer.settings().short_break, Duration::from_secs(3 * 60));
    }

    #[test]
    fn two_field_form_starts_without_long_break() {
        let (mut app, _) = test_app(false);
        start_timer(&mut app, &["1", "1"]);
        assert_eq!(app.mode, Mode::Running);
        assert!(!app.timer.settings().supports_long_break());
    }

    #[test]
    fn tab_and_back_tab_switch_fields() {
        let (mut app, _) = test_app(true);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.setup.active_index(), 2);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.setup.active_index(), 0);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.setup.active_index(), 2);
        assert_eq!(app.mode, Mode::Setup);
    }

    #[test]
    fn running_commands_are_ignored_in_setup() {
        let (mut app, _) = test_app(true);
        type_text(&mut app, "s");
        assert_eq!(app.mode, Mode::Setup);
        assert_eq!(app.setup.value(crate::setup::Field::Focus), Some("s"));
    }

    #[test]
    fn sixty_ticks_finish_a_one_minute_focus_session() {
        let (mut app, ticker) = test_app(true);
        start_timer(&mut app, &["1", "1", "1"]);

        for _ in 0..60 {
            tick(&mut app);
        }

        assert_eq!(app.timer.session(), SessionKind::Break);
        assert_eq!(app.timer.remaining(), Duration::from_secs(60));
        assert_eq!(app.timer.completed_focus(), 1);
        // One tick armed on start, then one re-arm per accepted tick
        assert_eq!(ticker.armed().len(), 61);
    }

    #[test]
    fn fourth_focus_completion_reaches_long_break() {
        let (mut app, _) = test_app(true);
        start_timer(&mut app, &["1", "1", "1"]);

        for _ in 0..(3 * 120 + 60) {
            tick(&mut app);
        }

        assert_eq!(app.timer.session(), SessionKind::LongBreak);
        assert_eq!(app.timer.completed_focus(), 4);
    }

    #[test]
    fn paused_ticks_keep_the_chain_alive_without_counting_down() {
        let (mut app, ticker) = test_app(true);
        start_timer(&mut app, &["1", "1", "1"]);
        press(&mut app, KeyCode::Char('p'));
        assert!(!app.timer.is_running());

        for _ in 0..5 {
            tick(&mut app);
        }
        assert_eq!(app.timer.remaining(), Duration::from_secs(60));
        assert_eq!(ticker.armed().len(), 6);

        press(&mut app, KeyCode::Char(' '));
        tick(&mut app);
        assert!(app.timer.is_running());
        assert_eq!(app.timer.remaining(), Duration::from_secs(59));
    }

    #[test]
    fn reset_restores_the_session_and_keeps_pause_state() {
        let (mut app, _) = test_app(true);
        start_timer(&mut app, &["1", "1", "1"]);
        for _ in 0..10 {
            tick(&mut app);
        }

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.timer.remaining(), Duration::from_secs(60));
        assert!(app.timer.is_running());

        tick(&mut app);
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.timer.remaining(), Duration::from_secs(60));
        assert!(!app.timer.is_running());
    }

    #[test]
    fn skip_moves_to_the_next_session() {
        let (mut app, _) = test_app(true);
        start_timer(&mut app, &["1", "2", "3"]);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.timer.session(), SessionKind::Break);
        assert_eq!(app.timer.remaining(), Duration::from_secs(120));
        assert_eq!(app.timer.completed_focus(), 1);
    }

    #[test]
    fn reconfigure_returns_to_setup_and_resets_progress() {
        let (mut app, _) = test_app(true);
        start_timer(&mut app, &["1", "1", "1"]);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('s'));

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.mode, Mode::Setup);
        assert_eq!(app.timer.completed_focus(), 0);
        assert!(!app.timer.is_running());
        assert_eq!(app.setup.active_index(), 0);
        // Entered values are kept for editing
        assert_eq!(app.setup.value(crate::setup::Field::Focus), Some("1"));
    }

    #[test]
    fn ticks_in_setup_are_dropped_and_not_rearmed() {
        let (mut app, ticker) = test_app(true);
        start_timer(&mut app, &["1", "1", "1"]);
        let old_epoch = app.tick_epoch;
        press(&mut app, KeyCode::Char('n'));

        dispatch(&mut app, AppEvent::Tick(old_epoch)).unwrap();
        assert_eq!(ticker.armed(), vec![old_epoch]);
        assert_eq!(app.timer.remaining(), Duration::from_secs(60));
    }

    #[test]
    fn stale_ticks_from_an_earlier_run_are_dropped() {
        let (mut app, ticker) = test_app(true);
        start_timer(&mut app, &["1", "1", "1"]);
        let old_epoch = app.tick_epoch;

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Running);
        assert_ne!(app.tick_epoch, old_epoch);

        dispatch(&mut app, AppEvent::Tick(old_epoch)).unwrap();
        assert_eq!(app.timer.remaining(), Duration::from_secs(60));
        assert_eq!(ticker.armed(), vec![old_epoch, app.tick_epoch]);
    }

    #[test]
    fn quit_keys_request_exit_in_both_modes() {
        let (mut app, _) = test_app(true);
        press(&mut app, KeyCode::Char('q'));
        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));

        start_timer(&mut app, &["", "", ""]);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        dispatch(&mut app, AppEvent::Key(ctrl_c)).unwrap();
        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn key_releases_and_unknown_keys_are_ignored() {
        let (mut app, _) = test_app(true);
        start_timer(&mut app, &["1", "1", "1"]);

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('s'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        dispatch(&mut app, AppEvent::Key(release)).unwrap();
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::F(5));

        assert_eq!(app.timer.session(), SessionKind::Focus);
        assert_eq!(app.timer.remaining(), Duration::from_secs(60));
        assert!(app.timer.is_running());
    }

    #[test]
    fn resize_updates_the_viewport_only() {
        let (mut app, _) = test_app(true);
        dispatch(&mut app, AppEvent::Resize(120, 40)).unwrap();
        assert_eq!(app.viewport, Size::new(120, 40));
        assert_eq!(app.mode, Mode::Setup);
    }

    #[test]
    fn fatal_error_stops_the_loop() {
        let (mut app, _) = test_app(true);
        let result = dispatch(&mut app, AppEvent::FatalError("terminal gone".to_string()));
        assert!(result.is_err());
    }
}
