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

use crossterm::event::{Event, KeyCode, KeyEvent};
use log::{debug, info};
use ratatui::layout::Size;

use crate::{App, Mode, setup::Field, timer};

pub(super) fn handle_setup_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter if app.setup.is_last_field() => enter_running(app),
        KeyCode::Enter | KeyCode::Tab => app.setup.next_field(),
        KeyCode::BackTab => app.setup.previous_field(),
        _ => {
            app.setup.handle_event(&Event::Key(key));
        }
    }
}

pub(super) fn handle_running_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            app.timer.pause_resume();
            debug!("Timer running: {}", app.timer.is_running());
        }
        KeyCode::Char('r') => {
            app.timer.reset();
            debug!("Reset {:?} session", app.timer.session());
        }
        KeyCode::Char('s') => {
            let next = app.timer.skip();
            debug!("Skipped to {next:?} session");
        }
        KeyCode::Char('n') => enter_setup(app),
        _ => {}
    }
}

pub(super) fn handle_tick(app: &mut App, epoch: u64) {
    // Ticks armed before the last mode change belong to a finished chain
    if app.mode != Mode::Running || epoch != app.tick_epoch {
        debug!("Dropping stale tick {epoch} (current {})", app.tick_epoch);
        return;
    }

    if let Some(next) = app.timer.tick() {
        info!(
            "Session finished, starting {next:?} ({} focus sessions completed)",
            app.timer.completed_focus()
        );
    }

    app.ticker.schedule(epoch);
}

pub(super) fn handle_resize(app: &mut App, width: u16, height: u16) {
    app.viewport = Size::new(width, height);
}

/// Configures the timer from the setup form and starts a new tick chain.
fn enter_running(app: &mut App) {
    let focus = app.setup.value(Field::Focus).unwrap_or_default();
    let short_break = app.setup.value(Field::ShortBreak).unwrap_or_default();
    let long_break = app.setup.value(Field::LongBreak);

    app.timer = timer::configure(focus, short_break, long_break);
    app.mode = Mode::Running;
    app.tick_epoch += 1;
    app.ticker.schedule(app.tick_epoch);

    let settings = app.timer.settings();
    info!(
        "Timer started: focus {:?}, break {:?}, long break {:?}",
        settings.focus, settings.short_break, settings.long_break
    );
}

fn enter_setup(app: &mut App) {
    app.mode = Mode::Setup;
    app.timer.clear();
    app.setup.focus_first();
    app.tick_epoch += 1;

    info!("Returned to setup");
}
