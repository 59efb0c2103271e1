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

//! The Pomodoro session state machine.
//!
//! A [`Timer`] cycles between focus and break sessions. Time only moves when
//! [`Timer::tick`] is called, once per second, by the event loop. Every
//! fourth completed focus session is followed by a long break, if the
//! configured [`TimerSettings`] support one.
//!
//! All operations are total: nothing here can fail, invalid configuration
//! text is replaced by defaults in [`configure`].

pub(crate) mod validate;

use std::time::Duration;

use log::{debug, warn};

use crate::timer::validate::minutes_or_default;

pub(crate) const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub(crate) const DEFAULT_BREAK_MINUTES: u32 = 5;
pub(crate) const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;

/// Completed focus sessions between long breaks.
pub(crate) const FOCUS_SESSIONS_PER_LONG_BREAK: u32 = 4;

const ONE_SECOND: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SessionKind {
    Focus,
    Break,
    LongBreak,
}

/// Session durations.
///
/// A `long_break` of `None` gives the two-session variant, where every focus
/// session is followed by a regular break.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TimerSettings {
    pub(crate) focus: Duration,
    pub(crate) short_break: Duration,
    pub(crate) long_break: Option<Duration>,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self::from_minutes(
            DEFAULT_FOCUS_MINUTES,
            DEFAULT_BREAK_MINUTES,
            Some(DEFAULT_LONG_BREAK_MINUTES),
        )
    }
}

impl TimerSettings {
    pub(crate) fn from_minutes(focus: u32, short_break: u32, long_break: Option<u32>) -> Self {
        Self {
            focus: minutes(focus),
            short_break: minutes(short_break),
            long_break: long_break.map(minutes),
        }
    }

    pub(crate) fn supports_long_break(&self) -> bool {
        self.long_break.is_some()
    }

    /// Full length of a session of the given kind.
    pub(crate) fn duration_of(&self, kind: SessionKind) -> Duration {
        match kind {
            SessionKind::Focus => self.focus,
            SessionKind::Break => self.short_break,
            SessionKind::LongBreak => self.long_break.unwrap_or(self.short_break),
        }
    }
}

fn minutes(value: u32) -> Duration {
    Duration::from_secs(u64::from(value) * 60)
}

/// Builds a running timer from the raw text of the setup fields.
///
/// Each value that is empty, not a number or not positive is replaced by its
/// default. Passing `None` for `long_break` disables long breaks altogether.
pub(crate) fn configure(focus: &str, short_break: &str, long_break: Option<&str>) -> Timer {
    let focus = checked_minutes("focus", focus, DEFAULT_FOCUS_MINUTES);
    let short_break = checked_minutes("break", short_break, DEFAULT_BREAK_MINUTES);
    let long_break =
        long_break.map(|text| checked_minutes("long break", text, DEFAULT_LONG_BREAK_MINUTES));

    Timer::start(TimerSettings::from_minutes(focus, short_break, long_break))
}

fn checked_minutes(field: &str, text: &str, default: u32) -> u32 {
    let minutes = minutes_or_default(text, default);
    match &minutes.fallback {
        Some(reason) if minutes.was_corrected() => {
            warn!("Using default of {default} minutes for {field}: {reason}");
        }
        _ if minutes.was_defaulted() => {
            debug!("No {field} entered, using default of {default} minutes");
        }
        _ => {}
    }
    minutes.value
}

#[derive(Debug, Clone)]
pub(crate) struct Timer {
    settings: TimerSettings,
    session: SessionKind,
    remaining: Duration,
    running: bool,
    completed_focus: u32,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}

impl Timer {
    /// A paused timer at the start of a focus session.
    pub(crate) fn new(settings: TimerSettings) -> Self {
        Self {
            settings,
            session: SessionKind::Focus,
            remaining: settings.focus,
            running: false,
            completed_focus: 0,
        }
    }

    /// A running timer at the start of a focus session.
    pub(crate) fn start(settings: TimerSettings) -> Self {
        Self {
            running: true,
            ..Self::new(settings)
        }
    }

    pub(crate) fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub(crate) fn session(&self) -> SessionKind {
        self.session
    }

    pub(crate) fn remaining(&self) -> Duration {
        self.remaining
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running
    }

    pub(crate) fn completed_focus(&self) -> u32 {
        self.completed_focus
    }

    /// Elapsed fraction of the current session, between 0 and 1.
    pub(crate) fn progress(&self) -> f64 {
        let total = self.settings.duration_of(self.session).as_secs_f64();
        if total <= 0.0 {
            return 0.0;
        }
        (1.0 - self.remaining.as_secs_f64() / total).clamp(0.0, 1.0)
    }

    /// Counts down one second.
    ///
    /// When the session runs out the next one starts within the same tick,
    /// and its kind is returned. Does nothing while paused.
    pub(crate) fn tick(&mut self) -> Option<SessionKind> {
        if !self.running || self.remaining.is_zero() {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(ONE_SECOND);
        if self.remaining.is_zero() {
            Some(self.advance())
        } else {
            None
        }
    }

    pub(crate) fn pause_resume(&mut self) {
        self.running = !self.running;
    }

    /// Restarts the current session from its full duration.
    ///
    /// The session kind, the completed count and the paused state are left
    /// alone, so resetting a paused timer leaves it paused.
    pub(crate) fn reset(&mut self) {
        self.remaining = self.settings.duration_of(self.session);
    }

    /// Ends the current session immediately and starts the next one running.
    pub(crate) fn skip(&mut self) -> SessionKind {
        let next = self.advance();
        self.running = true;
        next
    }

    /// Stops the timer and forgets completed sessions.
    pub(crate) fn clear(&mut self) {
        self.running = false;
        self.completed_focus = 0;
    }

    fn advance(&mut self) -> SessionKind {
        let next = match self.session {
            SessionKind::Focus => {
                self.completed_focus += 1;
                if self.settings.supports_long_break()
                    && self.completed_focus % FOCUS_SESSIONS_PER_LONG_BREAK == 0
                {
                    SessionKind::LongBreak
                } else {
                    SessionKind::Break
                }
            }
            SessionKind::Break | SessionKind::LongBreak => SessionKind::Focus,
        };

        debug!(
            "Session {:?} -> {:?} ({} focus sessions completed)",
            self.session, next, self.completed_focus
        );

        self.session = next;
        self.remaining = self.settings.duration_of(next);
        next
    }
}
