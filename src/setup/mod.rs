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

//! The setup form.
//!
//! One text input per configurable duration. Only the focused field receives
//! keystrokes; the timer reads the raw text of every field when the form is
//! confirmed.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::timer::{DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES, DEFAULT_LONG_BREAK_MINUTES};

/// Maximum number of characters accepted by a field.
const CHAR_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Field {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Field {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Field::Focus => "Focus session (minutes):",
            Field::ShortBreak => "Break session (minutes):",
            Field::LongBreak => "Long break session (minutes):",
        }
    }

    pub(crate) fn default_minutes(self) -> u32 {
        match self {
            Field::Focus => DEFAULT_FOCUS_MINUTES,
            Field::ShortBreak => DEFAULT_BREAK_MINUTES,
            Field::LongBreak => DEFAULT_LONG_BREAK_MINUTES,
        }
    }
}

pub(crate) struct FieldInput {
    pub(crate) field: Field,
    pub(crate) input: Input,
}

pub(crate) struct SetupForm {
    fields: Vec<FieldInput>,
    active: usize,
}

impl SetupForm {
    /// Creates an empty form, with a long break field only if `long_break`
    /// is set.
    pub(crate) fn new(long_break: bool) -> Self {
        let mut kinds = vec![Field::Focus, Field::ShortBreak];
        if long_break {
            kinds.push(Field::LongBreak);
        }

        Self {
            fields: kinds
                .into_iter()
                .map(|field| FieldInput {
                    field,
                    input: Input::default(),
                })
                .collect(),
            active: 0,
        }
    }

    pub(crate) fn fields(&self) -> &[FieldInput] {
        &self.fields
    }

    pub(crate) fn active_index(&self) -> usize {
        self.active
    }

    pub(crate) fn is_last_field(&self) -> bool {
        self.active + 1 == self.fields.len()
    }

    pub(crate) fn next_field(&mut self) {
        self.active = (self.active + 1) % self.fields.len();
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = (self.active + self.fields.len() - 1) % self.fields.len();
    }

    pub(crate) fn focus_first(&mut self) {
        self.active = 0;
    }

    /// Raw text of a field, or `None` if the form has no such field.
    pub(crate) fn value(&self, field: Field) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.input.value())
    }

    /// Delegates an event to the focused field, returning true if its text
    /// or cursor changed.
    pub(crate) fn handle_event(&mut self, event: &Event) -> bool {
        let input = &mut self.fields[self.active].input;

        if let Event::Key(key) = event {
            let typing = matches!(key.code, KeyCode::Char(_))
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
            if typing && input.value().chars().count() >= CHAR_LIMIT {
                return false;
            }
        }

        input.handle_event(event).is_some()
    }
}
