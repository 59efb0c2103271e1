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

//! Validation of the minute values typed into the setup form.
//!
//! Invalid input is never reported to the user. Instead the default for the
//! field is substituted, and the reason is kept alongside the value so that
//! callers can tell an empty field apart from a corrected one.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum MinutesError {
    #[error("no value entered")]
    Empty,

    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("{0} is not a positive number of minutes")]
    NotPositive(i64),
}

/// A normalised minute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Minutes {
    pub(crate) value: u32,

    /// Why the default was used instead of the entered text, if it was.
    pub(crate) fallback: Option<MinutesError>,
}

impl Minutes {
    /// True if the default was used for any reason, including an empty field.
    pub(crate) fn was_defaulted(&self) -> bool {
        self.fallback.is_some()
    }

    /// True only if something was entered but it could not be used.
    pub(crate) fn was_corrected(&self) -> bool {
        matches!(
            self.fallback,
            Some(MinutesError::NotANumber(_) | MinutesError::NotPositive(_))
        )
    }
}

/// Parses a strictly positive whole number of minutes.
pub(crate) fn parse_minutes(text: &str) -> Result<u32, MinutesError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(MinutesError::Empty);
    }

    let value: i64 = text
        .parse()
        .map_err(|_| MinutesError::NotANumber(text.to_string()))?;

    if value <= 0 {
        return Err(MinutesError::NotPositive(value));
    }

    u32::try_from(value).map_err(|_| MinutesError::NotANumber(text.to_string()))
}

/// Parses `text`, substituting `default` when it is empty or invalid.
pub(crate) fn minutes_or_default(text: &str, default: u32) -> Minutes {
    match parse_minutes(text) {
        Ok(value) => Minutes {
            value,
            fallback: None,
        },
        Err(e) => Minutes {
            value: default,
            fallback: Some(e),
        },
    }
}
