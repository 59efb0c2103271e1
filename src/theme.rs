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

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) title_colour: Color,
    pub(crate) label_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) help_colour: Color,

    pub(crate) session_colour: Color,
    pub(crate) timer_colour: Color,
    pub(crate) button_fg: Color,
    pub(crate) button_bg: Color,
    pub(crate) gauge_track_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            title_colour: Color::Rgb(255, 107, 107),
            label_colour: Color::Rgb(149, 225, 211),
            accent_colour: Color::Rgb(78, 205, 196),
            border_colour: Color::Rgb(102, 102, 102),
            help_colour: Color::Rgb(153, 153, 153),

            session_colour: Color::Rgb(255, 230, 109),
            timer_colour: Color::Rgb(78, 205, 196),
            button_fg: Color::Rgb(0, 0, 0),
            button_bg: Color::Rgb(78, 205, 196),
            gauge_track_colour: Color::Rgb(50, 50, 60),
        }
    }
}
