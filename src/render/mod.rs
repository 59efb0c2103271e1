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

//! Drawing of the setup form and the running timer.
//!
//! Rendering only reads application state. Both views are centred in the
//! viewport and fall back to a single line when the terminal is too small to
//! hold them.

mod icons;
mod running;
mod setup;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::{App, Mode};

pub(crate) fn draw(f: &mut Frame, app: &App) {
    match app.mode {
        Mode::Setup => setup::draw_setup(f, app),
        Mode::Running => running::draw_running(f, app),
    }
}

/// Returns a `width` by `height` area centred within `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn fits(app: &App, width: u16, height: u16) -> bool {
    app.viewport.width >= width && app.viewport.height >= height
}

fn draw_compact(f: &mut Frame, app: &App, line: Line) {
    let area = f.area();
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);

    f.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.timer_colour)),
        row,
    );
}
