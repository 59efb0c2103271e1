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

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph},
};

use crate::{
    App,
    render::{centered, draw_compact, fits, icons::ICON_FOCUS},
};

const FORM_WIDTH: u16 = 50;

pub(crate) fn draw_setup(f: &mut Frame, app: &App) {
    let fields = app.setup.fields();

    // Title and blank line, label and input box per field, blank line and help
    let height = 2 + 4 * fields.len() as u16 + 2;

    if !fits(app, FORM_WIDTH, height) {
        draw_compact(f, app, Line::from("Enlarge the terminal to configure the timer"));
        return;
    }

    let area = centered(f.area(), FORM_WIDTH, height);

    let mut constraints = vec![Constraint::Length(2)];
    for _ in fields {
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::vertical(constraints).split(area);

    let title = Line::from(format!("{} POMODORO TIMER", ICON_FOCUS))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .fg(app.theme.title_colour);
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[0]);

    for (idx, field_input) in fields.iter().enumerate() {
        let label_area = chunks[1 + idx * 2];
        let input_area = chunks[2 + idx * 2];
        let active = idx == app.setup.active_index();

        let label = Line::from(field_input.field.label())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .fg(app.theme.label_colour);
        f.render_widget(Paragraph::new(label), label_area);

        let border_colour = if active {
            app.theme.accent_colour
        } else {
            app.theme.border_colour
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));
        let inner_area = block.inner(input_area);

        let value = field_input.input.value();
        let text = if value.is_empty() {
            // Empty fields show the default they will fall back to
            Span::styled(
                field_input.field.default_minutes().to_string(),
                Style::default().fg(app.theme.help_colour),
            )
        } else {
            Span::raw(value)
        };
        f.render_widget(Paragraph::new(text).block(block), input_area);

        if active {
            let cursor_x = inner_area.x + field_input.input.visual_cursor() as u16;
            f.set_cursor_position((cursor_x, inner_area.y));
        }
    }

    let help = Line::from("Tab: switch field \u{2022} Enter: next/start \u{2022} Q: quit")
        .style(Style::default().add_modifier(Modifier::ITALIC))
        .fg(app.theme.help_colour);
    f.render_widget(
        Paragraph::new(help).alignment(Alignment::Center),
        chunks[chunks.len() - 1],
    );
}
