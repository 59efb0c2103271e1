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
    widgets::{Block, BorderType, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    render::{
        centered, draw_compact, fits,
        icons::{
            ICON_BREAK, ICON_FOCUS, ICON_LONG_BREAK, ICON_PAUSE, ICON_PLAY, ICON_RESET, ICON_SKIP,
        },
    },
    timer::SessionKind,
    util::format::format_time,
};

const BOX_WIDTH: u16 = 50;
const BOX_HEIGHT: u16 = 15;

fn session_label(kind: SessionKind) -> (&'static str, &'static str) {
    match kind {
        SessionKind::Focus => (ICON_FOCUS, "FOCUS"),
        SessionKind::Break => (ICON_BREAK, "BREAK"),
        SessionKind::LongBreak => (ICON_LONG_BREAK, "LONG BREAK"),
    }
}

pub(crate) fn draw_running(f: &mut Frame, app: &App) {
    let timer = &app.timer;
    let (icon, label) = session_label(timer.session());
    let time = format_time(timer.remaining());

    if !fits(app, BOX_WIDTH, BOX_HEIGHT) {
        let state = if timer.is_running() { "" } else { " (paused)" };
        draw_compact(f, app, Line::from(format!("{icon} {label} {time}{state}")));
        return;
    }

    let area = centered(f.area(), BOX_WIDTH, BOX_HEIGHT);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.title_colour))
        .padding(Padding::new(2, 2, 1, 1));
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner_area);

    let session = Line::from(format!("{icon} {label}"))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .fg(app.theme.session_colour);
    f.render_widget(Paragraph::new(session).alignment(Alignment::Center), chunks[0]);

    let countdown = Line::from(time)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .fg(app.theme.timer_colour);
    f.render_widget(Paragraph::new(countdown).alignment(Alignment::Center), chunks[2]);

    let progress = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(timer.progress())
        .label("")
        .use_unicode(true);
    f.render_widget(progress, chunks[4]);

    let button_style = Style::default()
        .fg(app.theme.button_fg)
        .bg(app.theme.button_bg)
        .add_modifier(Modifier::BOLD);

    let play_pause = if timer.is_running() {
        format!(" {ICON_PAUSE} Pause (P) ")
    } else {
        format!(" {ICON_PLAY} Start (P) ")
    };

    let buttons = Line::from(vec![
        Span::styled(play_pause, button_style),
        Span::raw(" "),
        Span::styled(format!(" {ICON_RESET} Reset (R) "), button_style),
        Span::raw(" "),
        Span::styled(format!(" {ICON_SKIP} Skip (S) "), button_style),
    ]);
    f.render_widget(Paragraph::new(buttons).alignment(Alignment::Center), chunks[6]);

    let stats = Line::from(format!("Completed sessions: {}", timer.completed_focus()))
        .fg(app.theme.label_colour);
    f.render_widget(Paragraph::new(stats).alignment(Alignment::Center), chunks[8]);

    let help = Line::from("Q: quit \u{2022} N: new configuration")
        .style(Style::default().add_modifier(Modifier::ITALIC))
        .fg(app.theme.help_colour);
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), chunks[10]);
}
