// mqtt-lens — A terminal viewer for MQTT topic trees and live message traffic
// Copyright (C) 2025  mqtt-lens contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod header;
mod history;
pub mod theme;
mod topics;

use crate::app::{App, Focus};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const TOPICS_PANE_WIDTH: u16 = 44;

pub fn render(frame: &mut Frame, app: &mut App) {
    let frame_area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(frame_area);

    header::render(frame, rows[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(TOPICS_PANE_WIDTH), Constraint::Min(0)])
        .split(rows[1]);
    topics::render(frame, body[0], app);
    history::render(frame, body[1], app);

    render_footer(frame, rows[2], app);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::Topics => "j/k move · enter open · bksp close · space filter · tab panes · q quit",
        Focus::History => "j/k scroll · u/d page · g/G ends · f follow · tab panes · q quit",
    };
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(theme::DIM)),
        Span::raw("  filter: "),
        Span::styled(app.navigator.active_filter().to_owned(), Style::default().fg(theme::FILTERED)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
