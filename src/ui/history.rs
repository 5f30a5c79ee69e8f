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

use super::theme;
use crate::app::{App, Focus};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::History;
    let follow = if app.history.auto_scroll() { " · follow" } else { "" };
    let title = format!(" Messages [{}{follow}] ", app.history.filter());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused { Style::default() } else { Style::default().fg(theme::DIM) })
        .title(title);
    let inner = block.inner(area);

    // Tell the log its viewport size before slicing, so "end of log" math
    // matches what is on screen.
    app.history.set_viewport_height(inner.height as usize);

    let scroll = app.history.scroll();
    let visible: Vec<Line> = app
        .history
        .lines()
        .iter()
        .skip(scroll)
        .take((inner.height as usize).max(1))
        .map(|line| style_line(line))
        .collect();

    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(visible), inner);
}

fn style_line(line: &str) -> Line<'static> {
    if let Some(topic) = line.strip_prefix("Topic: ") {
        return Line::from(vec![
            Span::styled("Topic: ", Style::default().fg(theme::DIM)),
            Span::styled(topic.to_owned(), Style::default().fg(theme::TOPIC_HEADER)),
        ]);
    }
    Line::from(line.to_owned())
}
