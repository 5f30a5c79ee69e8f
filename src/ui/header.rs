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
use crate::app::{App, ConnectionState};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (state_label, state_color) = match &app.connection {
        ConnectionState::Connecting => ("connecting".to_owned(), theme::CONNECTING),
        ConnectionState::Connected => ("connected".to_owned(), theme::CONNECTED),
        ConnectionState::Disconnected(reason) => {
            (format!("disconnected: {reason}"), theme::DISCONNECTED)
        }
    };

    let line = Line::from(vec![
        Span::styled(" mqtt-lens ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(app.broker_uri.clone(), Style::default().fg(theme::DIM)),
        Span::raw("  "),
        Span::styled(state_label, Style::default().fg(state_color)),
        Span::raw("  "),
        Span::styled(
            format!("{} messages", app.total_messages),
            Style::default().fg(theme::COUNT),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
