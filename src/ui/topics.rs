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
use crate::topics::NodeView;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Topics;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused { Style::default() } else { Style::default().fg(theme::DIM) })
        .title(" Topics ");
    let inner = block.inner(area);

    let snapshot = app.navigator.snapshot();
    let mut lines = Vec::new();
    let mut cursor_row = 0;
    flatten(&snapshot, &mut lines, &mut cursor_row);

    // Keep the cursor row inside the viewport
    let height = inner.height as usize;
    if cursor_row < app.topics_scroll {
        app.topics_scroll = cursor_row;
    } else if height > 0 && cursor_row >= app.topics_scroll + height {
        app.topics_scroll = cursor_row + 1 - height;
    }

    let visible: Vec<Line> =
        lines.into_iter().skip(app.topics_scroll).take(height.max(1)).collect();
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(visible), inner);
}

/// Depth-first flattening into display rows, descending only into subtrees
/// the snapshot left visible. Records which row holds the cursor.
fn flatten(view: &NodeView, lines: &mut Vec<Line<'static>>, cursor_row: &mut usize) {
    if view.hidden {
        return;
    }
    if view.selected {
        *cursor_row = lines.len();
    }
    lines.push(row_line(view));
    for child in &view.children {
        flatten(child, lines, cursor_row);
    }
}

fn row_line(view: &NodeView) -> Line<'static> {
    let mut spans = Vec::new();
    if view.depth > 0 {
        spans.push(Span::raw("  ".repeat(view.depth - 1)));
    }

    // Root and leaf nodes don't show toggle indicators
    if !view.root && view.topic_count > 0 {
        let glyph = if view.open { theme::GLYPH_OPEN } else { theme::GLYPH_CLOSED };
        spans.push(Span::styled(format!("{glyph} "), Style::default().fg(theme::TOGGLE)));
    }

    let name_style = if view.selected {
        Style::default().fg(theme::SELECTED).add_modifier(Modifier::BOLD)
    } else if view.filtered {
        Style::default().fg(theme::FILTERED).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::NODE)
    };
    spans.push(Span::styled(view.name.clone(), name_style));

    let count_style = Style::default().fg(theme::COUNT);
    if !view.root && view.topic_count > 0 {
        spans.push(Span::styled(format!(" ({} topics)", view.topic_count), count_style));
    }
    if view.message_count > 0 {
        spans.push(Span::styled(format!(" ({} messages)", view.message_count), count_style));
    }

    Line::from(spans)
}
