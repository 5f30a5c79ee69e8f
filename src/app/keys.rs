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

use super::state::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const LINE_SCROLL: usize = 1;

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char_shortcut(key, 'c') || matches!(key.code, KeyCode::Char('q')) {
        app.should_quit = true;
        return;
    }
    if key.code == KeyCode::Tab {
        app.focus = match app.focus {
            Focus::Topics => Focus::History,
            Focus::History => Focus::Topics,
        };
        return;
    }
    match app.focus {
        Focus::Topics => handle_topics_key(app, key),
        Focus::History => handle_history_key(app, key),
    }
}

fn handle_topics_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.navigator.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.navigator.move_up(),
        KeyCode::Char('l') | KeyCode::Enter => app.navigator.open(),
        KeyCode::Char('h') | KeyCode::Backspace => app.navigator.close(),
        KeyCode::Char(' ') => {
            // The only path by which the active filter changes.
            let filter = app.navigator.toggle_filter_at_cursor();
            app.history.set_filter(&filter);
        }
        _ => {}
    }
}

fn handle_history_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('f') => app.history.toggle_auto_scroll(),
        KeyCode::Char('j') | KeyCode::Down => app.history.scroll_down(LINE_SCROLL),
        KeyCode::Char('k') | KeyCode::Up => app.history.scroll_up(LINE_SCROLL),
        KeyCode::Char('d') | KeyCode::PageDown => app.history.page_down(),
        KeyCode::Char('u') | KeyCode::PageUp => app.history.page_up(),
        KeyCode::Char('g') | KeyCode::Home => app.history.goto_top(),
        KeyCode::Char('G') | KeyCode::End => app.history.goto_bottom(),
        _ => {}
    }
}
