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

use ratatui::style::Color;

// Tree pane
pub const NODE: Color = Color::Indexed(225);
pub const SELECTED: Color = Color::Indexed(212);
pub const FILTERED: Color = Color::Indexed(86);
pub const TOGGLE: Color = Color::Indexed(207);
pub const COUNT: Color = Color::Indexed(240);

// Toggle glyphs for branch nodes (root and leaves show none)
pub const GLYPH_CLOSED: &str = "▶";
pub const GLYPH_OPEN: &str = "▼";

// Chrome
pub const DIM: Color = Color::DarkGray;
pub const TOPIC_HEADER: Color = Color::Indexed(212);

// Connection state
pub const CONNECTING: Color = Color::Yellow;
pub const CONNECTED: Color = Color::Green;
pub const DISCONNECTED: Color = Color::Red;
