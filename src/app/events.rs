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

use super::keys::handle_key;
use super::state::{App, ConnectionState};
use crate::mqtt::MqttEvent;
use crossterm::event::{Event, KeyEventKind};

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key(app, key);
        }
        // Resize is handled automatically by ratatui
        _ => {}
    }
}

/// Fan one broker event into both sides of the viewer: the topic tree grows
/// a node path and counts the message, the history log appends the entry.
/// Exactly one ingest/append pair per received message.
pub fn handle_mqtt_event(app: &mut App, event: MqttEvent) {
    match event {
        MqttEvent::Publish { topic, payload } => {
            app.total_messages += 1;
            app.navigator.ingest(&topic);
            app.history.append(&topic, &payload);
        }
        MqttEvent::Connected => {
            app.connection = ConnectionState::Connected;
        }
        MqttEvent::Disconnected(reason) => {
            app.connection = ConnectionState::Disconnected(reason);
        }
        MqttEvent::Fatal(error, detail) => {
            tracing::error!(%error, detail, "fatal broker error");
            app.exit_error = Some(error);
            app.should_quit = true;
        }
    }
}
