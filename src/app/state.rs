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

use crate::error::AppError;
use crate::history::HistoryLog;
use crate::mqtt::MqttEvent;
use crate::topics::Navigator;
use tokio::sync::mpsc;

/// Which pane owns keyboard input. Tab switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Topics,
    History,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Connected,
    Disconnected(String),
}

/// All mutable viewer state. Owned by the TUI task; every mutation happens
/// on that one task, serialized through the event loop.
pub struct App {
    pub navigator: Navigator,
    pub history: HistoryLog,
    pub focus: Focus,
    pub broker_uri: String,
    pub connection: ConnectionState,
    /// Total messages received since startup, across all topics.
    pub total_messages: u64,
    pub should_quit: bool,
    pub exit_error: Option<AppError>,
    pub event_tx: mpsc::UnboundedSender<MqttEvent>,
    pub event_rx: mpsc::UnboundedReceiver<MqttEvent>,
    /// Scroll offset of the topics pane, maintained by the renderer so the
    /// cursor row stays visible.
    pub topics_scroll: usize,
}

impl App {
    pub fn new(broker_uri: &str) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            navigator: Navigator::new(broker_uri),
            history: HistoryLog::new(),
            focus: Focus::Topics,
            broker_uri: broker_uri.to_owned(),
            connection: ConnectionState::Connecting,
            total_messages: 0,
            should_quit: false,
            exit_error: None,
            event_tx,
            event_rx,
            topics_scroll: 0,
        }
    }
}
