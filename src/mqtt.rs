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
use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use std::time::Duration;
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 64;
const KEEP_ALIVE: Duration = Duration::from_secs(30);
const RECONNECT_DELAY: Duration = Duration::from_secs(1);

/// Events handed from the broker task to the core. Immutable values over a
/// channel — the two sides never share mutable state.
#[derive(Debug)]
pub enum MqttEvent {
    Connected,
    Disconnected(String),
    Publish { topic: String, payload: Vec<u8> },
    /// Unrecoverable failure; the core should shut down with this error.
    Fatal(AppError, String),
}

#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    pub client_id: String,
    /// Subscription filter; `"#"` subscribes to everything.
    pub subscribe_filter: String,
}

impl BrokerConfig {
    pub fn from_cli(cli: &crate::Cli) -> Result<Self, AppError> {
        let (host, port) = parse_broker_uri(&cli.broker)?;
        Ok(Self {
            host,
            port,
            client_id: cli.client_id.clone(),
            subscribe_filter: cli.topic.clone(),
        })
    }
}

const DEFAULT_PORT: u16 = 1883;

/// Accepts `mqtt://host:port`, `mqtt://host` (default port 1883), or a bare
/// `host[:port]`. IPv6 literals use brackets when a port follows
/// (`mqtt://[::1]:1883`); a bare literal (`::1`) takes the default port.
pub fn parse_broker_uri(uri: &str) -> Result<(String, u16), AppError> {
    let rest = uri.strip_prefix("mqtt://").unwrap_or(uri);
    if rest.is_empty() || rest.contains('/') {
        return Err(AppError::InvalidBrokerUri);
    }
    if let Some(after) = rest.strip_prefix('[') {
        let Some((host, tail)) = after.split_once(']') else {
            return Err(AppError::InvalidBrokerUri);
        };
        if host.is_empty() {
            return Err(AppError::InvalidBrokerUri);
        }
        return match tail.strip_prefix(':') {
            Some(port) => {
                let port = port.parse::<u16>().map_err(|_| AppError::InvalidBrokerUri)?;
                Ok((host.to_owned(), port))
            }
            None if tail.is_empty() => Ok((host.to_owned(), DEFAULT_PORT)),
            None => Err(AppError::InvalidBrokerUri),
        };
    }
    // More than one colon and no brackets: an IPv6 literal, not host:port
    if rest.matches(':').count() > 1 {
        return Ok((rest.to_owned(), DEFAULT_PORT));
    }
    match rest.rsplit_once(':') {
        Some((host, port)) => {
            if host.is_empty() {
                return Err(AppError::InvalidBrokerUri);
            }
            let port = port.parse::<u16>().map_err(|_| AppError::InvalidBrokerUri)?;
            Ok((host.to_owned(), port))
        }
        None => Ok((rest.to_owned(), DEFAULT_PORT)),
    }
}

/// Spawn the broker pump. It connects, subscribes on every ConnAck (so the
/// subscription survives reconnects), and forwards publishes to the core.
/// Errors before the first successful connection are fatal; later ones are
/// reported and retried with a fixed delay. The task ends when the core
/// drops its receiver.
pub fn spawn_client(config: BrokerConfig, tx: mpsc::UnboundedSender<MqttEvent>) {
    tokio::spawn(run_client(config, tx));
}

async fn run_client(config: BrokerConfig, tx: mpsc::UnboundedSender<MqttEvent>) {
    let mut options = MqttOptions::new(&config.client_id, &config.host, config.port);
    options.set_keep_alive(KEEP_ALIVE);
    let (client, mut event_loop) = AsyncClient::new(options, CHANNEL_CAPACITY);

    let mut ever_connected = false;
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                tracing::info!(host = %config.host, port = config.port, "connected");
                ever_connected = true;
                if tx.send(MqttEvent::Connected).is_err() {
                    return;
                }
                if let Err(err) =
                    client.subscribe(&config.subscribe_filter, QoS::AtMostOnce).await
                {
                    let _ = tx.send(MqttEvent::Fatal(AppError::SubscribeFailed, err.to_string()));
                    return;
                }
                tracing::info!(filter = %config.subscribe_filter, "subscribed");
            }
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                let event = MqttEvent::Publish {
                    topic: publish.topic.clone(),
                    payload: publish.payload.to_vec(),
                };
                if tx.send(event).is_err() {
                    return;
                }
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = %err, "broker connection lost");
                if !ever_connected {
                    let _ =
                        tx.send(MqttEvent::Fatal(AppError::ConnectionFailed, err.to_string()));
                    return;
                }
                if tx.send(MqttEvent::Disconnected(err.to_string())).is_err() {
                    return;
                }
                tokio::time::sleep(RECONNECT_DELAY).await;
            }
        }
    }
}
