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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid broker URI")]
    InvalidBrokerUri,
    #[error("Broker connection failed")]
    ConnectionFailed,
    #[error("Subscription rejected by broker")]
    SubscribeFailed,
}

impl AppError {
    pub const INVALID_BROKER_URI_EXIT_CODE: i32 = 20;
    pub const CONNECTION_FAILED_EXIT_CODE: i32 = 21;
    pub const SUBSCRIBE_FAILED_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidBrokerUri => Self::INVALID_BROKER_URI_EXIT_CODE,
            Self::ConnectionFailed => Self::CONNECTION_FAILED_EXIT_CODE,
            Self::SubscribeFailed => Self::SUBSCRIBE_FAILED_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidBrokerUri => {
                "Invalid broker URI. Expected mqtt://host:port, e.g. mqtt://127.0.0.1:1883."
            }
            Self::ConnectionFailed => {
                "Could not establish the initial broker connection. Check that the broker is \
reachable and retry."
            }
            Self::SubscribeFailed => "The broker rejected the topic subscription.",
        }
    }
}
