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

pub mod app;
pub mod error;
pub mod history;
pub mod mqtt;
pub mod topics;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mqtt-lens", about = "Terminal viewer for MQTT topic trees and live traffic")]
pub struct Cli {
    /// Broker URI (mqtt://host:port)
    #[arg(long, short, default_value = "mqtt://127.0.0.1:1883")]
    pub broker: String,

    /// Client ID presented to the broker
    #[arg(long, default_value = "mqtt-lens")]
    pub client_id: String,

    /// Subscription filter ("#" subscribes to everything)
    #[arg(long, short, default_value = "#")]
    pub topic: String,

    /// Write diagnostics to this file (tracing is disabled without it)
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (falls back to RUST_LOG, then "info")
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
