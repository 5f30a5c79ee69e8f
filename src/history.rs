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

use crate::topics::ALL_TOPICS;

/// One received message, rendered for display at append time and immutable
/// afterwards. Order of the log is receipt order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub topic: String,
    pub rendered: String,
}

/// Append-only message log with a derived filtered projection and viewport
/// scroll state. The active filter is pushed in from outside; the log never
/// changes it.
#[derive(Debug)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    /// Indices into `entries` that match the active filter.
    filtered: Vec<usize>,
    /// Display lines of the filtered projection, kept in sync with it.
    lines: Vec<String>,
    filter: String,
    auto_scroll: bool,
    /// Top visible line offset into `lines`.
    scroll: usize,
    /// Last known viewport height, fed in by the renderer on each frame.
    viewport_height: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            filtered: Vec::new(),
            lines: Vec::new(),
            filter: ALL_TOPICS.to_owned(),
            auto_scroll: true,
            scroll: 0,
            viewport_height: 0,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn filtered_topics(&self) -> impl Iterator<Item = &str> {
        self.filtered.iter().map(|&i| self.entries[i].topic.as_str())
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Append one received message. The payload is rendered once, here:
    /// JSON payloads are pretty-printed, anything else is shown as lossy
    /// UTF-8. Auto-scroll pins the viewport to the end.
    pub fn append(&mut self, topic: &str, payload: &[u8]) {
        let entry = HistoryEntry { topic: topic.to_owned(), rendered: render_payload(payload) };
        let index = self.entries.len();
        let matches = matches_filter(&self.filter, topic);
        self.entries.push(entry);
        if matches {
            self.filtered.push(index);
            self.push_entry_lines(index);
        }
        if self.auto_scroll {
            self.scroll = self.max_scroll();
        }
    }

    /// Replace the active filter and recompute the projection in one pass.
    pub fn set_filter(&mut self, path: &str) {
        self.filter = path.to_owned();
        self.filtered.clear();
        self.lines.clear();
        for index in 0..self.entries.len() {
            if matches_filter(&self.filter, &self.entries[index].topic) {
                self.filtered.push(index);
                self.push_entry_lines(index);
            }
        }
        self.clamp_scroll();
    }

    fn push_entry_lines(&mut self, index: usize) {
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let entry = &self.entries[index];
        self.lines.push(format!("Topic: {}", entry.topic));
        self.lines.extend(entry.rendered.lines().map(str::to_owned));
    }

    /// Fed by the renderer so "end of log" is computable between frames.
    pub fn set_viewport_height(&mut self, height: usize) {
        if self.viewport_height != height {
            self.viewport_height = height;
            self.scroll = if self.auto_scroll { self.max_scroll() } else { self.scroll.min(self.max_scroll()) };
        }
    }

    fn clamp_scroll(&mut self) {
        self.scroll =
            if self.auto_scroll { self.max_scroll() } else { self.scroll.min(self.max_scroll()) };
    }

    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_height)
    }

    pub fn toggle_auto_scroll(&mut self) {
        self.auto_scroll = !self.auto_scroll;
        if self.auto_scroll {
            self.scroll = self.max_scroll();
        }
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.auto_scroll = false;
        self.scroll = (self.scroll + n).min(self.max_scroll());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.max(1));
    }

    pub fn goto_top(&mut self) {
        self.auto_scroll = false;
        self.scroll = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.auto_scroll = false;
        self.scroll = self.max_scroll();
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Segment-wise prefix match: `a/b` matches `a/b` and `a/b/c` but never
/// `a/bc`. Empty segments on either side are skipped, mirroring ingest.
fn matches_filter(filter: &str, topic: &str) -> bool {
    if filter == ALL_TOPICS {
        return true;
    }
    let mut topic_segments = topic.split('/').filter(|s| !s.is_empty());
    filter
        .split('/')
        .filter(|s| !s.is_empty())
        .all(|want| topic_segments.next() == Some(want))
}

fn render_payload(payload: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(payload)
        && let Ok(pretty) = serde_json::to_string_pretty(&value)
    {
        return pretty;
    }
    String::from_utf8_lossy(payload).into_owned()
}
