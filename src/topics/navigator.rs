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

use super::tree::{ALL_TOPICS, NodeId, NodeView, TopicTree};

/// Cursor over a [`TopicTree`] plus the active topic filter.
///
/// Movement follows "visible document order": the depth-first flattening of
/// the tree that only descends into open nodes. The cursor handle is the
/// single source of truth for selection; `toggle_filter_at_cursor` is the
/// only path by which the active filter changes.
#[derive(Debug)]
pub struct Navigator {
    tree: TopicTree,
    cursor: NodeId,
    filter: String,
}

impl Navigator {
    pub fn new(root_name: &str) -> Self {
        let tree = TopicTree::new(root_name);
        let cursor = tree.root();
        Self { tree, cursor, filter: ALL_TOPICS.to_owned() }
    }

    pub fn tree(&self) -> &TopicTree {
        &self.tree
    }

    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    pub fn active_filter(&self) -> &str {
        &self.filter
    }

    pub fn snapshot(&self) -> NodeView {
        self.tree.snapshot(self.cursor)
    }

    /// Feed one inbound topic into the tree. If the active filter named a
    /// path that did not exist yet, re-resolve it — the tree may just have
    /// grown the matching node.
    pub fn ingest(&mut self, topic: &str) {
        self.tree.ingest(topic);
        if self.filter != ALL_TOPICS && self.tree.filtered().is_none() {
            self.tree.resolve_path(&self.filter);
        }
    }

    /// Step to the next node in visible order. No wraparound: at the last
    /// visible node the cursor stays put.
    pub fn move_down(&mut self) {
        let node = self.tree.node(self.cursor);
        if node.open && !node.is_leaf() {
            if let Some(first) = self.tree.first_child(self.cursor) {
                self.cursor = first;
            }
            return;
        }
        let mut current = self.cursor;
        loop {
            if let Some(next) = self.tree.next_sibling(current) {
                self.cursor = next;
                return;
            }
            match self.tree.node(current).parent {
                Some(parent) => current = parent,
                None => return,
            }
        }
    }

    /// Step to the previous node in visible order. Mirrors `move_down`'s
    /// entry rule by landing on an open previous sibling's deepest open
    /// descendant, so Up and Down are inverses.
    pub fn move_up(&mut self) {
        let Some(parent) = self.tree.node(self.cursor).parent else {
            return;
        };
        match self.tree.prev_sibling(self.cursor) {
            Some(prev) => self.cursor = self.tree.deepest_open_descendant(prev),
            None => self.cursor = parent,
        }
    }

    pub fn open(&mut self) {
        self.tree.set_open(self.cursor, true);
    }

    /// Collapse the cursor node. A leaf has nothing of its own to collapse,
    /// so the parent is closed instead and the cursor relocates to it.
    pub fn close(&mut self) {
        let node = self.tree.node(self.cursor);
        if node.is_leaf()
            && let Some(parent) = node.parent
        {
            self.tree.set_open(parent, false);
            self.cursor = parent;
            return;
        }
        self.tree.set_open(self.cursor, false);
    }

    /// Toggle the active filter at the cursor's path: selecting the node
    /// whose path is already the filter resets to all topics. Returns the
    /// new filter for the caller to push to the history log.
    pub fn toggle_filter_at_cursor(&mut self) -> String {
        let mut path = self.tree.path(self.cursor);
        if path == self.filter {
            path = ALL_TOPICS.to_owned();
        }
        self.tree.resolve_path(&path);
        self.filter = path;
        self.filter.clone()
    }
}
