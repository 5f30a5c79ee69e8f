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

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// The filter value meaning "all topics" — also the MQTT match-everything
/// wildcard, so it doubles as the default subscription filter.
pub const ALL_TOPICS: &str = "#";

/// Handle into the tree's node arena. Nodes are never removed, so a handle
/// stays valid for the life of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
pub struct TopicNode {
    pub name: String,
    pub parent: Option<NodeId>,
    /// Children keyed by segment name. `BTreeMap` keeps display and
    /// navigation order lexicographic regardless of arrival order.
    pub children: BTreeMap<String, NodeId>,
    pub open: bool,
    /// Messages whose topic resolves exactly to this node's path.
    pub message_count: u64,
}

impl TopicNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Read-only display structure handed to the renderer. Children of a closed
/// node are still present but marked hidden, so the renderer only decides
/// styling, never structure.
#[derive(Debug)]
pub struct NodeView {
    pub name: String,
    pub depth: usize,
    pub root: bool,
    pub open: bool,
    pub selected: bool,
    pub filtered: bool,
    pub hidden: bool,
    pub message_count: u64,
    pub topic_count: usize,
    pub children: Vec<NodeView>,
}

/// Hierarchical topic namespace, incrementally built from ingested topic
/// strings. Nodes live in an arena and are addressed by `NodeId`; parent
/// links are plain handles, so there are no ownership cycles.
#[derive(Debug)]
pub struct TopicTree {
    nodes: Vec<TopicNode>,
    root: NodeId,
    /// The node whose path equals the active filter, if that path currently
    /// exists in the tree. At most one node is ever marked.
    filtered: Option<NodeId>,
}

fn segments(topic: &str) -> impl Iterator<Item = &str> {
    // Leading, doubled, and trailing separators produce empty segments;
    // those never become nodes.
    topic.split('/').filter(|s| !s.is_empty())
}

impl TopicTree {
    /// `root_name` is the broker/endpoint identifier, not a topic segment.
    pub fn new(root_name: &str) -> Self {
        let root = TopicNode {
            name: root_name.to_owned(),
            parent: None,
            children: BTreeMap::new(),
            open: true,
            message_count: 0,
        };
        Self { nodes: vec![root], root: NodeId(0), filtered: None }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &TopicNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TopicNode {
        &mut self.nodes[id.0]
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn filtered(&self) -> Option<NodeId> {
        self.filtered
    }

    pub fn set_open(&mut self, id: NodeId, open: bool) {
        self.node_mut(id).open = open;
    }

    /// Walk/create nodes for each segment of `topic` and count the message
    /// on the terminal node. A node gaining a child is forced open so fresh
    /// branches are visible as they appear; nothing is ever auto-closed.
    pub fn ingest(&mut self, topic: &str) -> NodeId {
        let mut current = self.root;
        for segment in segments(topic) {
            if let Some(&child) = self.node(current).children.get(segment) {
                current = child;
            } else {
                let id = NodeId(self.nodes.len());
                self.nodes.push(TopicNode {
                    name: segment.to_owned(),
                    parent: Some(current),
                    children: BTreeMap::new(),
                    open: false,
                    message_count: 0,
                });
                let parent = self.node_mut(current);
                parent.children.insert(segment.to_owned(), id);
                parent.open = true;
                current = id;
            }
        }
        self.node_mut(current).message_count += 1;
        current
    }

    /// Slash-joined path from root to `id`. The root itself maps to the
    /// all-topics sentinel.
    pub fn path(&self, id: NodeId) -> String {
        if id == self.root {
            return ALL_TOPICS.to_owned();
        }
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == self.root {
                break;
            }
            let node = self.node(cur);
            parts.push(node.name.as_str());
            current = node.parent;
        }
        parts.reverse();
        parts.join("/")
    }

    /// Find the node at `path`, if the tree has grown to contain it.
    pub fn lookup(&self, path: &str) -> Option<NodeId> {
        let mut current = self.root;
        for segment in segments(path) {
            current = *self.node(current).children.get(segment)?;
        }
        Some(current)
    }

    /// Mark the node at `path` as the filtered node and force every node on
    /// the path open. The sentinel or an unknown path clears the mark and
    /// returns false — for unknown paths this is a transient state until a
    /// later ingest creates the matching node.
    pub fn resolve_path(&mut self, path: &str) -> bool {
        self.filtered = None;
        if path == ALL_TOPICS {
            return false;
        }
        let Some(target) = self.lookup(path) else {
            return false;
        };
        let mut current = Some(target);
        while let Some(cur) = current {
            let node = self.node_mut(cur);
            node.open = true;
            current = node.parent;
        }
        self.filtered = Some(target);
        true
    }

    /// Follow the last (sorted-order) child while the current node is open
    /// and has children. Lands the cursor correctly when stepping backward
    /// over an expanded sibling.
    pub fn deepest_open_descendant(&self, id: NodeId) -> NodeId {
        let mut current = id;
        loop {
            let node = self.node(current);
            if !node.open || node.children.is_empty() {
                return current;
            }
            match node.children.values().next_back() {
                Some(&last) => current = last,
                None => return current,
            }
        }
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.values().next().copied()
    }

    /// The sibling that follows `id` in sorted order, if any.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        let parent = self.node(node.parent?);
        parent
            .children
            .range::<str, _>((Excluded(node.name.as_str()), Unbounded))
            .next()
            .map(|(_, &id)| id)
    }

    /// The sibling that precedes `id` in sorted order, if any.
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        let parent = self.node(node.parent?);
        parent
            .children
            .range::<str, _>((Unbounded, Excluded(node.name.as_str())))
            .next_back()
            .map(|(_, &id)| id)
    }

    /// Build the display structure. `selected` is the cursor node; the
    /// selected/filtered flags are materialized here from the central
    /// handles, so at most one node carries each.
    pub fn snapshot(&self, selected: NodeId) -> NodeView {
        self.view_of(self.root, 0, false, selected)
    }

    fn view_of(&self, id: NodeId, depth: usize, hidden: bool, selected: NodeId) -> NodeView {
        let node = self.node(id);
        let children_hidden = hidden || !node.open;
        NodeView {
            name: node.name.clone(),
            depth,
            root: id == self.root,
            open: node.open,
            selected: id == selected,
            filtered: self.filtered == Some(id),
            hidden,
            message_count: node.message_count,
            topic_count: node.children.len(),
            children: node
                .children
                .values()
                .map(|&child| self.view_of(child, depth + 1, children_hidden, selected))
                .collect(),
        }
    }
}
