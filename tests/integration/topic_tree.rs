// =====
// TESTS: 9
// =====
//
// Topic tree structure tests.
// Validates ingest, path reconstruction, and filter-path resolution.

use mqtt_lens::topics::{ALL_TOPICS, TopicTree};
use pretty_assertions::assert_eq;

// --- Ingest ---

#[test]
fn ingest_is_structurally_idempotent() {
    let mut tree = TopicTree::new("mqtt://test.local:1883");
    tree.ingest("sensors/kitchen/temp");
    let count_after_first = tree.node_count();

    tree.ingest("sensors/kitchen/temp");
    tree.ingest("sensors/kitchen/temp");

    assert_eq!(tree.node_count(), count_after_first);
    let node = tree.lookup("sensors/kitchen/temp").unwrap();
    assert_eq!(tree.node(node).message_count, 3);
}

#[test]
fn message_count_lands_on_terminal_node_only() {
    let mut tree = TopicTree::new("broker");
    tree.ingest("a/b/c");

    assert_eq!(tree.node(tree.lookup("a").unwrap()).message_count, 0);
    assert_eq!(tree.node(tree.lookup("a/b").unwrap()).message_count, 0);
    assert_eq!(tree.node(tree.lookup("a/b/c").unwrap()).message_count, 1);

    // A later message on the intermediate path counts there, not below
    tree.ingest("a/b");
    assert_eq!(tree.node(tree.lookup("a/b").unwrap()).message_count, 1);
    assert_eq!(tree.node(tree.lookup("a/b/c").unwrap()).message_count, 1);
}

#[test]
fn empty_segments_are_skipped() {
    let mut tree = TopicTree::new("broker");
    tree.ingest("/a//b/");
    tree.ingest("a/b");

    assert_eq!(tree.lookup("a/b"), tree.lookup("/a//b/"));
    assert_eq!(tree.node(tree.lookup("a/b").unwrap()).message_count, 2);
    // root + a + b
    assert_eq!(tree.node_count(), 3);
}

#[test]
fn new_branches_auto_expand_ancestors_but_not_terminal() {
    let mut tree = TopicTree::new("broker");
    tree.ingest("a/b/c");

    assert!(tree.node(tree.lookup("a").unwrap()).open);
    assert!(tree.node(tree.lookup("a/b").unwrap()).open);
    assert!(!tree.node(tree.lookup("a/b/c").unwrap()).open);
}

#[test]
fn children_render_in_lexicographic_order_regardless_of_arrival() {
    let mut tree = TopicTree::new("broker");
    tree.ingest("a/b/c");
    tree.ingest("a/d");

    let snapshot = tree.snapshot(tree.root());
    assert_eq!(snapshot.children.len(), 1);
    let a = &snapshot.children[0];
    let names: Vec<&str> = a.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["b", "d"]);
}

// --- Path ---

#[test]
fn path_of_root_is_the_sentinel() {
    let tree = TopicTree::new("mqtt://127.0.0.1:1883");
    assert_eq!(tree.path(tree.root()), ALL_TOPICS);
}

#[test]
fn path_round_trips_through_resolve() {
    let mut tree = TopicTree::new("broker");
    for topic in ["a/b/c", "a/d", "x"] {
        tree.ingest(topic);
    }

    for topic in ["a", "a/b", "a/b/c", "a/d", "x"] {
        let node = tree.lookup(topic).unwrap();
        let path = tree.path(node);
        assert_eq!(path, topic);
        assert!(tree.resolve_path(&path));
        assert_eq!(tree.filtered(), Some(node));
    }
}

// --- resolve_path ---

#[test]
fn resolve_unknown_path_clears_the_mark() {
    let mut tree = TopicTree::new("broker");
    tree.ingest("a/b");
    assert!(tree.resolve_path("a/b"));
    assert!(tree.filtered().is_some());

    assert!(!tree.resolve_path("a/missing"));
    assert_eq!(tree.filtered(), None);

    assert!(!tree.resolve_path(ALL_TOPICS));
    assert_eq!(tree.filtered(), None);
}

#[test]
fn resolve_forces_the_path_open() {
    let mut tree = TopicTree::new("broker");
    tree.ingest("a/b/c");
    let a = tree.lookup("a").unwrap();
    let b = tree.lookup("a/b").unwrap();
    tree.set_open(a, false);
    tree.set_open(b, false);

    assert!(tree.resolve_path("a/b/c"));
    assert!(tree.node(a).open);
    assert!(tree.node(b).open);
}
