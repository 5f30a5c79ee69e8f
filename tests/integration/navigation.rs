// =====
// TESTS: 9
// =====
//
// Cursor movement tests over visible document order.
// Validates the outliner step semantics and open/close handling.

use mqtt_lens::topics::Navigator;
use pretty_assertions::assert_eq;

fn nav_with(topics: &[&str]) -> Navigator {
    let mut nav = Navigator::new("broker");
    for topic in topics {
        nav.ingest(topic);
    }
    nav
}

fn cursor_path(nav: &Navigator) -> String {
    nav.tree().path(nav.cursor())
}

// --- Down ---

#[test]
fn move_down_walks_the_expanded_tree_in_order() {
    let mut nav = nav_with(&["a/b/c", "a/d"]);
    assert_eq!(cursor_path(&nav), "#");

    nav.move_down();
    assert_eq!(cursor_path(&nav), "a");
    nav.move_down();
    assert_eq!(cursor_path(&nav), "a/b");
    nav.move_down();
    assert_eq!(cursor_path(&nav), "a/b/c");
    // c: no children, no next sibling, parent b has no next sibling,
    // grandparent a has d
    nav.move_down();
    assert_eq!(cursor_path(&nav), "a/d");
}

#[test]
fn move_down_stops_at_the_last_visible_node() {
    let mut nav = nav_with(&["a"]);
    nav.move_down();
    assert_eq!(cursor_path(&nav), "a");
    nav.move_down();
    assert_eq!(cursor_path(&nav), "a");
}

#[test]
fn move_down_skips_collapsed_subtrees() {
    let mut nav = nav_with(&["a/b/c", "a/d"]);
    nav.move_down();
    nav.move_down();
    assert_eq!(cursor_path(&nav), "a/b");

    nav.close();
    nav.move_down();
    assert_eq!(cursor_path(&nav), "a/d");
}

// --- Up ---

#[test]
fn move_up_is_a_noop_at_root() {
    let mut nav = nav_with(&["a"]);
    nav.move_up();
    assert_eq!(cursor_path(&nav), "#");
}

#[test]
fn move_up_lands_on_deepest_open_descendant_of_previous_sibling() {
    let mut nav = nav_with(&["a/b/c", "a/d"]);
    for _ in 0..4 {
        nav.move_down();
    }
    assert_eq!(cursor_path(&nav), "a/d");

    // Previous sibling b is open, so land on its deepest open child
    nav.move_up();
    assert_eq!(cursor_path(&nav), "a/b/c");

    // With b collapsed, land on b itself
    let mut nav = nav_with(&["a/b/c", "a/d"]);
    nav.move_down();
    nav.move_down();
    nav.close(); // collapse b
    nav.move_down();
    assert_eq!(cursor_path(&nav), "a/d");
    nav.move_up();
    assert_eq!(cursor_path(&nav), "a/b");
}

#[test]
fn up_and_down_are_inverses_over_visible_order() {
    let mut nav = nav_with(&["home/kitchen/temp", "home/kitchen/humidity", "home/hall/motion", "office/co2"]);

    for steps in 1..=8 {
        let mut nav_walk = nav_with(&[
            "home/kitchen/temp",
            "home/kitchen/humidity",
            "home/hall/motion",
            "office/co2",
        ]);
        for _ in 0..steps {
            nav_walk.move_down();
        }
        for _ in 0..steps {
            nav_walk.move_up();
        }
        assert_eq!(nav_walk.tree().path(nav_walk.cursor()), "#", "steps = {steps}");
    }

    // Same property from a non-root start
    nav.move_down();
    let start = nav.cursor();
    nav.move_down();
    nav.move_down();
    nav.move_up();
    nav.move_up();
    assert_eq!(nav.cursor(), start);
}

// --- Open / Close ---

#[test]
fn close_on_a_leaf_collapses_the_parent_and_relocates() {
    let mut nav = nav_with(&["a/b/c"]);
    nav.move_down();
    nav.move_down();
    nav.move_down();
    assert_eq!(cursor_path(&nav), "a/b/c");

    nav.close();
    assert_eq!(cursor_path(&nav), "a/b");
    assert!(!nav.tree().node(nav.cursor()).open);
}

#[test]
fn close_on_root_collapses_the_root_in_place() {
    let mut nav = nav_with(&["a/b"]);
    assert_eq!(cursor_path(&nav), "#");

    // Root has children, so the leaf rule does not apply and there is no
    // parent to relocate to
    nav.close();
    assert_eq!(cursor_path(&nav), "#");
    assert!(!nav.tree().node(nav.cursor()).open);

    nav.open();
    assert!(nav.tree().node(nav.cursor()).open);
}

#[test]
fn open_and_close_toggle_the_cursor_node() {
    let mut nav = nav_with(&["a/b"]);
    nav.move_down();
    assert_eq!(cursor_path(&nav), "a");

    nav.close();
    assert_eq!(cursor_path(&nav), "a");
    assert!(!nav.tree().node(nav.cursor()).open);

    nav.open();
    assert!(nav.tree().node(nav.cursor()).open);
}
