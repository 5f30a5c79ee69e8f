// =====
// TESTS: 8
// =====
//
// History log tests.
// Validates the filtered projection, render format, and scroll behavior.

use crossterm::event::KeyCode;
use mqtt_lens::history::HistoryLog;
use pretty_assertions::assert_eq;

use crate::integration::helpers::{press, publish, test_app};

#[test]
fn filter_prefix_is_segment_wise() {
    let mut log = HistoryLog::new();
    for topic in ["a/b", "a/b/c", "a/bc", "x"] {
        log.append(topic, b"{}");
    }

    log.set_filter("a/b");
    let topics: Vec<&str> = log.filtered_topics().collect();
    assert_eq!(topics, ["a/b", "a/b/c"]);
}

#[test]
fn filtered_view_preserves_append_order() {
    let mut log = HistoryLog::new();
    log.append("t/1", b"first");
    log.append("u/other", b"noise");
    log.append("t/2", b"second");

    log.set_filter("t");
    let topics: Vec<&str> = log.filtered_topics().collect();
    assert_eq!(topics, ["t/1", "t/2"]);
}

#[test]
fn entries_render_with_topic_header_and_blank_separator() {
    let mut log = HistoryLog::new();
    log.append("a", b"one");
    log.append("b", b"two");

    assert_eq!(log.lines(), ["Topic: a", "one", "", "Topic: b", "two"]);
}

#[test]
fn json_payloads_render_pretty_printed() {
    let mut log = HistoryLog::new();
    log.append("lamp", br#"{"on":true,"level":80}"#);

    let lines = log.lines().join("\n");
    assert!(lines.contains("\"on\": true"), "{lines}");
    assert!(lines.contains("\"level\": 80"), "{lines}");
}

// --- Scrolling ---

#[test]
fn append_pins_to_the_end_while_auto_scroll_is_on() {
    let mut log = HistoryLog::new();
    log.set_viewport_height(3);
    assert!(log.auto_scroll());

    for i in 0..10 {
        log.append(&format!("t/{i}"), b"x");
        assert_eq!(log.scroll(), log.max_scroll());
    }
}

#[test]
fn manual_scroll_disables_auto_scroll_until_reenabled() {
    let mut log = HistoryLog::new();
    log.set_viewport_height(3);
    for i in 0..10 {
        log.append(&format!("t/{i}"), b"x");
    }

    log.scroll_up(2);
    assert!(!log.auto_scroll());
    let held = log.scroll();

    log.append("t/late", b"x");
    assert_eq!(log.scroll(), held);

    log.goto_bottom();
    assert!(!log.auto_scroll());

    log.toggle_auto_scroll();
    assert!(log.auto_scroll());
    assert_eq!(log.scroll(), log.max_scroll());
}

#[test]
fn goto_top_and_bottom_hit_the_edges() {
    let mut log = HistoryLog::new();
    log.set_viewport_height(2);
    for i in 0..6 {
        log.append(&format!("t/{i}"), b"x");
    }

    log.goto_top();
    assert_eq!(log.scroll(), 0);
    log.goto_bottom();
    assert_eq!(log.scroll(), log.max_scroll());
}

// --- Through the app event pipeline ---

#[test]
fn history_keys_only_apply_when_the_pane_has_focus() {
    let mut app = test_app();
    for i in 0..20 {
        publish(&mut app, &format!("t/{i}"), b"x");
    }
    app.history.set_viewport_height(5);
    assert!(app.history.auto_scroll());

    // Topics pane focused: 'k' moves the cursor, not the log
    press(&mut app, KeyCode::Char('k'));
    assert!(app.history.auto_scroll());

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('k'));
    assert!(!app.history.auto_scroll());
}
