// =====
// TESTS: 4
// =====
//
// Controller tests.
// Validates event fan-out and connection state transitions.

use mqtt_lens::app::ConnectionState;
use mqtt_lens::error::AppError;
use mqtt_lens::mqtt::MqttEvent;
use pretty_assertions::assert_eq;

use crate::integration::helpers::{publish, test_app};

#[test]
fn each_message_feeds_tree_and_log_exactly_once() {
    let mut app = test_app();
    publish(&mut app, "sensors/kitchen/temp", b"21.5");
    publish(&mut app, "sensors/kitchen/temp", b"21.6");

    assert_eq!(app.total_messages, 2);
    let tree = app.navigator.tree();
    let node = tree.lookup("sensors/kitchen/temp").unwrap();
    assert_eq!(tree.node(node).message_count, 2);
    assert_eq!(app.history.entries().len(), 2);
}

#[test]
fn connection_state_follows_broker_events() {
    let mut app = test_app();
    assert_eq!(app.connection, ConnectionState::Connecting);

    mqtt_lens::app::handle_mqtt_event(&mut app, MqttEvent::Connected);
    assert_eq!(app.connection, ConnectionState::Connected);

    mqtt_lens::app::handle_mqtt_event(
        &mut app,
        MqttEvent::Disconnected("connection reset".to_owned()),
    );
    assert_eq!(app.connection, ConnectionState::Disconnected("connection reset".to_owned()));
}

#[test]
fn fatal_broker_error_requests_shutdown() {
    let mut app = test_app();
    mqtt_lens::app::handle_mqtt_event(
        &mut app,
        MqttEvent::Fatal(AppError::ConnectionFailed, "refused".to_owned()),
    );

    assert!(app.should_quit);
    assert_eq!(app.exit_error, Some(AppError::ConnectionFailed));
}

#[test]
fn root_node_is_named_after_the_broker() {
    let app = test_app();
    let tree = app.navigator.tree();
    assert_eq!(tree.node(tree.root()).name, "mqtt://test.local:1883");
}
