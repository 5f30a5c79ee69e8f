use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use mqtt_lens::app::App;
use mqtt_lens::mqtt::MqttEvent;

/// Build a minimal `App` for integration testing.
/// No real broker connection, no TUI -- just state.
pub fn test_app() -> App {
    App::new("mqtt://test.local:1883")
}

/// Helper: feed one inbound message through the app's event pipeline.
pub fn publish(app: &mut App, topic: &str, payload: &[u8]) {
    mqtt_lens::app::handle_mqtt_event(
        app,
        MqttEvent::Publish { topic: topic.to_owned(), payload: payload.to_vec() },
    );
}

/// Helper: press a key (no modifiers) through the terminal event pipeline.
pub fn press(app: &mut App, code: KeyCode) {
    mqtt_lens::app::handle_terminal_event(
        app,
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE)),
    );
}
