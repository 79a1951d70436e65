use std::thread;
use std::time::Duration;

use passmith::charset::{CharClass, ClassToggles};
use passmith::engine::*;
use passmith::passgen::GenerationConfig;
use passmith::strength::StrengthResult;

/// Records every collaborator call so tests can assert on the pass.
#[derive(Default)]
struct RecordingFrontend {
    passwords: Vec<String>,
    strengths: Vec<StrengthResult>,
    notices: Vec<(NoticeKind, String)>,
    copied: Vec<String>,
}

impl Frontend for RecordingFrontend {
    fn show_password(&mut self, password: &str) {
        self.passwords.push(password.to_owned());
    }

    fn show_strength(&mut self, strength: &StrengthResult) {
        self.strengths.push(*strength);
    }

    fn notify(&mut self, kind: NoticeKind, message: &str) {
        self.notices.push((kind, message.to_owned()));
    }

    fn copy(&mut self, secret: &str) {
        self.copied.push(secret.to_owned());
    }
}

fn engine_with_default_config() -> Engine<RecordingFrontend> {
    Engine::new(GenerationConfig::default(), RecordingFrontend::default())
}

#[test]
fn test_generate_request_renders_password_and_strength() {
    let mut engine = engine_with_default_config();
    engine.handle(Event::GenerateRequested);

    assert_eq!(engine.frontend().passwords.len(), 1);
    assert_eq!(engine.frontend().strengths.len(), 1);
    assert_eq!(
        engine.current_password(),
        Some(engine.frontend().passwords[0].as_str())
    );
}

#[test]
fn test_class_toggle_triggers_immediate_regenerate() {
    let mut engine = engine_with_default_config();
    engine.handle(Event::ClassToggled(CharClass::Symbols, false));

    assert!(!engine.config().classes.symbols);
    assert_eq!(engine.frontend().passwords.len(), 1);
    assert!(
        engine.frontend().passwords[0]
            .chars()
            .all(|c| c.is_ascii_alphanumeric())
    );
}

#[test]
fn test_empty_classes_notify_error_and_clear_password() {
    let mut engine = Engine::new(
        GenerationConfig {
            length: 12,
            classes: ClassToggles::only(CharClass::Lowercase),
            enforce_coverage: true,
        },
        RecordingFrontend::default(),
    );
    engine.handle(Event::GenerateRequested);
    assert!(engine.current_password().is_some());

    engine.handle(Event::ClassToggled(CharClass::Lowercase, false));

    assert!(engine.current_password().is_none());
    let (kind, message) = engine.frontend().notices.last().unwrap();
    assert_eq!(*kind, NoticeKind::Error);
    assert!(message.contains("character class"));
    // The render count did not grow for the failed pass.
    assert_eq!(engine.frontend().passwords.len(), 1);
}

#[test]
fn test_length_changes_are_throttled() {
    // An hour-long window keeps every later change inside it, whatever the
    // host's scheduling does.
    let mut engine = Engine::with_throttle(
        GenerationConfig::default(),
        Throttle::new(Duration::from_secs(3600)),
        RecordingFrontend::default(),
    );
    engine.handle(Event::LengthChanged(20));
    engine.handle(Event::LengthChanged(24));

    // The second change lands inside the suppression window: the config
    // still updates, but no second pass runs.
    assert_eq!(engine.config().length, 24);
    assert_eq!(engine.frontend().passwords.len(), 1);
}

#[test]
fn test_length_changes_resume_after_window() {
    // A zero window never suppresses, so each change runs a pass.
    let mut engine = Engine::with_throttle(
        GenerationConfig::default(),
        Throttle::new(Duration::ZERO),
        RecordingFrontend::default(),
    );
    engine.handle(Event::LengthChanged(20));
    engine.handle(Event::LengthChanged(32));
    assert_eq!(engine.frontend().passwords.len(), 2);
    assert_eq!(engine.frontend().passwords[1].chars().count(), 32);
}

#[test]
fn test_copy_without_password_notifies_error() {
    let mut engine = engine_with_default_config();
    engine.handle(Event::CopyRequested);

    assert!(engine.frontend().copied.is_empty());
    let (kind, message) = engine.frontend().notices.last().unwrap();
    assert_eq!(*kind, NoticeKind::Error);
    assert_eq!(message, "Generate a password first!");
}

#[test]
fn test_copy_hands_current_password_to_frontend() {
    let mut engine = engine_with_default_config();
    engine.handle(Event::GenerateRequested);
    engine.handle(Event::CopyRequested);

    let current = engine.current_password().unwrap().to_owned();
    assert_eq!(engine.frontend().copied, vec![current]);
    let (kind, message) = engine.frontend().notices.last().unwrap();
    assert_eq!(*kind, NoticeKind::Success);
    assert_eq!(message, "Password copied!");
}

#[test]
fn test_notice_duration_is_three_seconds() {
    assert_eq!(NOTICE_DURATION, Duration::from_secs(3));
    assert_eq!(REGEN_INTERVAL, Duration::from_millis(50));
}

#[test]
fn test_throttle_first_call_is_ready() {
    let mut throttle = Throttle::new(Duration::from_secs(3600));
    assert!(throttle.ready());
    assert!(!throttle.ready());
}

#[test]
fn test_throttle_recovers_after_interval() {
    // Tiny interval, generous sleep: robust on a loaded host.
    let mut throttle = Throttle::new(Duration::from_millis(1));
    assert!(throttle.ready());
    thread::sleep(Duration::from_millis(50));
    assert!(throttle.ready());
}
