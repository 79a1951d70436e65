// passmith
//
// Event engine: config changes in, generate-score-render passes out

use std::time::{Duration, Instant};

use crate::charset::CharClass;
use crate::passgen::{GenerationConfig, Generator};
use crate::strength::{StrengthResult, score_password};

/// Minimum interval between generate passes triggered by length changes.
pub const REGEN_INTERVAL: Duration = Duration::from_millis(50);

/// How long a front end should keep a notice visible before dismissing it.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// User interactions the engine responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    LengthChanged(usize),
    ClassToggled(CharClass, bool),
    GenerateRequested,
    CopyRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Rendering, notification and clipboard collaborator.
///
/// `copy` owns its own fallback path; a clipboard failure must not surface
/// beyond the front end.
pub trait Frontend {
    fn show_password(&mut self, password: &str);
    fn show_strength(&mut self, strength: &StrengthResult);
    fn notify(&mut self, kind: NoticeKind, message: &str);
    fn copy(&mut self, secret: &str);
}

/// Time-windowed suppression: at most one pass per interval.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn ready(&mut self) -> bool {
        let now = Instant::now();
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Drives one synchronous generate-score-render pass per event.
///
/// Generation errors are caught here and turned into an error notice; they
/// never travel further than this call frame, and no password is kept when
/// one occurs.
pub struct Engine<F: Frontend> {
    config: GenerationConfig,
    generator: Generator,
    throttle: Throttle,
    current: Option<String>,
    frontend: F,
}

impl<F: Frontend> Engine<F> {
    pub fn new(config: GenerationConfig, frontend: F) -> Self {
        Self::with_throttle(config, Throttle::new(REGEN_INTERVAL), frontend)
    }

    /// Like [`Engine::new`] with an explicit suppression window. Tests use
    /// this to pin throttling behavior without depending on wall-clock
    /// timing.
    pub fn with_throttle(config: GenerationConfig, throttle: Throttle, frontend: F) -> Self {
        Self {
            config,
            generator: Generator::new(),
            throttle,
            current: None,
            frontend,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn current_password(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            // Slider-drag analog: config always updates, but rapid repeats
            // are suppressed to one pass per REGEN_INTERVAL.
            Event::LengthChanged(length) => {
                self.config.length = length;
                if self.throttle.ready() {
                    self.regenerate();
                } else {
                    log::debug!("length change to {length} throttled");
                }
            }
            Event::ClassToggled(class, enabled) => {
                self.config.classes.set(class, enabled);
                self.regenerate();
            }
            Event::GenerateRequested => self.regenerate(),
            Event::CopyRequested => match self.current.clone() {
                Some(password) => {
                    self.frontend.copy(&password);
                    self.frontend.notify(NoticeKind::Success, "Password copied!");
                }
                None => {
                    self.frontend
                        .notify(NoticeKind::Error, "Generate a password first!");
                }
            },
        }
    }

    fn regenerate(&mut self) {
        match self.generator.generate(&self.config) {
            Ok(password) => {
                let strength = score_password(&password);
                self.frontend.show_password(&password);
                self.frontend.show_strength(&strength);
                self.current = Some(password);
            }
            Err(e) => {
                self.current = None;
                self.frontend.notify(NoticeKind::Error, &e.to_string());
            }
        }
    }
}
