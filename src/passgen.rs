// passmith
//
// Password generator

use rand::RngCore;
use rand::rngs::OsRng;
use thiserror::Error;

use crate::charset::{CharsetBuilder, ClassToggles, EmptyAlphabet};

/// Requested lengths below this are clamped up.
pub const MIN_LENGTH: usize = 8;
/// Requested lengths above this are clamped down.
pub const MAX_LENGTH: usize = 64;

/// Coverage retry budget before giving up with [`GenError::GenerationFailed`].
pub const MAX_COVERAGE_ATTEMPTS: u32 = 100;

#[derive(Debug, Error)]
pub enum GenError {
    #[error(transparent)]
    EmptyAlphabet(#[from] EmptyAlphabet),
    #[error("could not cover every enabled class after {0} attempts")]
    GenerationFailed(u32),
}

/// What to generate: length, enabled classes, and whether every enabled
/// class must appear at least once in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: ClassToggles,
    pub enforce_coverage: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            classes: ClassToggles::default(),
            enforce_coverage: true,
        }
    }
}

/// Draws random indices into the built alphabet to produce passwords.
///
/// Owns its RNG handle and charset cache so repeated generation carries no
/// hidden cross-call coupling. Defaults to the OS CSPRNG; tests can inject
/// their own source through [`Generator::with_rng`].
#[derive(Debug)]
pub struct Generator<R: RngCore = OsRng> {
    charset: CharsetBuilder,
    rng: R,
}

impl Generator {
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            charset: CharsetBuilder::new(),
            rng,
        }
    }

    /// Generates a password of exactly the (clamped) requested length.
    ///
    /// Each character is drawn as `random_u32 % alphabet.len()` from the OS
    /// CSPRNG. With coverage enforced, whole candidates are regenerated
    /// until every enabled class appears, bounded by
    /// [`MAX_COVERAGE_ATTEMPTS`].
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<String, GenError> {
        let length = config.length.clamp(MIN_LENGTH, MAX_LENGTH);
        let alphabet = self.charset.build(config.classes)?;
        let pool: Vec<char> = alphabet.chars().collect();

        for _ in 0..MAX_COVERAGE_ATTEMPTS {
            let candidate: String = (0..length)
                .map(|_| pool[self.rng.next_u32() as usize % pool.len()])
                .collect();
            if !config.enforce_coverage || covers_all_classes(&candidate, config.classes) {
                return Ok(candidate);
            }
        }
        log::warn!(
            "coverage retry budget exhausted for length {} with {} classes",
            length,
            config.classes.count()
        );
        Err(GenError::GenerationFailed(MAX_COVERAGE_ATTEMPTS))
    }
}

/// True if the password contains at least one character from every enabled
/// class's alphabet.
pub fn covers_all_classes(password: &str, toggles: ClassToggles) -> bool {
    toggles
        .enabled()
        .iter()
        .all(|class| password.chars().any(|c| class.alphabet().contains(c)))
}
