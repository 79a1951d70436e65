// passmith
//
// Character-set builder

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// No character class is enabled, so there is nothing to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("select at least one character class")]
pub struct EmptyAlphabet;

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Canonical order used when concatenating alphabets.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    /// The literal alphabet for this class.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharClass::Numbers => "0123456789",
            CharClass::Symbols => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Numbers => "numbers",
            CharClass::Symbols => "symbols",
        }
    }
}

/// Which character classes are enabled for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassToggles {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for ClassToggles {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl ClassToggles {
    pub fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        }
    }

    pub fn only(class: CharClass) -> Self {
        let mut toggles = Self::none();
        toggles.set(class, true);
        toggles
    }

    pub fn contains(self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Numbers => self.numbers,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Uppercase => self.uppercase = enabled,
            CharClass::Lowercase => self.lowercase = enabled,
            CharClass::Numbers => self.numbers = enabled,
            CharClass::Symbols => self.symbols = enabled,
        }
    }

    /// Enabled classes in canonical order.
    pub fn enabled(self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|class| self.contains(*class))
            .collect()
    }

    pub fn count(self) -> usize {
        CharClass::ALL
            .into_iter()
            .filter(|class| self.contains(*class))
            .count()
    }

    pub fn is_empty(self) -> bool {
        self.count() == 0
    }
}

/// Builds the combined alphabet for a toggle combination.
///
/// Keeps the last built string keyed by the toggles, so repeated calls with
/// an unchanged combination do not rebuild it. The cache is owned by the
/// builder instance, not shared module state.
#[derive(Debug, Default)]
pub struct CharsetBuilder {
    cache: Option<(ClassToggles, String)>,
}

impl CharsetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenates the alphabets of the enabled classes in canonical order.
    pub fn build(&mut self, toggles: ClassToggles) -> Result<String, EmptyAlphabet> {
        if toggles.is_empty() {
            return Err(EmptyAlphabet);
        }
        if let Some((cached_toggles, alphabet)) = &self.cache {
            if *cached_toggles == toggles {
                return Ok(alphabet.clone());
            }
        }
        let mut alphabet = String::new();
        for class in CharClass::ALL {
            if toggles.contains(class) {
                alphabet.push_str(class.alphabet());
            }
        }
        self.cache = Some((toggles, alphabet.clone()));
        Ok(alphabet)
    }
}
