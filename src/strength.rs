// passmith
//
// Strength scorer

use crate::charset::CharClass;

/// Length tiers and the points each contributes. Configuration, not derived:
/// tune here, nothing downstream hard-codes these boundaries.
pub const LENGTH_TIERS: [(usize, u8); 5] = [(8, 1), (12, 2), (16, 3), (24, 4), (40, 5)];

/// Points per character class present in the password.
pub const VARIETY_POINTS: u8 = 1;

/// Keyboard-row sequences that flag a password as weak (substring match,
/// case-insensitive).
pub const KEYBOARD_SEQUENCES: [&str; 4] = ["qwerty", "azerty", "asdf", "zxcv"];

/// Common dictionary words that flag a password as weak (substring match,
/// case-insensitive).
pub const COMMON_WORDS: [&str; 7] = [
    "password", "letmein", "welcome", "admin", "iloveyou", "dragon", "monkey",
];

/// Discrete strength band with its display data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthBand {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthBand {
    pub fn label(self) -> &'static str {
        match self {
            StrengthBand::VeryWeak => "Very Weak",
            StrengthBand::Weak => "Weak",
            StrengthBand::Moderate => "Moderate",
            StrengthBand::Strong => "Strong",
            StrengthBand::VeryStrong => "Very Strong",
        }
    }

    /// Display color hint, as a CSS-style hex string.
    pub fn color(self) -> &'static str {
        match self {
            StrengthBand::VeryWeak => "#dc3545",
            StrengthBand::Weak => "#fd7e14",
            StrengthBand::Moderate => "#ffc107",
            StrengthBand::Strong => "#198754",
            StrengthBand::VeryStrong => "#0d503c",
        }
    }

    /// Meter fill for this band, in percent.
    pub fn meter_percent(self) -> u8 {
        match self {
            StrengthBand::VeryWeak => 20,
            StrengthBand::Weak => 40,
            StrengthBand::Moderate => 60,
            StrengthBand::Strong => 80,
            StrengthBand::VeryStrong => 100,
        }
    }

    /// Advisory message for the lower bands.
    pub fn advisory(self) -> Option<&'static str> {
        match self {
            StrengthBand::VeryWeak => Some("This password is too weak for most purposes"),
            StrengthBand::Weak => {
                Some("Consider using a longer password with more character types")
            }
            StrengthBand::Moderate => Some("Add more character types for better security"),
            StrengthBand::Strong | StrengthBand::VeryStrong => None,
        }
    }
}

/// Result of scoring one password. Derived purely from the password text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub band: StrengthBand,
    /// Set when a known-weak pattern forced the lowest band.
    pub flagged: Option<&'static str>,
}

impl StrengthResult {
    pub fn label(&self) -> &'static str {
        self.band.label()
    }

    pub fn color(&self) -> &'static str {
        self.band.color()
    }

    pub fn advisory(&self) -> Option<&'static str> {
        self.band.advisory()
    }
}

/// Scores a password from its length and character-class composition.
///
/// A known-weak pattern match overrides the length/variety score and forces
/// [`StrengthBand::VeryWeak`].
pub fn score_password(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult {
            score: 0,
            band: StrengthBand::VeryWeak,
            flagged: None,
        };
    }
    if let Some(reason) = weak_pattern(password) {
        return StrengthResult {
            score: 0,
            band: StrengthBand::VeryWeak,
            flagged: Some(reason),
        };
    }
    let score = length_points(password.chars().count()) + variety_count(password) * VARIETY_POINTS;
    StrengthResult {
        score,
        band: band_for(score),
        flagged: None,
    }
}

/// Checks a password against the known-weak pattern list, returning the
/// first matching reason.
pub fn weak_pattern(password: &str) -> Option<&'static str> {
    if password.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some("letters only");
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        return Some("digits only");
    }
    let lowered = password.to_lowercase();
    if has_sequential_run(&lowered) {
        return Some("sequential characters");
    }
    if KEYBOARD_SEQUENCES.iter().any(|seq| lowered.contains(seq)) {
        return Some("keyboard sequence");
    }
    if COMMON_WORDS.iter().any(|word| lowered.contains(word)) {
        return Some("common word");
    }
    None
}

fn length_points(length: usize) -> u8 {
    LENGTH_TIERS
        .iter()
        .rev()
        .find(|(min_length, _)| length >= *min_length)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Number of character classes present in the password. Anything outside
/// the three alphanumeric classes counts as a symbol.
fn variety_count(password: &str) -> u8 {
    CharClass::ALL
        .into_iter()
        .filter(|class| match class {
            CharClass::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            CharClass::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            CharClass::Numbers => password.chars().any(|c| c.is_ascii_digit()),
            CharClass::Symbols => password.chars().any(|c| !c.is_ascii_alphanumeric()),
        })
        .count() as u8
}

/// Three or more consecutive ascending digits or letters ("123", "abcd").
fn has_sequential_run(lowered: &str) -> bool {
    let bytes: Vec<u8> = lowered.bytes().collect();
    bytes.windows(3).any(|window| {
        let same_kind = window.iter().all(|b| b.is_ascii_digit())
            || window.iter().all(|b| b.is_ascii_lowercase());
        same_kind && window[1] == window[0] + 1 && window[2] == window[1] + 1
    })
}

fn band_for(score: u8) -> StrengthBand {
    match score {
        0..=3 => StrengthBand::VeryWeak,
        4 => StrengthBand::Weak,
        5..=6 => StrengthBand::Moderate,
        7..=8 => StrengthBand::Strong,
        _ => StrengthBand::VeryStrong,
    }
}
