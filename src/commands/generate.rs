// passmith
//
// `gen` subcommand: one-shot password generation

use anyhow::Result;

use crate::configtool::Preferences;
use crate::passgen::{GenerationConfig, Generator};
use crate::setclip;
use crate::strength::score_password;

#[allow(clippy::too_many_arguments)]
pub fn generate_random(
    length: Option<usize>,
    no_uppercase: bool,
    no_lowercase: bool,
    no_numbers: bool,
    no_symbols: bool,
    no_coverage: bool,
    copy: bool,
) -> Result<()> {
    // Saved preferences supply the defaults; flags override per class.
    let prefs = Preferences::load()?;
    let mut classes = prefs.classes;
    if no_uppercase {
        classes.uppercase = false;
    }
    if no_lowercase {
        classes.lowercase = false;
    }
    if no_numbers {
        classes.numbers = false;
    }
    if no_symbols {
        classes.symbols = false;
    }
    let config = GenerationConfig {
        length: length.unwrap_or(prefs.length),
        classes,
        enforce_coverage: !no_coverage,
    };

    let mut generator = Generator::new();
    let password = generator.generate(&config)?;
    println!("Generated password: {password}");
    super::print_strength(&score_password(&password));

    if copy && setclip::copy_with_fallback(&password) {
        println!("Password copied!");
    }
    Ok(())
}
