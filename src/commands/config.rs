// passmith
//
// `config` command: show or update saved preferences

use anyhow::{Result, bail};

use crate::charset::{CharClass, ClassToggles};
use crate::configtool::{Preferences, Theme};

pub fn run(theme: Option<String>, length: Option<usize>, classes: Option<String>) -> Result<()> {
    let mut prefs = Preferences::load()?;

    let mut changed = false;
    if let Some(theme) = theme {
        prefs.theme = parse_theme(&theme)?;
        changed = true;
    }
    if let Some(length) = length {
        prefs.length = length;
        changed = true;
    }
    if let Some(letters) = classes {
        prefs.classes = parse_classes(&letters)?;
        changed = true;
    }

    if changed {
        prefs.save()?;
        println!("Preferences saved.");
    }

    println!("Theme: {}", prefs.theme);
    println!("Default length: {}", prefs.length);
    let enabled: Vec<&str> = prefs
        .classes
        .enabled()
        .iter()
        .map(|class| class.name())
        .collect();
    println!("Default classes: {}", enabled.join(", "));
    Ok(())
}

fn parse_theme(input: &str) -> Result<Theme> {
    match input.to_lowercase().as_str() {
        "light" => Ok(Theme::Light),
        "dark" => Ok(Theme::Dark),
        other => bail!("unknown theme '{other}', expected 'light' or 'dark'"),
    }
}

/// Parses a class string like "ulns" (uppercase, lowercase, numbers, symbols).
fn parse_classes(letters: &str) -> Result<ClassToggles> {
    let mut toggles = ClassToggles::none();
    for c in letters.chars() {
        match c.to_ascii_lowercase() {
            'u' => toggles.set(CharClass::Uppercase, true),
            'l' => toggles.set(CharClass::Lowercase, true),
            'n' => toggles.set(CharClass::Numbers, true),
            's' => toggles.set(CharClass::Symbols, true),
            other => bail!("unknown class '{other}', expected letters from 'ulns'"),
        }
    }
    if toggles.is_empty() {
        bail!("at least one class must be enabled");
    }
    Ok(toggles)
}
