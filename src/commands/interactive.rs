// passmith
//
// `interactive` command: a REPL driving the event engine

use std::io::{self, Write};

use anyhow::Result;

use crate::charset::CharClass;
use crate::configtool::Preferences;
use crate::engine::{Engine, Event, Frontend, NoticeKind};
use crate::passgen::GenerationConfig;
use crate::setclip;
use crate::strength::StrengthResult;

/// Terminal front end: renders to stdout, copies through the system
/// clipboard with the print-for-manual-copy fallback.
pub struct TerminalFrontend;

impl Frontend for TerminalFrontend {
    fn show_password(&mut self, password: &str) {
        println!("Password: {password}");
    }

    fn show_strength(&mut self, strength: &StrengthResult) {
        super::print_strength(strength);
    }

    fn notify(&mut self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => println!("✔ {message}"),
            NoticeKind::Error => println!("✘ {message}"),
        }
    }

    fn copy(&mut self, secret: &str) {
        setclip::copy_with_fallback(secret);
    }
}

pub fn run() -> Result<()> {
    let prefs = Preferences::load()?;
    let config = GenerationConfig {
        length: prefs.length,
        classes: prefs.classes,
        enforce_coverage: true,
    };
    let mut engine = Engine::new(config, TerminalFrontend);
    engine.handle(Event::GenerateRequested);

    println!("Commands: length <n> | on <class> | off <class> | gen | copy | quit");
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => continue,
            ["quit"] | ["q"] | ["exit"] => break,
            ["gen"] | ["g"] => engine.handle(Event::GenerateRequested),
            ["copy"] | ["c"] => engine.handle(Event::CopyRequested),
            ["length", value] => match value.parse::<usize>() {
                Ok(length) => engine.handle(Event::LengthChanged(length)),
                Err(_) => println!("✘ length takes a number"),
            },
            ["on", class] | ["off", class] => {
                let enabled = parts[0] == "on";
                match parse_class(class) {
                    Some(class) => engine.handle(Event::ClassToggled(class, enabled)),
                    None => {
                        println!("✘ unknown class, expected uppercase/lowercase/numbers/symbols")
                    }
                }
            }
            _ => println!("✘ unknown command"),
        }
    }
    Ok(())
}

fn parse_class(input: &str) -> Option<CharClass> {
    match input.to_lowercase().as_str() {
        "uppercase" | "upper" | "u" => Some(CharClass::Uppercase),
        "lowercase" | "lower" | "l" => Some(CharClass::Lowercase),
        "numbers" | "digits" | "n" => Some(CharClass::Numbers),
        "symbols" | "special" | "s" => Some(CharClass::Symbols),
        _ => None,
    }
}
