// passmith
//
// A character-class password generator with strength scoring.

use anyhow::Result;
use clap::Parser;

use passmith::commands;

#[derive(Debug, Parser)]
#[command(name = "passmith")]
#[command(about = "A character-class password generator with strength scoring", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Score an existing password
    Check(CheckArgs),

    /// Interactive generation session
    Interactive,

    /// Show or update saved preferences
    Config(ConfigArgs),
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password (defaults to the saved preference)
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false)]
    no_symbols: bool,

    /// Do not require every enabled class to appear in the output
    #[arg(long, default_value_t = false)]
    no_coverage: bool,

    /// Copy the generated password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Password to score
    password: String,
}

#[derive(Debug, Parser)]
struct ConfigArgs {
    /// Theme preference: light or dark
    #[arg(short, long)]
    theme: Option<String>,

    /// Default password length
    #[arg(short, long)]
    length: Option<usize>,

    /// Default classes as letters from "ulns", e.g. "uln"
    #[arg(short, long)]
    classes: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli {
        Cli::Gen(args) => commands::generate::generate_random(
            args.length,
            args.no_uppercase,
            args.no_lowercase,
            args.no_numbers,
            args.no_symbols,
            args.no_coverage,
            args.copy,
        ),
        Cli::Check(args) => commands::check::check_password(&args.password),
        Cli::Interactive => commands::interactive::run(),
        Cli::Config(args) => commands::config::run(args.theme, args.length, args.classes),
    }
}
