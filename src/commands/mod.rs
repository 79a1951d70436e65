// passmith
//
// CLI command bodies

pub mod check;
pub mod config;
pub mod generate;
pub mod interactive;

use crate::strength::StrengthResult;

const METER_CELLS: usize = 10;

/// Renders the strength meter, label and advisory lines.
pub(crate) fn print_strength(strength: &StrengthResult) {
    let filled = strength.band.meter_percent() as usize * METER_CELLS / 100;
    let bar: String =
        "█".repeat(filled) + &"░".repeat(METER_CELLS.saturating_sub(filled));
    println!(
        "Strength: [{}] {} (score {})",
        bar,
        strength.label(),
        strength.score
    );
    if let Some(reason) = strength.flagged {
        println!("Flagged as a known weak pattern: {reason}");
    }
    if let Some(advice) = strength.advisory() {
        println!("Note: {advice}");
    }
}
