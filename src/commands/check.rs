// passmith
//
// `check` command: score an existing password

use anyhow::Result;

use crate::strength::score_password;

pub fn check_password(password: &str) -> Result<()> {
    let strength = score_password(password);
    super::print_strength(&strength);
    println!("Color hint: {}", strength.color());
    Ok(())
}
