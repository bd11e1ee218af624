//! Prints an argon2 hash for a teacher password, for use in `teachers.json`.
//!
//! Usage: `hash-password <password>`, or pipe the password on stdin.

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use mergington_backend::auth::hash_password;

fn main() -> Result<()> {
    let password = match std::env::args().nth(1) {
        Some(p) => p,
        None => {
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        bail!("password must not be empty");
    }

    let hash = hash_password(&password).context("Failed to hash password")?;
    println!("{}", hash);
    Ok(())
}
