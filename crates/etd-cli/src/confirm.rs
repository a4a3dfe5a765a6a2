//! Interactive confirmation on stdin.

use std::io::{self, BufRead, Write};

use etd_core::Confirm;
use etd_model::Result;

/// Prompts on stderr and reads an answer from stdin, asking again until it
/// recognizes y/yes/n/no (case-insensitive). Blocks indefinitely; there is
/// no timeout. EOF on stdin counts as a decline.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            eprint!("{prompt} [y/n]: ");
            io::stderr().flush()?;
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(false);
            }
            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }
}
