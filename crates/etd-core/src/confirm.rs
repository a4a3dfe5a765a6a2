//! Confirmation seam for ambiguous input.
//!
//! The only interactive moment in the pipeline is the mononymous-name prompt.
//! Abstracting it keeps the validator testable and lets scripted runs answer
//! without a terminal.

use etd_model::Result;

/// Yes/no question posed to the operator; blocks until answered.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Accepts every prompt. Used by non-interactive runs.
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}
