//! ui::prompts
//!
//! Interactive prompts.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode the
//! default is returned unchanged, so a missing required value surfaces later
//! as a validation error instead of a hang on stdin.

use dialoguer::{Confirm, Input};
use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("terminal error: {0}")]
    Terminal(#[from] dialoguer::Error),
}

/// Prompt for text input.
///
/// The default is offered pre-filled; an empty answer is allowed so that
/// validation can report the field by name.
pub fn input(message: &str, default: &str, interactive: bool) -> Result<String, PromptError> {
    if !interactive {
        return Ok(default.to_string());
    }

    let mut prompt = Input::<String>::new().with_prompt(message).allow_empty(true);
    if !default.is_empty() {
        prompt = prompt.default(default.to_string());
    }
    Ok(prompt.interact_text()?)
}

/// Prompt for a yes/no answer.
///
/// Escape or `q` cancels.
pub fn confirm(message: &str, default: bool, interactive: bool) -> Result<bool, PromptError> {
    if !interactive {
        return Ok(default);
    }

    Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact_opt()?
        .ok_or(PromptError::Cancelled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_input_returns_default() {
        assert_eq!(input("Package version", "0.1.0", false).unwrap(), "0.1.0");
        assert_eq!(input("Package name", "", false).unwrap(), "");
    }

    #[test]
    fn non_interactive_confirm_returns_default() {
        assert!(!confirm("Push git repository?", false, false).unwrap());
        assert!(confirm("Push git repository?", true, false).unwrap());
    }

    #[test]
    fn terminal_errors_convert() {
        let err: PromptError =
            dialoguer::Error::IO(std::io::Error::other("not a terminal")).into();
        assert!(err.to_string().contains("not a terminal"));
    }
}
