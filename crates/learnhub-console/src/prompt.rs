//! Thin wrappers around dialoguer prompts.
//!
//! Terminal failures are mapped into [`AppError`] so screens can use the
//! `?` operator throughout.

use dialoguer::{Confirm, Input, Password, Select};

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;

fn input_error(err: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {}", err))
}

/// Prompt for a required line of text.
pub fn text(prompt: &str) -> AppResult<String> {
    Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(input_error)
}

/// Prompt for an optional line of text; Enter skips.
pub fn optional_text(prompt: &str) -> AppResult<Option<String>> {
    let value: String = Input::new()
        .with_prompt(format!("{} (press Enter to skip)", prompt))
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

/// Prompt for a hidden password.
pub fn password(prompt: &str) -> AppResult<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(input_error)
}

/// Prompt for a yes/no confirmation, defaulting to no.
pub fn confirm(prompt: &str) -> AppResult<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(input_error)
}

/// Prompt for a selection from a list; returns the chosen index.
pub fn select(prompt: &str, items: &[String]) -> AppResult<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(input_error)
}
