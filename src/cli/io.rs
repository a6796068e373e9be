use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::error::CommandError;

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(prompt: &str, default: bool) -> Result<bool, dialoguer::Error> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
}

/// Prompt the user for free-form text input.
pub fn prompt_text(prompt: &str, allow_empty: bool) -> Result<String, CommandError> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(CommandError::from)
}

/// Let the user pick one of `items`; `None` when the prompt is dismissed.
pub fn select_item(prompt: &str, items: &[&str]) -> Result<Option<usize>, CommandError> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(CommandError::from)
}
