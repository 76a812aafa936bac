//! Line and password prompts.
//!
//! Interactive terminals get dialoguer prompts; piped stdin is read one line
//! per prompt so scripts can feed answers.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use dialoguer::{Input, Password};

use crate::ui::context::UiContext;
use crate::ui::theme::prompt_theme;

fn read_piped_line(prompt: &str) -> Result<String> {
    eprint!("{}: ", prompt);
    io::stderr().flush().ok();

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn input(ui: &UiContext, prompt: &str) -> Result<String> {
    if !ui.can_prompt() {
        return read_piped_line(prompt);
    }

    let theme = prompt_theme(ui.color);
    Input::<String>::with_theme(&*theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .context("failed to read input")
}

/// Hidden input on a terminal.
pub fn password(ui: &UiContext, prompt: &str) -> Result<String> {
    if !ui.can_prompt() {
        return read_piped_line(prompt);
    }

    let theme = prompt_theme(ui.color);
    Password::with_theme(&*theme)
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .context("failed to read password")
}
