use std::collections::VecDeque;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::errors::CliError;

/// Source of answers for the interactive quote flow.
pub trait Prompter {
    /// Returns the index of the chosen option.
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize, CliError>;

    fn confirm(&mut self, prompt: &str) -> Result<bool, CliError>;

    fn input_text(&mut self, prompt: &str) -> Result<String, CliError>;
}

/// Terminal prompts backed by `dialoguer`.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize, CliError> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()?)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }

    fn input_text(&mut self, prompt: &str) -> Result<String, CliError> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?)
    }
}

/// Replays queued answers in order; used to drive the flow without a terminal.
///
/// Selections accept either an option label or its 1-based position, and
/// confirmations accept `y`/`yes`/`s`/`sim` (anything else is "no").
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<String, CliError> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| CliError::Input(format!("no scripted answer for `{prompt}`")))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize, CliError> {
        let answer = self.next(prompt)?;
        let answer = answer.trim();
        if let Ok(position) = answer.parse::<usize>() {
            if (1..=options.len()).contains(&position) {
                return Ok(position - 1);
            }
        }
        let needle = answer.to_ascii_lowercase();
        options
            .iter()
            .position(|option| !needle.is_empty() && option.to_ascii_lowercase().starts_with(&needle))
            .ok_or_else(|| CliError::Input(format!("`{answer}` is not an option for `{prompt}`")))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        let answer = self.next(prompt)?.trim().to_ascii_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes" | "s" | "sim"))
    }

    fn input_text(&mut self, prompt: &str) -> Result<String, CliError> {
        self.next(prompt)
    }
}
