//! Interactive prompts
//!
//! Command handlers ask for input through [`Prompter`] so they can run
//! against a terminal (`dialoguer`) or a scripted list of answers in tests.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::error::TrackerResult;

/// Source of answers for missing command options
pub trait Prompter {
    /// Ask for a single line of text; `default` is accepted on empty input
    fn input(&mut self, prompt: &str, default: Option<&str>) -> TrackerResult<String>;

    /// Pick one of `items`. `None` means the user backed out.
    fn select(&mut self, prompt: &str, items: &[String]) -> TrackerResult<Option<usize>>;
}

/// Terminal prompts rendered by `dialoguer`
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
    fn input(&mut self, prompt: &str, default: Option<&str>) -> TrackerResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> TrackerResult<Option<usize>> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?)
    }
}
