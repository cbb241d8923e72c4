//! dialoguer selector implementation (default)

use crate::error::{Result, YtPickError};
use crate::types::MenuItem;
use dialoguer::{theme::ColorfulTheme, Select};

pub struct DialoguerSelector;

impl DialoguerSelector {
    pub fn new() -> Self {
        Self
    }

    /// Blocks until an entry is confirmed; Esc does not dismiss the menu.
    pub fn select<T: Clone>(&self, items: &[MenuItem<T>], prompt: &str, default: usize) -> Result<T> {
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&labels)
            .default(default)
            .interact()?;

        items
            .get(selection)
            .map(|item| item.value.clone())
            .ok_or(YtPickError::Cancelled)
    }
}

impl Default for DialoguerSelector {
    fn default() -> Self {
        Self::new()
    }
}
