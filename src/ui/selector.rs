//! Selector backends and factory

use crate::error::Result;
use crate::types::{MenuItem, SelectorType};
use super::dialoguer_selector::DialoguerSelector;
use super::fzf::FzfSelector;

/// Selector enum for interactive menus
pub enum Selector {
    Fzf(FzfSelector),
    Dialoguer(DialoguerSelector),
    #[cfg(test)]
    Scripted(scripted::ScriptedSelector),
}

impl Selector {
    /// Show `items` with the cursor on `default` and return the confirmed value.
    /// A dismissed menu is `YtPickError::Cancelled`.
    pub fn select<T: Clone>(&self, items: &[MenuItem<T>], prompt: &str, default: usize) -> Result<T> {
        match self {
            Selector::Fzf(s) => s.select(items, prompt, default),
            Selector::Dialoguer(s) => s.select(items, prompt, default),
            #[cfg(test)]
            Selector::Scripted(s) => s.select(items, prompt, default),
        }
    }
}

/// Create a selector based on type
pub fn create_selector(selector_type: SelectorType) -> Selector {
    match selector_type {
        SelectorType::Fzf => {
            let fzf = FzfSelector::new();
            if fzf.is_available() {
                return Selector::Fzf(fzf);
            }
            tracing::warn!("fzf not found, falling back to dialoguer");
            Selector::Dialoguer(DialoguerSelector::new())
        }
        SelectorType::Dialoguer => Selector::Dialoguer(DialoguerSelector::new()),
    }
}
