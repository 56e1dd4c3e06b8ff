//! Selection menus.
//!
//! A [`Menu`] is an ordered list of labeled options with zero-based indices.
//! [`Menu::resolve`] maps one line of user input to an option. Input that
//! names nothing comes back as [`InvalidSelection`]; it is never a panic.

use crate::error::InvalidSelection;
use crate::registry::{Registry, SampleGroup};

/// Which input forms a menu accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The decimal index or the exact, case-sensitive label.
    IndexOrLabel,
    /// The decimal index only.
    IndexOnly,
}

/// One resolved menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption<'a> {
    pub index: usize,
    pub label: &'a str,
}

/// An ordered list of options.
#[derive(Debug, Clone)]
pub struct Menu<'a> {
    options: Vec<MenuOption<'a>>,
    mode: MatchMode,
}

impl<'a> Menu<'a> {
    /// Build a menu; each label's index is its position.
    pub fn new<I>(labels: I, mode: MatchMode) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let options = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| MenuOption { index, label })
            .collect();
        Self { options, mode }
    }

    /// Group menu: every registered group, selectable by index or name.
    pub fn groups(registry: &'a Registry) -> Self {
        Self::new(
            registry.groups().iter().map(|g| g.name.as_str()),
            MatchMode::IndexOrLabel,
        )
    }

    /// Example menu for one group, selectable by index only.
    pub fn examples(group: &'a SampleGroup) -> Self {
        Self::new(
            group.examples().iter().map(|e| e.description.as_str()),
            MatchMode::IndexOnly,
        )
    }

    pub fn options(&self) -> &[MenuOption<'a>] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Resolve `input` to an option.
    ///
    /// The input must equal an index written in plain decimal (`"1"`, not
    /// `"01"` or `"+1"`), or, in [`MatchMode::IndexOrLabel`], a label exactly.
    /// No trimming or case folding happens here.
    pub fn resolve(&self, input: &str) -> Result<MenuOption<'a>, InvalidSelection> {
        let by_index = self
            .options
            .iter()
            .find(|option| option.index.to_string() == input);
        if let Some(option) = by_index {
            return Ok(*option);
        }

        if self.mode == MatchMode::IndexOrLabel {
            if let Some(option) = self.options.iter().find(|option| option.label == input) {
                return Ok(*option);
            }
        }

        Err(InvalidSelection::new(input))
    }

    /// Render on one line: `0: AutoSuggestSearch, 1: NewsSearch`.
    pub fn render_inline(&self) -> String {
        self.options
            .iter()
            .map(|o| format!("{}: {}", o.index, o.label))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render one option per line, indented.
    pub fn render_lines(&self) -> String {
        self.options
            .iter()
            .map(|o| format!("  {}: {}", o.index, o.label))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
