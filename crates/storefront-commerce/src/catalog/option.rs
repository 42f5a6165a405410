//! Product options and their choices.

use crate::catalog::{MediaGallery, MediaItem};
use serde::{Deserialize, Serialize};

/// How an option is presented in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// Plain text choices.
    #[default]
    DropDown,
    /// Color swatches; each choice carries a CSS color in `value`.
    Color,
    #[serde(other)]
    Unknown,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::DropDown => "drop_down",
            OptionKind::Color => "color",
            OptionKind::Unknown => "unknown",
        }
    }
}

/// One concrete value of an option (e.g., "Red").
///
/// The platform provides no stable choice ID: `description` is both the
/// display label and the matching key, compared by exact string equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    /// Display label and identity key within the option.
    #[serde(default)]
    pub description: String,
    /// Swatch color for color options.
    #[serde(default)]
    pub value: Option<String>,
    /// Media shown while this choice is selected.
    #[serde(default)]
    pub media: Option<MediaGallery>,
    /// Platform's own in-stock summary for this choice.
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub visible: Option<bool>,
}

impl Choice {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Media override items; empty when the choice has none.
    pub fn media_items(&self) -> &[MediaItem] {
        self.media.as_ref().map_or(&[], |m| m.items.as_slice())
    }
}

/// A named axis of customization (e.g., "Color").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    /// Option name, unique within the product.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub option_type: OptionKind,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ProductOption {
    pub fn new(name: impl Into<String>, option_type: OptionKind) -> Self {
        Self {
            name: name.into(),
            option_type,
            choices: Vec::new(),
        }
    }

    /// Builder-style choice append.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Look up a choice by its exact description.
    pub fn choice(&self, description: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.description == description)
    }

    /// The first declared choice, used as the default selection.
    pub fn default_choice(&self) -> Option<&Choice> {
        self.choices.first()
    }

    /// Descriptions that appear more than once in this option.
    pub fn duplicate_descriptions(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dupes = Vec::new();
        for choice in &self.choices {
            let d = choice.description.as_str();
            if !seen.insert(d) && !dupes.contains(&d) {
                dupes.push(d);
            }
        }
        dupes
    }
}
