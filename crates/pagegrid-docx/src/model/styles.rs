//! Named paragraph styles
//!
//! The renderer sets style *names* on paragraphs without validating them;
//! resolution against this registry is the host's business. An unknown name
//! is host-defined failure behavior.

use ahash::AHashMap;

use crate::model::paragraph::{CharacterFormat, ParagraphAlignment};

/// A named paragraph style
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphStyle {
    /// Style name, as referenced by paragraphs
    pub name: String,
    /// Character formatting the style applies
    pub character: CharacterFormat,
    /// Default paragraph alignment, when the style sets one
    pub alignment: Option<ParagraphAlignment>,
}

impl ParagraphStyle {
    /// Create a style with default formatting
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the character format
    pub fn with_character(mut self, character: CharacterFormat) -> Self {
        self.character = character;
        self
    }

    /// Set the default alignment
    pub fn with_alignment(mut self, alignment: ParagraphAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// Host-side mapping from style name to paragraph style
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleRegistry {
    styles: AHashMap<String, ParagraphStyle>,
}

impl StyleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style, replacing any previous style of the same name
    pub fn register(&mut self, style: ParagraphStyle) {
        self.styles.insert(style.name.clone(), style);
    }

    /// Look up a style by name
    pub fn get(&self, name: &str) -> Option<&ParagraphStyle> {
        self.styles.get(name)
    }

    /// True when a style of the given name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Number of registered styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// True when no style is registered
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
