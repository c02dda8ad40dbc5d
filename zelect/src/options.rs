//! Widget configuration and option entries.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Option value that marks the placeholder entry.
pub const PLACEHOLDER_VALUE: &str = "0";

/// A single `{ value, text }` pair read from a native select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub value: String,
    pub text: String,
}

impl OptionEntry {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    /// Whether this entry is the placeholder rather than a selectable item.
    pub fn is_placeholder(&self) -> bool {
        self.value == PLACEHOLDER_VALUE
    }
}

/// Frozen, shareable snapshot of the options a widget renders.
pub type OptionList = Arc<[OptionEntry]>;

/// Caller-supplied widget configuration.
///
/// Deserializes from the same shape the widget has always accepted:
///
/// ```
/// let options: zelect::ZelectOptions =
///     serde_json::from_str(r#"{ "className": "zelector" }"#).unwrap();
/// assert_eq!(options.class_name, "zelector");
/// assert!(options.children.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZelectOptions {
    /// Extra class added to the container and used to derive element ids.
    pub class_name: String,
    /// Options rendered ahead of the ones read from the native control.
    pub children: Vec<OptionEntry>,
}

impl ZelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn child(mut self, entry: OptionEntry) -> Self {
        self.children.push(entry);
        self
    }

    pub fn children(mut self, entries: impl IntoIterator<Item = OptionEntry>) -> Self {
        self.children.extend(entries);
        self
    }

    /// Configured children followed by `extracted`, as a new frozen list.
    ///
    /// The configuration itself is left untouched.
    pub fn resolve(&self, extracted: &[OptionEntry]) -> OptionList {
        self.children.iter().chain(extracted).cloned().collect()
    }
}
