//! Building the widget's markup from an option list.

use webdom::{Document, Element, NodeId};

use crate::error::ZelectError;
use crate::options::{OptionEntry, ZelectOptions};

/// Class every container carries.
pub const BASE_CLASS: &str = "zelect";
/// Container class while the list is open.
pub const ACTIVE_CLASS: &str = "is-active";
/// Item class while the pointer is over it.
pub const HOVER_CLASS: &str = "is-hover";
/// Attribute marking the selected item.
pub const SELECTED_ATTR: &str = "aria-selected";

pub fn placeholder_id(class_name: &str) -> String {
    format!("zelect-placeholder--{class_name}")
}

pub fn list_id(class_name: &str) -> String {
    format!("zelect-list--{class_name}")
}

pub fn item_id(value: &str) -> String {
    format!("zelect-list-item--{value}")
}

/// A rendered, selectable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub node: NodeId,
    pub value: String,
}

/// Handles to the synthesized nodes of one widget.
#[derive(Debug, Clone)]
pub struct Markup {
    pub container: NodeId,
    pub placeholder: NodeId,
    pub list: NodeId,
    /// In option order, placeholder entries excluded.
    pub items: Vec<Item>,
    /// Value of the item marked selected on first render.
    pub selected: String,
}

impl Markup {
    pub fn item(&self, value: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.value == value)
    }
}

/// Build the detached widget tree for `options`.
///
/// Nothing is inserted into the document here; on error the partially
/// built tree is dropped again.
pub fn synthesize(
    doc: &mut Document,
    options: &[OptionEntry],
    config: &ZelectOptions,
) -> Result<Markup, ZelectError> {
    if options.is_empty() {
        return Err(ZelectError::EmptyOptions);
    }
    let first = options
        .iter()
        .find(|entry| !entry.is_placeholder())
        .ok_or(ZelectError::NoSelectableOption)?;
    let placeholder_text = options
        .iter()
        .find(|entry| entry.is_placeholder())
        .map_or("", |entry| entry.text.as_str());

    let class_name = config.class_name.as_str();
    log::debug!(
        "synthesize class={class_name:?} options={} placeholder={placeholder_text:?}",
        options.len()
    );

    let container = doc.create_element(
        Element::new("div")
            .class(BASE_CLASS)
            .class(class_name)
            .attr("role", "select"),
    );

    let built = build_children(doc, container, options, class_name, placeholder_text, first);
    if built.is_err() {
        doc.remove(container);
    }
    let (placeholder, list, items) = built?;

    Ok(Markup {
        container,
        placeholder,
        list,
        items,
        selected: first.value.clone(),
    })
}

fn build_children(
    doc: &mut Document,
    container: NodeId,
    options: &[OptionEntry],
    class_name: &str,
    placeholder_text: &str,
    first: &OptionEntry,
) -> Result<(NodeId, NodeId, Vec<Item>), ZelectError> {
    let placeholder = doc.create_child(
        container,
        Element::new("span")
            .id(placeholder_id(class_name))
            .attr("aria-label", "Zelect Placeholder")
            .attr("role", "label")
            .attr("title", placeholder_text)
            .text(placeholder_text),
    )?;

    let list = doc.create_child(
        container,
        Element::new("nav")
            .id(list_id(class_name))
            .attr("role", "listbox")
            .attr("tabindex", "0")
            .attr("aria-labelledby", placeholder_id(class_name))
            .attr("aria-activedescendant", item_id(&first.value)),
    )?;

    let mut items = Vec::new();
    for (index, entry) in options.iter().filter(|e| !e.is_placeholder()).enumerate() {
        let mut element = Element::new("span")
            .id(item_id(&entry.value))
            .attr("data-value", entry.value.as_str())
            .attr("role", "option")
            .attr("title", entry.text.as_str())
            .text(entry.text.as_str());
        if index == 0 {
            element = element.attr(SELECTED_ATTR, "true");
        }

        let node = doc.create_child(list, element)?;
        items.push(Item {
            node,
            value: entry.value.clone(),
        });
    }

    Ok((placeholder, list, items))
}
