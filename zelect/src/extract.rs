//! Reading options out of the native control.

use webdom::{Document, DomError, NodeId};

use crate::error::ZelectError;
use crate::options::{OptionEntry, OptionList};

/// Selector used when the caller gives none, or theirs matches nothing.
pub const DEFAULT_TARGET: &str = "[data-component=\"select\"]";

/// Find the native control to replace.
pub fn resolve_target(doc: &Document, selector: Option<&str>) -> Result<NodeId, ZelectError> {
    if let Some(selector) = selector.filter(|s| !s.trim().is_empty()) {
        if let Some(node) = doc.query_selector(selector)? {
            return Ok(node);
        }
        log::debug!("no element matches `{selector}`, falling back to {DEFAULT_TARGET}");
    }

    doc.query_selector(DEFAULT_TARGET)?
        .ok_or_else(|| ZelectError::TargetNotFound {
            selector: DEFAULT_TARGET.to_string(),
        })
}

/// Snapshot the native control's options in document order.
///
/// `value` falls back to the option text when the attribute is missing,
/// the same way a native select reports it.
pub fn extract_options(doc: &Document, native: NodeId) -> Result<OptionList, ZelectError> {
    let element = doc.get(native).ok_or(DomError::NodeNotFound(native))?;
    if !element.is("select") {
        return Err(ZelectError::NotASelect {
            tag: element.tag.clone(),
        });
    }

    let entries: Vec<OptionEntry> = doc
        .query_selector_all_in(native, "option")?
        .into_iter()
        .filter_map(|node| {
            let option = doc.get(node)?;
            let text = collapse_whitespace(&doc.text_content(node));
            let value = option
                .attribute("value")
                .map_or_else(|| text.clone(), str::to_owned);
            Some(OptionEntry { value, text })
        })
        .collect();

    log::debug!("extracted {} options from native select", entries.len());
    Ok(entries.into())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
