use std::sync::atomic::{AtomicU64, Ordering};

use webdom::{Document, NodeId};

use crate::markup::{ACTIVE_CLASS, Markup, SELECTED_ATTR};
use crate::state::{Openness, State, WidgetState};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a mounted widget, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One mounted widget: its own nodes and its own state.
///
/// Transitions update [`WidgetState`] first and then project it onto the
/// container and items.
#[derive(Debug)]
pub struct Instance {
    id: InstanceId,
    markup: Markup,
    state: State<WidgetState>,
}

impl Instance {
    pub(crate) fn new(markup: Markup) -> Self {
        let state = State::new(WidgetState::new(markup.selected.clone()));
        Self {
            id: InstanceId::next(),
            markup,
            state,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn container(&self) -> NodeId {
        self.markup.container
    }

    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    pub fn state(&self) -> WidgetState {
        self.state.get()
    }

    pub(crate) fn toggle(&self, doc: &mut Document) {
        self.state.update(|s| s.openness = s.openness.toggled());
        log::debug!("{:?} toggled to {:?}", self.id, self.state.with(|s| s.openness));
        self.project(doc);
    }

    /// Close if open. Returns whether anything changed.
    pub(crate) fn close(&self, doc: &mut Document) -> bool {
        if !self.state.update(|s| s.openness = Openness::Closed) {
            return false;
        }
        self.project(doc);
        true
    }

    pub(crate) fn select(&self, doc: &mut Document, value: &str) {
        if self.markup.item(value).is_none() {
            log::warn!("{:?} has no item with value {value:?}", self.id);
            return;
        }
        if !self.state.update(|s| s.selected = value.to_string()) {
            return;
        }
        log::debug!("{:?} selected {value:?}", self.id);
        self.project(doc);
    }

    /// Write the current state onto the DOM if it changed since the last write.
    pub(crate) fn project(&self, doc: &mut Document) {
        if !self.state.is_dirty() {
            return;
        }
        let state = self.state.get();

        if let Some(container) = doc.get_mut(self.markup.container) {
            if state.openness.is_open() {
                container.add_class(ACTIVE_CLASS);
            } else {
                container.remove_class(ACTIVE_CLASS);
            }
        }

        for item in &self.markup.items {
            let Some(element) = doc.get_mut(item.node) else {
                continue;
            };
            if item.value == state.selected {
                element.set_attribute(SELECTED_ATTR, "true");
            } else {
                element.remove_attribute(SELECTED_ATTR);
            }
        }

        self.state.clear_dirty();
    }
}
