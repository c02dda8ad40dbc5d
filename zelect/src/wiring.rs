//! Per-instance interaction listeners.

use std::rc::Rc;

use webdom::{Document, NodeId};

use crate::instance::Instance;
use crate::markup::HOVER_CLASS;

/// Attach toggle, hover and selection listeners to the instance's own nodes.
pub(crate) fn wire(doc: &mut Document, instance: &Rc<Instance>) {
    let this = Rc::clone(instance);
    doc.add_event_listener(instance.container(), "click", move |doc, _| {
        this.toggle(doc);
    });

    for item in &instance.markup().items {
        let node = item.node;
        doc.add_event_listener(node, "mouseenter", move |doc, _| set_hover(doc, node, true));
        doc.add_event_listener(node, "mouseleave", move |doc, _| set_hover(doc, node, false));

        let this = Rc::clone(instance);
        let value = item.value.clone();
        doc.add_event_listener(node, "click", move |doc, _| this.select(doc, &value));
    }

    log::debug!(
        "wired {:?}: container + {} items",
        instance.id(),
        instance.markup().items.len()
    );
}

fn set_hover(doc: &mut Document, node: NodeId, hovered: bool) {
    if let Some(element) = doc.get_mut(node) {
        if hovered {
            element.add_class(HOVER_CLASS);
        } else {
            element.remove_class(HOVER_CLASS);
        }
    }
}
