//! Closing open widgets when the pointer activates something outside them.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use webdom::{Document, EventTarget, NodeId};

use crate::instance::{Instance, InstanceId};

/// Every wired widget of one document, keyed by instance.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    instances: BTreeMap<InstanceId, Rc<Instance>>,
}

impl Registry {
    fn len(&self) -> usize {
        self.instances.len()
    }

    fn insert(&mut self, instance: &Rc<Instance>) {
        self.instances.insert(instance.id(), Rc::clone(instance));
    }
}

/// Document extension holding the registry.
struct SharedRegistry(Rc<RefCell<Registry>>);

/// The document's registry, installing it (and its single click listener)
/// on first use.
pub(crate) fn install(doc: &mut Document) -> Rc<RefCell<Registry>> {
    if let Some(SharedRegistry(existing)) = doc.extension::<SharedRegistry>() {
        return Rc::clone(existing);
    }

    let registry = Rc::new(RefCell::new(Registry::default()));
    let shared = Rc::clone(&registry);
    doc.add_event_listener(EventTarget::Document, "click", move |doc, event| {
        let instances: Vec<Rc<Instance>> = shared.borrow().instances.values().cloned().collect();
        let stale = dismiss_outside(doc, &instances, event.target_node());
        if !stale.is_empty() {
            let mut registry = shared.borrow_mut();
            for id in stale {
                registry.instances.remove(&id);
            }
        }
    });
    doc.insert_extension(SharedRegistry(Rc::clone(&registry)));
    log::debug!("installed document dismissal listener");

    registry
}

pub(crate) fn register(doc: &mut Document, instance: &Rc<Instance>) {
    install(doc).borrow_mut().insert(instance);
}

/// Number of widgets the document's dismissal listener currently tracks.
pub fn registered(doc: &Document) -> usize {
    doc.extension::<SharedRegistry>()
        .map_or(0, |SharedRegistry(registry)| registry.borrow().len())
}

/// Close every instance whose container does not contain `target`.
///
/// Returns the ids of instances whose container no longer exists.
fn dismiss_outside(
    doc: &mut Document,
    instances: &[Rc<Instance>],
    target: Option<NodeId>,
) -> Vec<InstanceId> {
    let mut stale = Vec::new();
    for instance in instances {
        let container = instance.container();
        if !doc.contains_node(container) {
            stale.push(instance.id());
            continue;
        }
        if !doc.is_connected(container) {
            continue;
        }
        if target.is_some_and(|node| doc.contains(container, node)) {
            continue;
        }
        if instance.close(doc) {
            log::debug!("dismissed {:?} on outside click", instance.id());
        }
    }
    stale
}
