//! Events, listener registration and dispatch.

use std::collections::HashMap;
use std::rc::Rc;

use crate::document::Document;
use crate::element::NodeId;

/// Callback invoked during dispatch. Receives the document mutably so a
/// handler can restyle nodes, add listeners or dispatch further events.
pub type Listener = Rc<dyn Fn(&mut Document, &mut Event)>;

/// Where an event is dispatched or a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Document,
    Node(NodeId),
}

impl EventTarget {
    pub fn node(self) -> Option<NodeId> {
        match self {
            EventTarget::Node(id) => Some(id),
            EventTarget::Document => None,
        }
    }
}

impl From<NodeId> for EventTarget {
    fn from(id: NodeId) -> Self {
        EventTarget::Node(id)
    }
}

/// Dispatch phase the event is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    None,
    AtTarget,
    Bubbling,
}

/// Options used to construct an [`Event`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventInit {
    pub bubbles: bool,
    pub cancelable: bool,
    pub detail: Option<String>,
}

impl EventInit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bubbling() -> Self {
        Self {
            bubbles: true,
            ..Default::default()
        }
    }

    pub fn cancelable(mut self) -> Self {
        self.cancelable = true;
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// An event travelling through the document.
#[derive(Debug, Clone)]
pub struct Event {
    kind: String,
    bubbles: bool,
    cancelable: bool,
    detail: Option<String>,
    target: Option<EventTarget>,
    current_target: Option<EventTarget>,
    phase: Phase,
    default_prevented: bool,
    propagation_stopped: bool,
    immediate_stopped: bool,
}

impl Event {
    /// A non-bubbling, non-cancelable event.
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_init(kind, EventInit::default())
    }

    pub fn with_init(kind: impl Into<String>, init: EventInit) -> Self {
        Self {
            kind: kind.into(),
            bubbles: init.bubbles,
            cancelable: init.cancelable,
            detail: init.detail,
            target: None,
            current_target: None,
            phase: Phase::None,
            default_prevented: false,
            propagation_stopped: false,
            immediate_stopped: false,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn target(&self) -> Option<EventTarget> {
        self.target
    }

    /// The target node, `None` for document-targeted events.
    pub fn target_node(&self) -> Option<NodeId> {
        self.target.and_then(EventTarget::node)
    }

    pub fn current_target(&self) -> Option<EventTarget> {
        self.current_target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Ignored for non-cancelable events.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Finish the current node's listeners, then stop.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Stop before the next listener, even on the current node.
    pub fn stop_immediate_propagation(&mut self) {
        self.propagation_stopped = true;
        self.immediate_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Handle returned by [`Document::add_event_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Registration {
    id: ListenerId,
    kind: String,
    listener: Listener,
}

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: HashMap<EventTarget, Vec<Registration>>,
}

impl Listeners {
    fn add(&mut self, target: EventTarget, kind: &str, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.entry(target).or_default().push(Registration {
            id,
            kind: kind.to_owned(),
            listener,
        });
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        for registrations in self.entries.values_mut() {
            if let Some(index) = registrations.iter().position(|r| r.id == id) {
                registrations.remove(index);
                return true;
            }
        }
        false
    }

    fn snapshot(&self, target: EventTarget, kind: &str) -> Vec<Listener> {
        self.entries
            .get(&target)
            .map(|registrations| {
                registrations
                    .iter()
                    .filter(|r| r.kind == kind)
                    .map(|r| Rc::clone(&r.listener))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn count(&self, target: EventTarget, kind: &str) -> usize {
        self.entries
            .get(&target)
            .map_or(0, |registrations| registrations.iter().filter(|r| r.kind == kind).count())
    }

    pub(crate) fn forget(&mut self, node: NodeId) {
        self.entries.remove(&EventTarget::Node(node));
    }
}

impl Document {
    pub fn add_event_listener(
        &mut self,
        target: impl Into<EventTarget>,
        kind: &str,
        listener: impl Fn(&mut Document, &mut Event) + 'static,
    ) -> ListenerId {
        self.listeners.add(target.into(), kind, Rc::new(listener))
    }

    /// Returns `false` if the listener was already removed.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of listeners of `kind` attached directly to `target`.
    pub fn listener_count(&self, target: impl Into<EventTarget>, kind: &str) -> usize {
        self.listeners.count(target.into(), kind)
    }

    /// Dispatch `event` at `target`.
    ///
    /// The propagation path is the target, its ancestors, then the document
    /// when the target is connected. Returns `false` if a listener prevented
    /// the default action.
    pub fn dispatch(&mut self, target: impl Into<EventTarget>, mut event: Event) -> bool {
        let target = target.into();
        let path = self.propagation_path(target);

        event.target = Some(target);
        for (index, &current) in path.iter().enumerate() {
            if index > 0 && !event.bubbles {
                break;
            }
            event.phase = if index == 0 {
                Phase::AtTarget
            } else {
                Phase::Bubbling
            };
            event.current_target = Some(current);

            for listener in self.listeners.snapshot(current, &event.kind) {
                listener(self, &mut event);
                if event.immediate_stopped {
                    break;
                }
            }
            if event.propagation_stopped {
                break;
            }
        }
        event.phase = Phase::None;
        event.current_target = None;

        log::trace!(
            "dispatched {} at {target:?} (prevented={})",
            event.kind,
            event.default_prevented
        );
        !event.default_prevented
    }

    /// Simulate a pointer activation: a bubbling, cancelable `click`.
    pub fn click(&mut self, target: NodeId) -> bool {
        self.dispatch(target, Event::with_init("click", EventInit::bubbling().cancelable()))
    }

    fn propagation_path(&self, target: EventTarget) -> Vec<EventTarget> {
        match target {
            EventTarget::Document => vec![EventTarget::Document],
            EventTarget::Node(id) => {
                if !self.contains_node(id) {
                    return Vec::new();
                }
                let mut path = vec![EventTarget::Node(id)];
                path.extend(self.ancestors(id).into_iter().map(EventTarget::Node));
                if self.is_connected(id) {
                    path.push(EventTarget::Document);
                }
                path
            }
        }
    }
}
