//! The document arena: tree operations, ready state and extensions.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use slotmap::{SecondaryMap, SlotMap};

use crate::element::{Element, NodeId};
use crate::error::DomError;
use crate::event::{Event, EventTarget, Listeners};

const EMPTY_CHILDREN: &[NodeId] = &[];

/// Loading progress of a document, mirroring `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Whether callbacks passed to [`Document::ready`] run immediately.
    pub fn is_ready(self) -> bool {
        !matches!(self, ReadyState::Loading)
    }
}

type ReadyCallback = Box<dyn FnOnce(&mut Document)>;

/// An in-memory document backed by a slotmap arena.
///
/// Every document owns a `body` element that is created up front and can
/// never be removed. Nodes created with [`create_element`](Self::create_element)
/// start detached and join the tree through [`append_child`](Self::append_child)
/// or [`insert_after`](Self::insert_after).
pub struct Document {
    nodes: SlotMap<NodeId, Element>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    body: NodeId,
    ready_state: ReadyState,
    pending_ready: Vec<ReadyCallback>,
    pub(crate) listeners: Listeners,
    pub(crate) hovered: Option<NodeId>,
    extensions: HashMap<TypeId, Box<dyn Any>>,
}

impl Document {
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let body = nodes.insert(Element::new("body"));
        let mut children = SecondaryMap::new();
        children.insert(body, Vec::new());

        Self {
            nodes,
            children,
            parent: SecondaryMap::new(),
            body,
            ready_state: ReadyState::Loading,
            pending_ready: Vec::new(),
            listeners: Listeners::default(),
            hovered: None,
            extensions: HashMap::new(),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    // Tree construction

    /// Allocate a detached element.
    pub fn create_element(&mut self, element: Element) -> NodeId {
        let id = self.nodes.insert(element);
        self.children.insert(id, Vec::new());
        id
    }

    /// Allocate an element and append it to `parent` in one step.
    pub fn create_child(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DomError> {
        self.require(parent)?;
        let id = self.create_element(element);
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Move `child` to the end of `parent`'s children, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.require(parent)?;
        self.require(child)?;
        self.check_insertable(parent, child)?;

        self.detach(child);
        self.parent.insert(child, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(child);
        }
        Ok(())
    }

    /// Insert `node` into `reference`'s parent, directly after `reference`.
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) -> Result<(), DomError> {
        self.require(reference)?;
        self.require(node)?;
        if node == reference {
            return Err(DomError::HierarchyRequest("cannot insert a node after itself"));
        }
        let parent = self
            .parent(reference)
            .ok_or(DomError::HierarchyRequest("reference node has no parent"))?;
        self.check_insertable(parent, node)?;

        self.detach(node);
        self.parent.insert(node, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            let index = siblings
                .iter()
                .position(|&sibling| sibling == reference)
                .map_or(siblings.len(), |i| i + 1);
            siblings.insert(index, node);
        }
        Ok(())
    }

    /// Unlink a node from its parent, keeping it (and its subtree) alive.
    ///
    /// Returns `false` if the node was already detached or does not exist.
    pub fn detach(&mut self, id: NodeId) -> bool {
        let Some(parent) = self.parent.remove(id) else {
            return false;
        };
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.retain(|&child| child != id);
        }
        true
    }

    /// Detach a node and drop it together with all its descendants.
    ///
    /// Returns the removed element, or `None` if the node is already gone.
    /// The body cannot be removed.
    pub fn remove(&mut self, id: NodeId) -> Option<Element> {
        if id == self.body || !self.nodes.contains_key(id) {
            return None;
        }
        self.detach(id);

        let mut doomed = vec![id];
        let mut removed = None;
        while let Some(current) = doomed.pop() {
            if let Some(kids) = self.children.remove(current) {
                doomed.extend(kids);
            }
            self.parent.remove(current);
            self.listeners.forget(current);
            if self.hovered == Some(current) {
                self.hovered = None;
            }
            let element = self.nodes.remove(current);
            if current == id {
                removed = element;
            }
        }

        log::trace!("removed node {id:?}");
        removed
    }

    // Navigation

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Children of a node, empty for unknown nodes.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&sibling| sibling == id)?;
        siblings.get(index + 1).copied()
    }

    /// Ancestors from the immediate parent up to the topmost node.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            result.push(parent);
            current = parent;
        }
        result
    }

    /// All descendants of `scope` in tree order, excluding `scope` itself.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        result
    }

    /// Whether `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if !self.contains_node(node) {
            return false;
        }
        node == ancestor || self.ancestors(node).contains(&ancestor)
    }

    /// Whether the node is reachable from the body.
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(self.body, id)
    }

    /// Own text followed by descendant text, in tree order.
    pub fn text_content(&self, id: NodeId) -> String {
        std::iter::once(id)
            .chain(self.descendants(id))
            .filter_map(|node| self.get(node)?.text.as_deref())
            .collect()
    }

    // Ready state

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Run `callback` once the document has been parsed.
    ///
    /// Runs immediately when the document is already interactive or complete,
    /// otherwise the callback is queued until [`finish_parsing`](Self::finish_parsing).
    pub fn ready(&mut self, callback: impl FnOnce(&mut Document) + 'static) {
        if self.ready_state.is_ready() {
            callback(self);
        } else {
            self.pending_ready.push(Box::new(callback));
        }
    }

    /// Move to [`ReadyState::Interactive`], fire `DOMContentLoaded`, then run
    /// queued ready callbacks in registration order.
    pub fn finish_parsing(&mut self) {
        if self.ready_state.is_ready() {
            return;
        }
        self.ready_state = ReadyState::Interactive;
        self.dispatch(EventTarget::Document, Event::new("DOMContentLoaded"));

        let pending = std::mem::take(&mut self.pending_ready);
        log::debug!("document interactive, running {} ready callbacks", pending.len());
        for callback in pending {
            callback(self);
        }
    }

    pub fn finish_loading(&mut self) {
        self.finish_parsing();
        self.ready_state = ReadyState::Complete;
    }

    // Extensions

    /// Store a per-document singleton, replacing any previous value of the same type.
    pub fn insert_extension<T: 'static>(&mut self, value: T) {
        self.extensions.insert(TypeId::of::<T>(), Box::new(value));
    }

    pub fn extension<T: 'static>(&self) -> Option<&T> {
        self.extensions.get(&TypeId::of::<T>())?.downcast_ref()
    }

    pub fn extension_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.extensions.get_mut(&TypeId::of::<T>())?.downcast_mut()
    }

    // Helpers

    pub(crate) fn require(&self, id: NodeId) -> Result<(), DomError> {
        if self.contains_node(id) {
            Ok(())
        } else {
            Err(DomError::NodeNotFound(id))
        }
    }

    fn check_insertable(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if child == self.body {
            return Err(DomError::HierarchyRequest("the body cannot be moved"));
        }
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest(
                "cannot insert a node into its own subtree",
            ));
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("ready_state", &self.ready_state)
            .field("pending_ready", &self.pending_ready.len())
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}
