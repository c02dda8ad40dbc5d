//! Pointer hover tracking with enter/leave events.

use crate::document::Document;
use crate::element::NodeId;
use crate::event::Event;

impl Document {
    /// The node currently under the pointer.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Move the pointer over `over` (or off every node with `None`).
    ///
    /// Nodes that are on the old hover path but not the new one receive a
    /// non-bubbling `mouseleave` (innermost first); nodes newly on the path
    /// receive `mouseenter` (outermost first).
    pub fn pointer_move(&mut self, over: Option<NodeId>) {
        let over = over.filter(|&id| self.contains_node(id));
        if over == self.hovered {
            return;
        }

        let old_path = self.hover_path(self.hovered);
        let new_path = self.hover_path(over);
        self.hovered = over;

        for &node in old_path.iter().filter(|node| !new_path.contains(node)) {
            self.dispatch(node, Event::new("mouseleave"));
        }
        for &node in new_path.iter().rev().filter(|node| !old_path.contains(node)) {
            self.dispatch(node, Event::new("mouseenter"));
        }
    }

    fn hover_path(&self, node: Option<NodeId>) -> Vec<NodeId> {
        match node {
            Some(id) if self.contains_node(id) => {
                let mut path = vec![id];
                path.extend(self.ancestors(id));
                path
            }
            _ => Vec::new(),
        }
    }
}
