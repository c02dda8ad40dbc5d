mod node;

pub use node::Element;

use slotmap::new_key_type;

new_key_type! {
    /// Handle to an element stored in a [`Document`](crate::Document).
    pub struct NodeId;
}
