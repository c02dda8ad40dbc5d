pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod hover;
pub mod html;
pub mod query;
pub mod selector;

pub use document::{Document, ReadyState};
pub use element::{Element, NodeId};
pub use error::DomError;
pub use event::{Event, EventInit, EventTarget, Listener, ListenerId, Phase};
pub use selector::{Selector, SelectorError};
