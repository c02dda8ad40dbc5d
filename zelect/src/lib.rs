//! A custom single-select dropdown that replaces a native `<select>`.
//!
//! Mounting reads the native control's options, builds an accessible
//! container (placeholder label plus a `listbox` of `option` items) right
//! after it, removes the native control and fires a bubbling, cancelable
//! `mount` notification. Observing that notification wires toggling,
//! hover highlighting and selection onto the new nodes; a per-document
//! registry closes open widgets on outside clicks.

pub mod dismiss;
pub mod error;
pub mod extract;
pub mod instance;
pub mod markup;
pub mod options;
pub mod state;
pub mod swap;
mod widget;
mod wiring;

pub use error::ZelectError;
pub use instance::{Instance, InstanceId};
pub use markup::Markup;
pub use options::{OptionEntry, OptionList, ZelectOptions, PLACEHOLDER_VALUE};
pub use state::{Openness, WidgetState};
pub use widget::Zelect;
