//! Replacing the native control with the synthesized container.

use webdom::{Document, Event, EventInit, NodeId};

use crate::error::ZelectError;

/// Type of the notification fired once the container is in place.
pub const MOUNT_EVENT: &str = "mount";
/// Payload carried by the mount notification.
pub const MOUNT_DETAIL: &str = "zelect-mount";

/// Insert `container` right after `native`, drop `native`, then announce the
/// mount on the container.
///
/// Returns `false` if a listener cancelled the mount notification.
pub fn swap_native(
    doc: &mut Document,
    native: NodeId,
    container: NodeId,
) -> Result<bool, ZelectError> {
    doc.insert_after(native, container)?;
    remove_native(doc, native);

    let event = Event::with_init(
        MOUNT_EVENT,
        EventInit::bubbling().cancelable().detail(MOUNT_DETAIL),
    );
    Ok(doc.dispatch(container, event))
}

/// Drop the native control. Already-removed controls are ignored.
pub fn remove_native(doc: &mut Document, native: NodeId) -> bool {
    let removed = doc.remove(native).is_some();
    if removed {
        log::debug!("removed native select {native:?}");
    }
    removed
}
