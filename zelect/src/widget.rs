//! The widget entry point.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use webdom::{Document, EventTarget, NodeId};

use crate::dismiss;
use crate::error::ZelectError;
use crate::extract;
use crate::instance::Instance;
use crate::markup;
use crate::options::ZelectOptions;
use crate::state::WidgetState;
use crate::swap::{self, MOUNT_EVENT};
use crate::wiring;

/// A custom dropdown that replaces a native select.
///
/// # Example
///
/// ```ignore
/// let zelect = Zelect::new(ZelectOptions::new().class_name("zelector"), None);
/// zelect.init(&mut doc);
/// doc.finish_parsing(); // mounts and wires the widget
/// ```
#[derive(Debug, Clone)]
pub struct Zelect {
    inner: Rc<Inner>,
}

#[derive(Debug)]
struct Inner {
    options: ZelectOptions,
    target: Option<String>,
    instance: RefCell<Option<Rc<Instance>>>,
    wired: Cell<bool>,
}

impl Zelect {
    /// `target` selects the native control; empty or `None` means the default
    /// `[data-component="select"]`.
    pub fn new(options: ZelectOptions, target: Option<&str>) -> Self {
        Self {
            inner: Rc::new(Inner {
                options,
                target: target.filter(|t| !t.trim().is_empty()).map(str::to_owned),
                instance: RefCell::new(None),
                wired: Cell::new(false),
            }),
        }
    }

    pub fn options(&self) -> &ZelectOptions {
        &self.inner.options
    }

    /// Watch for this widget's mount notification, install the shared
    /// dismissal listener, and mount once the document is ready.
    ///
    /// Failures are logged, not returned. Use [`mount`](Self::mount) directly
    /// to get the error.
    pub fn init(&self, doc: &mut Document) {
        self.observe_mount(doc);
        dismiss::install(doc);

        let this = self.clone();
        doc.ready(move |doc| {
            if let Err(err) = this.mount(doc) {
                if err.is_target_failure() {
                    log::warn!("zelect not mounted: {err}");
                } else {
                    log::error!("zelect not mounted: {err}");
                }
            }
        });
    }

    /// Extract, synthesize and swap in one pass.
    ///
    /// Interaction is wired by the mount observer that [`init`](Self::init)
    /// installs, so calling this without `init` renders a static widget.
    pub fn mount(&self, doc: &mut Document) -> Result<(), ZelectError> {
        if self.inner.instance.borrow().is_some() {
            return Err(ZelectError::AlreadyMounted);
        }

        let native = extract::resolve_target(doc, self.inner.target.as_deref())?;
        let extracted = extract::extract_options(doc, native)?;
        let options = self.inner.options.resolve(&extracted);
        let markup = markup::synthesize(doc, &options, &self.inner.options)?;

        let instance = Rc::new(Instance::new(markup));
        let container = instance.container();
        *self.inner.instance.borrow_mut() = Some(Rc::clone(&instance));

        match swap::swap_native(doc, native, container) {
            Ok(delivered) => {
                log::info!(
                    "mounted {:?} with {} items (notification delivered: {delivered})",
                    instance.id(),
                    instance.markup().items.len()
                );
                Ok(())
            }
            Err(err) => {
                self.inner.instance.borrow_mut().take();
                doc.remove(container);
                Err(err)
            }
        }
    }

    /// The synthesized container, once mounted.
    pub fn container(&self) -> Option<NodeId> {
        self.instance().map(|instance| instance.container())
    }

    /// Snapshot of the widget state, once mounted.
    pub fn state(&self) -> Option<WidgetState> {
        self.instance().map(|instance| instance.state())
    }

    pub fn instance(&self) -> Option<Rc<Instance>> {
        self.inner.instance.borrow().clone()
    }

    /// Whether interaction listeners are attached.
    pub fn is_wired(&self) -> bool {
        self.inner.wired.get()
    }

    fn observe_mount(&self, doc: &mut Document) {
        let inner = Rc::clone(&self.inner);
        doc.add_event_listener(EventTarget::Document, MOUNT_EVENT, move |doc, event| {
            let Some(instance) = inner.instance.borrow().clone() else {
                return;
            };
            if inner.wired.get() || event.target_node() != Some(instance.container()) {
                return;
            }
            if event.default_prevented() {
                log::debug!("mount of {:?} was cancelled, not wiring", instance.id());
                return;
            }

            inner.wired.set(true);
            wiring::wire(doc, &instance);
            dismiss::register(doc, &instance);
        });
    }
}
