use std::cell::{Cell, RefCell};

/// Value owned by one widget instance, plus a flag recording whether it
/// changed since the DOM was last written from it.
///
/// Only real changes raise the flag: an update that leaves the value equal
/// to what it was is not a transition.
#[derive(Debug)]
pub(crate) struct State<T> {
    value: RefCell<T>,
    dirty: Cell<bool>,
}

impl<T: Clone + PartialEq> State<T> {
    /// Create a clean state holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            dirty: Cell::new(false),
        }
    }

    pub(crate) fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub(crate) fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Apply `f` and return whether the value changed.
    pub(crate) fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut value = self.value.borrow_mut();
        let before = value.clone();
        f(&mut value);
        let changed = *value != before;
        if changed {
            self.dirty.set(true);
        }
        changed
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub(crate) fn clear_dirty(&self) {
        self.dirty.set(false);
    }
}

/// Whether the dropdown list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Openness {
    #[default]
    Closed,
    Open,
}

impl Openness {
    pub fn is_open(self) -> bool {
        self == Openness::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Openness::Closed => Openness::Open,
            Openness::Open => Openness::Closed,
        }
    }
}

/// Explicit state of one widget instance.
///
/// The container's `is-active` class and the items' `aria-selected`
/// attributes are written from this value, never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    pub openness: Openness,
    /// `data-value` of the selected item.
    pub selected: String,
}

impl WidgetState {
    pub fn new(selected: impl Into<String>) -> Self {
        Self {
            openness: Openness::Closed,
            selected: selected.into(),
        }
    }
}
