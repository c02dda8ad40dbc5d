//! Widget error types

use webdom::DomError;

/// Errors that can occur while mounting a widget.
#[derive(Debug, thiserror::Error)]
pub enum ZelectError {
    /// Neither the requested selector nor the default one matched an element.
    #[error("no native select matches `{selector}`")]
    TargetNotFound {
        /// Selector that was tried last.
        selector: String,
    },

    /// The target element has no option collection.
    #[error("<{tag}> is not a native select")]
    NotASelect {
        /// Tag name of the element that was found instead.
        tag: String,
    },

    /// There are no options to render.
    #[error("option list is empty")]
    EmptyOptions,

    /// Every option carries the placeholder value, so nothing can be selected.
    #[error("no selectable option: every option uses the placeholder value")]
    NoSelectableOption,

    /// `mount` was called on a widget that already rendered.
    #[error("widget is already mounted")]
    AlreadyMounted,

    /// Document operation failed.
    #[error(transparent)]
    Dom(#[from] DomError),
}

impl ZelectError {
    /// Returns `true` when the widget had nothing to attach to: the target
    /// is missing, is not a native select, or was already replaced.
    ///
    /// These are expected on pages that do not carry the control and are
    /// logged as warnings. Every other failure is an error.
    pub fn is_target_failure(&self) -> bool {
        matches!(
            self,
            Self::TargetNotFound { .. } | Self::NotASelect { .. } | Self::AlreadyMounted
        )
    }
}
