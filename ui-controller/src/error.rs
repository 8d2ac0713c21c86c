//! Typed error for the ui-controller crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    /// A page needs at least one tab to have an active one.
    #[error("tab set must not be empty")]
    NoTabs,

    /// Tab ids double as pane ids, so they must be unique.
    #[error("duplicate tab id: {0}")]
    DuplicateTab(String),
}
