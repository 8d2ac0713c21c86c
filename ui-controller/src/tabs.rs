//! Mutually exclusive tab controls and panes.
//!
//! A tab control and its pane share one id, so a single active index keeps
//! exactly one control and one pane active at any time.

use crate::error::ControllerError;

/// Panes of the results view, first one shown after every answer.
pub const DEFAULT_TABS: [&str; 3] = ["answer", "sources", "metrics"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    ids: Vec<String>,
    active: usize,
}

impl TabSet {
    /// Builds a tab set with the first id active.
    ///
    /// # Errors
    /// [`ControllerError::NoTabs`] for an empty list,
    /// [`ControllerError::DuplicateTab`] when an id repeats.
    pub fn new<I, S>(ids: I) -> Result<Self, ControllerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if out.contains(&id) {
                return Err(ControllerError::DuplicateTab(id));
            }
            out.push(id);
        }
        if out.is_empty() {
            return Err(ControllerError::NoTabs);
        }
        Ok(Self { ids: out, active: 0 })
    }

    /// Activates `id`. Unknown ids leave the current tab active and return `false`.
    pub fn select(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|t| t == id) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }

    /// Back to the first tab.
    pub fn reset(&mut self) {
        self.active = 0;
    }

    pub fn active_id(&self) -> &str {
        &self.ids[self.active]
    }
}
