//! Project list store.

use core_types::Project;
use tracing::info;

/// The last fetched project list and the list currently on display.
///
/// `initial` is only overwritten by a fetch; `working` also changes on a
/// match result or a reset. Neither list is validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectStore {
    initial: Vec<Project>,
    working: Vec<Project>,
}

impl ProjectStore {
    /// Set both lists to a freshly fetched result.
    pub fn initialize(&mut self, list: Vec<Project>) {
        info!(count = list.len(), "initialising projects");
        self.working = list.clone();
        self.initial = list;
    }

    /// Replace only the working list, e.g. with a match result.
    pub fn replace(&mut self, list: Vec<Project>) {
        info!(count = list.len(), "replacing working projects");
        self.working = list;
    }

    /// Restore the working list to the last fetched list.
    pub fn reset(&mut self) {
        info!(count = self.initial.len(), "resetting working projects");
        self.working = self.initial.clone();
    }

    pub fn initial(&self) -> &[Project] {
        &self.initial
    }

    pub fn working(&self) -> &[Project] {
        &self.working
    }
}
