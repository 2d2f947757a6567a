//! Form store - the explicit state container for the editor.
//!
//! This module is organized into several submodules:
//! - `action` - The edit actions understood by the reducer
//! - `reducer` - Pure state transitions and auto-selection
//! - `question_editing` - Question operations on the current form
//! - `linking` - Pending link source and `link_forms`
//!
//! Every successful dispatch runs auto-selection (for tree changes) and then
//! notifies the registered observers with the new state. Persistence is one
//! such observer, see [`crate::persistence::Persister`].

mod action;
mod linking;
mod question_editing;
mod reducer;

pub use action::Action;
pub use linking::LinkSource;
pub use reducer::move_item;

use crate::types::{Form, FormsState, Section};
use tracing::{debug, info};

/// Receives the state after every change.
pub trait StateObserver {
    fn state_changed(&mut self, state: &FormsState);
}

impl<F> StateObserver for F
where
    F: FnMut(&FormsState),
{
    fn state_changed(&mut self, state: &FormsState) {
        self(state)
    }
}

/// Owns the form tree, the cursors and the editor's pending link source.
pub struct FormStore {
    state: FormsState,
    observers: Vec<Box<dyn StateObserver>>,
    pending_link: Option<LinkSource>,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl FormStore {
    /// Wrap an existing state, filling empty cursors.
    pub fn new(mut state: FormsState) -> Self {
        state.auto_select();
        Self {
            state,
            observers: Vec::new(),
            pending_link: None,
        }
    }

    /// A store initialized from the default sections.
    pub fn seeded() -> Self {
        Self::new(crate::seed::default_state())
    }

    pub fn state(&self) -> &FormsState {
        &self.state
    }

    /// Register an observer; it is called after every later change.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply one action and notify observers if anything changed.
    pub fn dispatch(&mut self, action: Action) {
        let name = action.name();
        let runs_auto_select = action.changes_tree();
        let mut changed = self.state.apply(action);
        if runs_auto_select {
            changed |= self.state.auto_select();
        }
        if changed {
            debug!(action = name, "State changed");
            self.notify();
        } else {
            debug!(action = name, "Action had no effect");
        }
    }

    /// Swap in a whole new state (used by reset and import of a snapshot).
    pub fn replace_state(&mut self, state: FormsState) {
        self.state = state;
        self.state.auto_select();
        self.pending_link = None;
        self.notify();
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.state_changed(&self.state);
        }
    }

    // ==================== Sections ====================

    pub fn add_section(&mut self, section: Section) {
        info!(section = %section.id, name = %section.name, "Adding section");
        self.dispatch(Action::AddSection(section));
    }

    /// Create and append a section with a fresh id. Blank names are ignored.
    pub fn new_section(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let section = Section::named(name);
        let id = section.id.clone();
        self.add_section(section);
        Some(id)
    }

    pub fn update_section(&mut self, section: Section) {
        self.dispatch(Action::UpdateSection(section));
    }

    pub fn delete_section(&mut self, id: &str) {
        self.dispatch(Action::DeleteSection(id.to_string()));
    }

    pub fn reorder_sections(&mut self, from: usize, to: usize) {
        self.dispatch(Action::ReorderSections { from, to });
    }

    pub fn set_current_section(&mut self, id: Option<&str>) {
        self.dispatch(Action::SetCurrentSection(id.map(str::to_string)));
    }

    // ==================== Forms ====================

    pub fn add_form(&mut self, section_id: &str, form: Form) {
        info!(section = section_id, form = %form.id, "Adding form");
        self.dispatch(Action::AddForm {
            section_id: section_id.to_string(),
            form,
        });
    }

    /// Append a blank custom form to the current section and select it.
    pub fn new_form(&mut self) -> Option<String> {
        let section_id = self.state.current_section()?.id.clone();
        let form = Form::blank();
        let id = form.id.clone();
        self.add_form(&section_id, form);
        Some(id)
    }

    pub fn update_form(&mut self, form: Form) {
        self.dispatch(Action::UpdateForm(form));
    }

    pub fn delete_form(&mut self, id: &str) {
        info!(form = id, "Deleting form");
        self.dispatch(Action::DeleteForm(id.to_string()));
    }

    pub fn reorder_forms(&mut self, section_id: &str, from: usize, to: usize) {
        self.dispatch(Action::ReorderForms {
            section_id: section_id.to_string(),
            from,
            to,
        });
    }

    pub fn set_current_form(&mut self, id: Option<&str>) {
        self.dispatch(Action::SetCurrentForm(id.map(str::to_string)));
    }

    /// Apply `edit` to a copy of the current form and write it back whole.
    fn edit_current_form(&mut self, edit: impl FnOnce(&mut Form) -> bool) -> bool {
        let Some(mut form) = self.state.current_form().cloned() else {
            return false;
        };
        if !edit(&mut form) {
            return false;
        }
        self.update_form(form);
        true
    }
}
