//! Edit actions understood by the reducer.

use crate::types::{Form, Section};

/// A single edit to the form tree or its cursors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    AddSection(Section),
    UpdateSection(Section),
    DeleteSection(String),
    ReorderSections { from: usize, to: usize },
    AddForm { section_id: String, form: Form },
    UpdateForm(Form),
    DeleteForm(String),
    ReorderForms {
        section_id: String,
        from: usize,
        to: usize,
    },
    SetCurrentSection(Option<String>),
    SetCurrentForm(Option<String>),
}

impl Action {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddSection(_) => "add_section",
            Action::UpdateSection(_) => "update_section",
            Action::DeleteSection(_) => "delete_section",
            Action::ReorderSections { .. } => "reorder_sections",
            Action::AddForm { .. } => "add_form",
            Action::UpdateForm(_) => "update_form",
            Action::DeleteForm(_) => "delete_form",
            Action::ReorderForms { .. } => "reorder_forms",
            Action::SetCurrentSection(_) => "set_current_section",
            Action::SetCurrentForm(_) => "set_current_form",
        }
    }

    /// Whether the action touches sections or forms (as opposed to cursors
    /// only). Auto-selection runs after these.
    pub fn changes_tree(&self) -> bool {
        !matches!(
            self,
            Action::SetCurrentSection(_) | Action::SetCurrentForm(_)
        )
    }
}
