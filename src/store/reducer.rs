//! State transitions for sections, forms and cursors.
//!
//! Every transition is total: targets that do not exist are ignored and the
//! call reports that nothing changed. Adding a section or form whose id is
//! already in the tree is ignored the same way, so ids stay unique.

use super::Action;
use crate::types::FormsState;
use tracing::debug;

/// Move one element from `from` to `to`, keeping the relative order of the
/// others. Out-of-range indices leave the list untouched.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() || from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

impl FormsState {
    /// Apply `action`, returning whether the state changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::AddSection(section) => {
                if self.section(&section.id).is_some() {
                    debug!(section = %section.id, "Ignoring section with a duplicate id");
                    return false;
                }
                self.sections.push(section);
                true
            }
            Action::UpdateSection(mut section) => {
                let Some(slot) = self.sections.iter_mut().find(|s| s.id == section.id) else {
                    return false;
                };
                section.is_default |= slot.is_default;
                *slot = section;
                true
            }
            Action::DeleteSection(id) => self.delete_section(&id),
            Action::ReorderSections { from, to } => move_item(&mut self.sections, from, to),
            Action::AddForm { section_id, form } => {
                if self.find_form(&form.id).is_some() {
                    debug!(form = %form.id, "Ignoring form with a duplicate id");
                    return false;
                }
                let Some(section) = self.sections.iter_mut().find(|s| s.id == section_id) else {
                    return false;
                };
                self.current_form_id = Some(form.id.clone());
                section.forms.push(form);
                true
            }
            Action::UpdateForm(form) => {
                let slot = self
                    .sections
                    .iter_mut()
                    .flat_map(|s| s.forms.iter_mut())
                    .find(|f| f.id == form.id);
                match slot {
                    Some(slot) => {
                        *slot = form;
                        true
                    }
                    None => false,
                }
            }
            Action::DeleteForm(id) => self.delete_form(&id),
            Action::ReorderForms {
                section_id,
                from,
                to,
            } => match self.sections.iter_mut().find(|s| s.id == section_id) {
                Some(section) => move_item(&mut section.forms, from, to),
                None => false,
            },
            Action::SetCurrentSection(id) => {
                let changed = self.current_section_id != id;
                self.current_section_id = id;
                changed
            }
            Action::SetCurrentForm(id) => {
                let changed = self.current_form_id != id;
                self.current_form_id = id;
                changed
            }
        }
    }

    fn delete_section(&mut self, id: &str) -> bool {
        let Some(index) = self.sections.iter().position(|s| s.id == id) else {
            return false;
        };
        if self.sections[index].is_default {
            debug!(section = id, "Ignoring delete of default section");
            return false;
        }

        let removed = self.sections.remove(index);
        if self.current_section_id.as_deref() == Some(id) {
            self.current_section_id = self.sections.first().map(|s| s.id.clone());
        }
        if let Some(form_id) = self.current_form_id.as_deref() {
            if removed.contains_form(form_id) {
                self.current_form_id = None;
            }
        }
        true
    }

    fn delete_form(&mut self, id: &str) -> bool {
        let Some(section) = self.sections.iter_mut().find(|s| s.contains_form(id)) else {
            return false;
        };
        section.forms.retain(|f| f.id != id);
        if self.current_form_id.as_deref() == Some(id) {
            self.current_form_id = section.forms.first().map(|f| f.id.clone());
        }
        true
    }

    /// Fill empty cursors: the first section, then the first form of the
    /// current section. Never overrides a cursor that is already set.
    pub fn auto_select(&mut self) -> bool {
        let mut changed = false;
        if self.current_section_id.is_none() {
            if let Some(first) = self.sections.first() {
                self.current_section_id = Some(first.id.clone());
                changed = true;
            }
        }
        if self.current_form_id.is_none() {
            let first_form = self
                .current_section()
                .and_then(|s| s.forms.first())
                .map(|f| f.id.clone());
            if let Some(form_id) = first_form {
                self.current_form_id = Some(form_id);
                changed = true;
            }
        }
        changed
    }
}
