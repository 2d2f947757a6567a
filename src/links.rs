//! Link resolution across the section/form graph.
//!
//! Links are weak: a reference to a deleted form is never cleaned up, it just
//! resolves to [`UNKNOWN_FORM_LABEL`].

use crate::constants::{NOT_LINKED_LABEL, UNKNOWN_FORM_LABEL};
use crate::types::FormsState;

/// Display label for an optional form reference.
pub fn resolve_form_name<'a>(state: &'a FormsState, form_id: Option<&str>) -> &'a str {
    let Some(form_id) = form_id else {
        return NOT_LINKED_LABEL;
    };
    state
        .find_form(form_id)
        .map(|form| form.name.as_str())
        .unwrap_or(UNKNOWN_FORM_LABEL)
}

/// One selectable target in the link picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkTarget {
    pub form_id: String,
    pub label: String,
}

/// Link targets grouped by section, in tree order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkTargetGroup {
    pub section_id: String,
    pub section_name: String,
    pub targets: Vec<LinkTarget>,
}

/// Forms offered when linking from `editing_form_id`: every form except the
/// one being edited. Sections are listed even when they end up empty.
pub fn link_targets(state: &FormsState, editing_form_id: Option<&str>) -> Vec<LinkTargetGroup> {
    state
        .sections
        .iter()
        .map(|section| LinkTargetGroup {
            section_id: section.id.clone(),
            section_name: section.name.clone(),
            targets: section
                .forms
                .iter()
                .filter(|form| Some(form.id.as_str()) != editing_form_id)
                .map(|form| LinkTarget {
                    form_id: form.id.clone(),
                    label: form.display_name().to_string(),
                })
                .collect(),
        })
        .collect()
}

/// Where a dangling reference lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkOrigin {
    Global,
    Question(String),
}

/// A reference to a form id that no longer exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingLink {
    pub form_id: String,
    pub origin: LinkOrigin,
    pub target: String,
}

/// Report every link whose target is missing from the tree.
pub fn dangling_links(state: &FormsState) -> Vec<DanglingLink> {
    let mut dangling = Vec::new();
    for form in state.forms() {
        if let Some(target) = &form.global_link {
            if state.find_form(target).is_none() {
                dangling.push(DanglingLink {
                    form_id: form.id.clone(),
                    origin: LinkOrigin::Global,
                    target: target.clone(),
                });
            }
        }
        for question in &form.questions {
            let Some(target) = &question.linked_form else {
                continue;
            };
            if state.find_form(target).is_none() {
                dangling.push(DanglingLink {
                    form_id: form.id.clone(),
                    origin: LinkOrigin::Question(question.input.clone()),
                    target: target.clone(),
                });
            }
        }
    }
    dangling
}
