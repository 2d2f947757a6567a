//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestTreeBuilder` - Builder pattern for creating form trees
//! - `store_with_blank_form()` - a store whose current form is empty
//! - Assertions on question inputs and cursors

#![allow(dead_code)]

use order_forms::store::FormStore;
use order_forms::types::{Form, FormKind, FormsState, Question, Section};

// ============================================================================
// TestTreeBuilder - Builder pattern for creating form trees
// ============================================================================

/// Builder for creating test states section by section.
///
/// # Example
/// ```ignore
/// let state = TestTreeBuilder::new()
///     .section("s1", "Menu")
///     .form(Form::new("f1", "Pizzas"))
///     .build();
/// ```
#[derive(Default)]
pub struct TestTreeBuilder {
    sections: Vec<Section>,
}

impl TestTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new (non-default) section; following `form` calls add to it.
    pub fn section(mut self, id: &str, name: &str) -> Self {
        self.sections.push(Section::new(id, name));
        self
    }

    /// Start a new default section.
    pub fn default_section(mut self, id: &str, name: &str) -> Self {
        self.sections.push(Section::new(id, name).as_default());
        self
    }

    /// Add a form to the last section.
    pub fn form(mut self, form: Form) -> Self {
        self.sections
            .last_mut()
            .expect("call section() before form()")
            .forms
            .push(form);
        self
    }

    /// State with no cursor set.
    pub fn build(self) -> FormsState {
        FormsState {
            sections: self.sections,
            current_section_id: None,
            current_form_id: None,
        }
    }

    /// Store wrapping the built state (auto-selection applied).
    pub fn store(self) -> FormStore {
        FormStore::new(self.build())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// A valid welcome form.
pub fn welcome_form(id: &str, company: &str) -> Form {
    Form::new(id, "Accueil")
        .with_kind(FormKind::welcome(company))
        .with_main_text("Bonjour")
        .with_question(Question::option(1).with_text("Commander"))
}

/// A valid menu form with the given option texts.
pub fn menu_form(id: &str, name: &str, options: &[&str]) -> Form {
    let mut form = Form::new(id, name)
        .with_kind(FormKind::Menu)
        .with_main_text("Que voulez-vous ?");
    for text in options {
        form.push_question(Question::option(0).with_text(*text));
    }
    form
}

/// Store with one section holding one blank form, selected.
pub fn store_with_blank_form() -> FormStore {
    TestTreeBuilder::new()
        .section("s1", "Section")
        .form(Form::new("f1", "Form"))
        .store()
}

/// Current form of `store`, panicking when there is none.
pub fn current_form(store: &FormStore) -> &Form {
    store.state().current_form().expect("no current form")
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert the regular question inputs are exactly "1".."N".
pub fn assert_contiguous_inputs(form: &Form) {
    let inputs: Vec<&str> = form.questions.iter().map(|q| q.input.as_str()).collect();
    let expected: Vec<String> = (1..=form.questions.len()).map(|i| i.to_string()).collect();
    assert_eq!(inputs, expected, "inputs of form {} are not contiguous", form.id);
    assert_eq!(form.main_question.input, "0");
}

pub fn assert_cursors(store: &FormStore, section: Option<&str>, form: Option<&str>) {
    let state = store.state();
    assert_eq!(state.current_section_id.as_deref(), section, "section cursor");
    assert_eq!(state.current_form_id.as_deref(), form, "form cursor");
}

pub fn section_ids(state: &FormsState) -> Vec<&str> {
    state.sections.iter().map(|s| s.id.as_str()).collect()
}
