//! Pre-export validation over the whole form tree.
//!
//! Every violation is collected; export only proceeds when the list is
//! empty.

use crate::types::{Form, FormsState};
use std::fmt;
use thiserror::Error;

/// A single problem found in a form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Le nom de l'entreprise est requis ({form})")]
    MissingCompanyName { form: String },

    #[error("La question principale est vide ({form})")]
    MissingMainQuestionText { form: String },

    #[error("La question {input} est vide ({form})")]
    MissingQuestionText { form: String, input: String },
}

/// All violations found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<Violation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s): ", self.0.len())?;
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Outcome of a passing validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTree {
    /// Company name of the first welcome form, used to name the bundle
    pub company_name: Option<String>,
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn check_form(form: &Form, violations: &mut Vec<Violation>) {
    let name = form.display_name();
    if let Some(company) = form.company_name() {
        if is_blank(company) {
            violations.push(Violation::MissingCompanyName {
                form: name.to_string(),
            });
        }
    }
    if is_blank(&form.main_question.text_fr) {
        violations.push(Violation::MissingMainQuestionText {
            form: name.to_string(),
        });
    }
    for question in &form.questions {
        if is_blank(&question.text_fr) {
            violations.push(Violation::MissingQuestionText {
                form: name.to_string(),
                input: question.input.clone(),
            });
        }
    }
}

/// Validate every form of every section.
pub fn validate(state: &FormsState) -> Result<ValidatedTree, ValidationErrors> {
    let mut violations = Vec::new();
    for form in state.forms() {
        check_form(form, &mut violations);
    }
    if !violations.is_empty() {
        return Err(ValidationErrors(violations));
    }

    let company_name = state
        .forms()
        .find_map(|form| form.company_name())
        .map(|name| name.trim().to_string());
    Ok(ValidatedTree { company_name })
}
