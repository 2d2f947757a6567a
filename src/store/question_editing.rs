//! Question operations on the current form.
//!
//! Each operation edits a copy of the current form and writes the whole form
//! back through `update_form`. Regular question inputs stay `1..N`.

use super::{move_item, FormStore};
use crate::constants::MAIN_QUESTION_INPUT;
use crate::types::{Question, QuestionPatch};
use tracing::debug;

impl FormStore {
    /// Append a blank question to the current form, returning its input.
    pub fn add_question(&mut self) -> Option<String> {
        let mut input = None;
        self.edit_current_form(|form| {
            let question = Question::option(form.questions.len() + 1);
            input = Some(question.input.clone());
            form.questions.push(question);
            true
        });
        input
    }

    /// Merge `patch` into the question with `input` ("0" is the main question).
    pub fn update_question(&mut self, input: &str, patch: &QuestionPatch) {
        self.edit_current_form(|form| match form.question_mut(input) {
            Some(question) => {
                patch.apply_to(question);
                true
            }
            None => false,
        });
    }

    /// Remove a regular question and close the gap in the inputs.
    pub fn remove_question(&mut self, input: &str) {
        if input == MAIN_QUESTION_INPUT {
            debug!("The main question cannot be removed");
            return;
        }
        self.edit_current_form(|form| {
            let before = form.questions.len();
            form.questions.retain(|q| q.input != input);
            if form.questions.len() == before {
                return false;
            }
            form.reindex_questions();
            true
        });
    }

    /// Move a question by position (0-based) and renumber the inputs.
    pub fn reorder_questions(&mut self, from: usize, to: usize) {
        self.edit_current_form(|form| {
            if !move_item(&mut form.questions, from, to) {
                return false;
            }
            form.reindex_questions();
            true
        });
    }

    /// Set the company name of the current form if it is the welcome form.
    pub fn set_company_name(&mut self, name: &str) {
        self.edit_current_form(|form| form.set_company_name(name));
    }

    /// Rename the current form.
    pub fn rename_current_form(&mut self, name: &str) {
        self.edit_current_form(|form| {
            form.name = name.to_string();
            true
        });
    }
}
