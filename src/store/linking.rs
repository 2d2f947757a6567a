//! Form linking.
//!
//! The editor first records where a link starts (the form's global link or
//! one question) and then `link_forms` writes the chosen target. Links are
//! plain ids; self links and cycles are allowed.

use super::FormStore;
use crate::constants::{GLOBAL_LINK_SOURCE, MAIN_QUESTION_INPUT};
use tracing::debug;

/// Where a pending link is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkSource {
    /// The current form's `global_link`
    Global,
    /// The `linked_form` of the question with this input
    Question(String),
}

impl LinkSource {
    /// Parse the editor's source key: `"global"` or a question input.
    pub fn parse(source: &str) -> Self {
        if source == GLOBAL_LINK_SOURCE {
            LinkSource::Global
        } else {
            LinkSource::Question(source.to_string())
        }
    }
}

impl FormStore {
    pub fn begin_link(&mut self, source: LinkSource) {
        self.pending_link = Some(source);
    }

    pub fn cancel_link(&mut self) {
        self.pending_link = None;
    }

    pub fn pending_link(&self) -> Option<&LinkSource> {
        self.pending_link.as_ref()
    }

    /// Write `target_form_id` into the pending link source of the current
    /// form. The pending source is consumed either way.
    pub fn link_forms(&mut self, target_form_id: &str) {
        let Some(source) = self.pending_link.take() else {
            debug!("link_forms called without a pending link source");
            return;
        };
        let target = target_form_id.to_string();
        self.edit_current_form(|form| match &source {
            LinkSource::Global => {
                form.global_link = Some(target);
                true
            }
            LinkSource::Question(input) if input == MAIN_QUESTION_INPUT => false,
            LinkSource::Question(input) => match form.question_mut(input) {
                Some(question) => {
                    question.linked_form = Some(target);
                    true
                }
                None => false,
            },
        });
    }

    /// Clear a link source of the current form.
    pub fn unlink(&mut self, source: &LinkSource) {
        self.edit_current_form(|form| match source {
            LinkSource::Global => form.global_link.take().is_some(),
            LinkSource::Question(input) => form
                .questions
                .iter_mut()
                .find(|q| &q.input == input)
                .is_some_and(|q| q.linked_form.take().is_some()),
        });
    }
}
