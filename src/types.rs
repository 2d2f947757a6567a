//! Core types for the order form tree.
//!
//! Sections group forms, forms own one main question plus an ordered list of
//! selectable questions. Cross-form links are weak references by form id.

use crate::constants::{MAIN_QUESTION_INPUT, UNNAMED_FORM_LABEL};
use serde::{Deserialize, Serialize};

/// Generate a fresh identifier for a section or form.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Question
// ============================================================================

/// One selectable option within a form, or the form's main prompt.
///
/// Regular questions carry `input` values `"1".."N"` matching their position;
/// the main question always carries [`MAIN_QUESTION_INPUT`] and never has a
/// price or a link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub input: String,
    #[serde(rename = "text_fr")]
    pub text_fr: String,
    /// Numeric string, only meaningful on regular questions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Whether `price` is emitted on export
    #[serde(default = "default_true")]
    pub show_price: bool,
    #[serde(default)]
    pub linked_form: Option<String>,
    #[serde(default = "default_true")]
    pub editable: bool,
}

impl Question {
    /// The main prompt of a form.
    pub fn main(text_fr: impl Into<String>) -> Self {
        Self {
            input: MAIN_QUESTION_INPUT.to_string(),
            text_fr: text_fr.into(),
            price: None,
            show_price: false,
            linked_form: None,
            editable: true,
        }
    }

    /// A blank regular question at the given 1-based position.
    pub fn option(position: usize) -> Self {
        Self {
            input: position.to_string(),
            text_fr: String::new(),
            price: Some(String::new()),
            show_price: true,
            linked_form: None,
            editable: true,
        }
    }

    pub fn with_text(mut self, text_fr: impl Into<String>) -> Self {
        self.text_fr = text_fr.into();
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_link(mut self, form_id: impl Into<String>) -> Self {
        self.linked_form = Some(form_id.into());
        self
    }

    pub fn is_main(&self) -> bool {
        self.input == MAIN_QUESTION_INPUT
    }

    /// Price as written to the export: empty unless shown and set.
    pub fn exported_price(&self) -> &str {
        if self.is_main() || !self.show_price {
            return "";
        }
        self.price.as_deref().unwrap_or("")
    }
}

/// Partial update merged into a question by `update_question`.
///
/// `None` leaves a field untouched. `price` and `linked_form` are ignored
/// when the target is the main question.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub text_fr: Option<String>,
    pub price: Option<Option<String>>,
    pub show_price: Option<bool>,
    pub linked_form: Option<Option<String>>,
    pub editable: Option<bool>,
}

impl QuestionPatch {
    pub fn text(text_fr: impl Into<String>) -> Self {
        Self {
            text_fr: Some(text_fr.into()),
            ..Default::default()
        }
    }

    pub fn price(price: impl Into<String>) -> Self {
        Self {
            price: Some(Some(price.into())),
            ..Default::default()
        }
    }

    pub fn show_price(show: bool) -> Self {
        Self {
            show_price: Some(show),
            ..Default::default()
        }
    }

    /// Merge the set fields into `question`.
    pub fn apply_to(&self, question: &mut Question) {
        if let Some(text) = &self.text_fr {
            question.text_fr = text.clone();
        }
        if let Some(editable) = self.editable {
            question.editable = editable;
        }
        if question.is_main() {
            return;
        }
        if let Some(price) = &self.price {
            question.price = price.clone();
        }
        if let Some(show) = self.show_price {
            question.show_price = show;
        }
        if let Some(link) = &self.linked_form {
            question.linked_form = link.clone();
        }
    }
}

// ============================================================================
// Form
// ============================================================================

/// The closed set of form kinds.
///
/// Serialized as the `type` tag of the enclosing form with the French tags
/// used by the ordering engine. Only the welcome kind carries a company name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FormKind {
    #[serde(rename = "accueil", rename_all = "camelCase")]
    Welcome {
        #[serde(default)]
        company_name: String,
    },
    #[serde(rename = "menu")]
    Menu,
    #[default]
    #[serde(rename = "personnalise")]
    Custom,
    #[serde(rename = "nourriture")]
    Food,
    #[serde(rename = "supplements")]
    Addons,
    #[serde(rename = "boissons")]
    Drinks,
    #[serde(rename = "gratins")]
    Gratins,
}

impl FormKind {
    pub fn welcome(company_name: impl Into<String>) -> Self {
        FormKind::Welcome {
            company_name: company_name.into(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Welcome { .. } => "accueil",
            FormKind::Menu => "menu",
            FormKind::Custom => "personnalise",
            FormKind::Food => "nourriture",
            FormKind::Addons => "supplements",
            FormKind::Drinks => "boissons",
            FormKind::Gratins => "gratins",
        }
    }

    /// Parse a kind tag; the welcome kind starts with an empty company name.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "accueil" => FormKind::welcome(""),
            "menu" => FormKind::Menu,
            "personnalise" => FormKind::Custom,
            "nourriture" => FormKind::Food,
            "supplements" => FormKind::Addons,
            "boissons" => FormKind::Drinks,
            "gratins" => FormKind::Gratins,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_welcome(&self) -> bool {
        matches!(self, FormKind::Welcome { .. })
    }
}

/// One order-flow screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    /// Unique across every section
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: FormKind,
    pub main_question: Question,
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Default next form for questions without their own link
    #[serde(default)]
    pub global_link: Option<String>,
}

impl Form {
    /// An empty custom form with the given id.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: FormKind::Custom,
            main_question: Question::main(""),
            questions: Vec::new(),
            global_link: None,
        }
    }

    /// An empty, unnamed custom form with a fresh id.
    pub fn blank() -> Self {
        Self::new(new_id(), "")
    }

    pub fn with_kind(mut self, kind: FormKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_main_text(mut self, text_fr: impl Into<String>) -> Self {
        self.main_question.text_fr = text_fr.into();
        self
    }

    /// Append a question, assigning it the next input.
    pub fn with_question(mut self, question: Question) -> Self {
        self.push_question(question);
        self
    }

    pub fn with_global_link(mut self, form_id: impl Into<String>) -> Self {
        self.global_link = Some(form_id.into());
        self
    }

    /// Name shown to the user, with a placeholder for unnamed forms
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNNAMED_FORM_LABEL
        } else {
            &self.name
        }
    }

    pub fn company_name(&self) -> Option<&str> {
        match &self.kind {
            FormKind::Welcome { company_name } => Some(company_name.as_str()),
            _ => None,
        }
    }

    /// Set the company name; returns false for kinds that have none.
    pub fn set_company_name(&mut self, name: impl Into<String>) -> bool {
        match &mut self.kind {
            FormKind::Welcome { company_name } => {
                *company_name = name.into();
                true
            }
            _ => false,
        }
    }

    /// Input the next appended question receives
    pub fn next_question_input(&self) -> String {
        (self.questions.len() + 1).to_string()
    }

    /// Append `question` at the end, overwriting its input.
    pub fn push_question(&mut self, mut question: Question) {
        question.input = self.next_question_input();
        self.questions.push(question);
    }

    pub fn question(&self, input: &str) -> Option<&Question> {
        if input == MAIN_QUESTION_INPUT {
            return Some(&self.main_question);
        }
        self.questions.iter().find(|q| q.input == input)
    }

    pub fn question_mut(&mut self, input: &str) -> Option<&mut Question> {
        if input == MAIN_QUESTION_INPUT {
            return Some(&mut self.main_question);
        }
        self.questions.iter_mut().find(|q| q.input == input)
    }

    /// Reassign inputs `1..N` in current order.
    pub fn reindex_questions(&mut self) {
        for (index, question) in self.questions.iter_mut().enumerate() {
            question.input = (index + 1).to_string();
        }
    }

    /// Next-form reference a question exports: its own link, else the
    /// form's global link.
    pub fn output_for<'a>(&'a self, question: &'a Question) -> Option<&'a str> {
        question
            .linked_form
            .as_deref()
            .or(self.global_link.as_deref())
    }
}

// ============================================================================
// Section
// ============================================================================

/// A named, ordered group of forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub forms: Vec<Form>,
    /// Default sections cannot be deleted
    #[serde(default)]
    pub is_default: bool,
}

impl Section {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            forms: Vec::new(),
            is_default: false,
        }
    }

    /// A user-created section with a fresh id.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(new_id(), name)
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.forms.push(form);
        self
    }

    pub fn contains_form(&self, id: &str) -> bool {
        self.forms.iter().any(|f| f.id == id)
    }
}

// ============================================================================
// State Snapshot
// ============================================================================

/// The whole editor state: the section tree plus the two cursors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormsState {
    pub sections: Vec<Section>,
    #[serde(default)]
    pub current_section_id: Option<String>,
    #[serde(default)]
    pub current_form_id: Option<String>,
}

impl FormsState {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Every form of every section, in tree order.
    pub fn forms(&self) -> impl Iterator<Item = &Form> {
        self.sections.iter().flat_map(|s| s.forms.iter())
    }

    pub fn form_count(&self) -> usize {
        self.sections.iter().map(|s| s.forms.len()).sum()
    }

    /// Look up a form anywhere in the tree.
    pub fn find_form(&self, id: &str) -> Option<&Form> {
        self.forms().find(|f| f.id == id)
    }

    /// Section that currently holds the form with `id`.
    pub fn section_of_form(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.contains_form(id))
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.current_section_id
            .as_deref()
            .and_then(|id| self.section(id))
    }

    /// The form under the form cursor, resolved across all sections.
    pub fn current_form(&self) -> Option<&Form> {
        self.current_form_id
            .as_deref()
            .and_then(|id| self.find_form(id))
    }
}
