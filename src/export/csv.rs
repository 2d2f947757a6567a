//! Per-form CSV generation.
//!
//! Fields are joined with `,` and rows with `\n`, without quoting. A value
//! containing a comma or a newline corrupts its row; such values are written
//! unchanged and reported with a warning.

use crate::constants::{CSV_EXTENSION, CSV_HEADER, MAIN_QUESTION_INPUT, UNNAMED_FORM_FILE_STEM};
use crate::types::Form;
use tracing::warn;

fn join_row(form: &Form, fields: [&str; 4]) -> String {
    for field in fields {
        if field.contains([',', '\n', '\r']) {
            warn!(
                form = %form.id,
                value = field,
                "Field contains a separator and will break its CSV row"
            );
        }
    }
    fields.join(",")
}

/// Render one form: header, main question row, then one row per question.
pub fn generate_csv(form: &Form) -> String {
    let mut rows = Vec::with_capacity(form.questions.len() + 2);
    rows.push(CSV_HEADER.join(","));
    rows.push(join_row(
        form,
        [MAIN_QUESTION_INPUT, "", form.main_question.text_fr.as_str(), ""],
    ));
    for question in &form.questions {
        rows.push(join_row(
            form,
            [
                question.input.as_str(),
                form.output_for(question).unwrap_or(""),
                question.text_fr.as_str(),
                question.exported_price(),
            ],
        ));
    }
    rows.join("\n")
}

/// Lowercase `name` and collapse every whitespace run into one `_`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

/// File name of a form inside the bundle. Path separators become `_` so
/// every file stays directly inside the bundle folder.
pub fn file_name_for(form: &Form) -> String {
    let stem = if form.name.is_empty() {
        UNNAMED_FORM_FILE_STEM
    } else {
        form.name.as_str()
    };
    let slug = slugify(stem).replace(['/', '\\'], "_");
    format!("{}.{}", slug, CSV_EXTENSION)
}
