//! Reading exported CSV files back into forms.
//!
//! Both the current `input,output,text_fr,price` header and the legacy
//! trilingual header are accepted. Arabic and English texts of legacy files
//! are dropped. A non-empty `output` becomes the question's own link, since
//! the file cannot tell it apart from a global link.

use crate::constants::{CSV_HEADER, LEGACY_CSV_HEADER, MAIN_QUESTION_INPUT};
use crate::error::{ImportError, ImportResult};
use crate::types::{new_id, Form, Question};

/// Column layout of an imported file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CsvSchema {
    /// `input,output,text_fr,price`
    Current,
    /// `input,output,text_ar,text_fr,text_en,price`
    LegacyTrilingual,
}

impl CsvSchema {
    fn detect(header: &[&str]) -> Option<Self> {
        if header == CSV_HEADER {
            Some(CsvSchema::Current)
        } else if header == LEGACY_CSV_HEADER {
            Some(CsvSchema::LegacyTrilingual)
        } else {
            None
        }
    }

    fn width(self) -> usize {
        match self {
            CsvSchema::Current => CSV_HEADER.len(),
            CsvSchema::LegacyTrilingual => LEGACY_CSV_HEADER.len(),
        }
    }

    fn text_fr_column(self) -> usize {
        match self {
            CsvSchema::Current => 2,
            CsvSchema::LegacyTrilingual => 3,
        }
    }

    fn price_column(self) -> usize {
        self.width() - 1
    }
}

/// Main question and options read from one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportedQuestions {
    pub schema: CsvSchema,
    pub main_question: Question,
    pub questions: Vec<Question>,
}

fn split_row(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Parse a form CSV. Option rows keep their file order and are renumbered
/// `1..N`.
pub fn parse_form_csv(content: &str) -> ImportResult<ImportedQuestions> {
    let content = content.trim_start_matches('\u{feff}');
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines.next().ok_or(ImportError::EmptyFile)?;
    let header = split_row(header_line);
    let schema = CsvSchema::detect(&header)
        .ok_or_else(|| ImportError::UnknownHeader(header_line.trim().to_string()))?;

    let mut main_question = None;
    let mut questions = Vec::new();
    for (index, line) in lines {
        let fields = split_row(line);
        if fields.len() != schema.width() {
            return Err(ImportError::MalformedRow {
                line: index + 1,
                expected: schema.width(),
                found: fields.len(),
            });
        }

        let text_fr = fields[schema.text_fr_column()];
        if fields[0] == MAIN_QUESTION_INPUT {
            main_question = Some(Question::main(text_fr));
            continue;
        }

        let mut question = Question::option(questions.len() + 1).with_text(text_fr);
        let price = fields[schema.price_column()];
        if !price.is_empty() {
            question = question.with_price(price);
        }
        if !fields[1].is_empty() {
            question = question.with_link(fields[1]);
        }
        questions.push(question);
    }

    Ok(ImportedQuestions {
        schema,
        main_question: main_question.ok_or(ImportError::MissingMainQuestion)?,
        questions,
    })
}

/// Build a new custom form named `name` from a CSV file's content.
pub fn import_form(name: &str, content: &str) -> ImportResult<Form> {
    let imported = parse_form_csv(content)?;
    let mut form = Form::new(new_id(), name);
    form.main_question = imported.main_question;
    for question in imported.questions {
        form.push_question(question);
    }
    Ok(form)
}
