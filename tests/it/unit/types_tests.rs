//! Unit tests for the data model.

use order_forms::types::{Form, FormKind, FormsState, Question, Section};
use serde_json::json;

#[test]
fn test_blank_form_defaults() {
    let form = Form::blank();
    assert_eq!(form.kind, FormKind::Custom);
    assert_eq!(form.main_question.input, "0");
    assert!(form.questions.is_empty());
    assert!(form.global_link.is_none());
    assert_eq!(form.id.len(), 36); // UUID v4 format with hyphens
}

#[test]
fn test_blank_forms_get_unique_ids() {
    assert_ne!(Form::blank().id, Form::blank().id);
}

#[test]
fn test_push_question_assigns_next_input() {
    let mut form = Form::new("f1", "Pizzas");
    assert_eq!(form.next_question_input(), "1");
    form.push_question(Question::option(42).with_text("Margherita"));
    form.push_question(Question::option(7).with_text("Regina"));
    let inputs: Vec<&str> = form.questions.iter().map(|q| q.input.as_str()).collect();
    assert_eq!(inputs, vec!["1", "2"]);
}

#[test]
fn test_company_name_only_on_welcome_kind() {
    let mut welcome = Form::new("w", "Accueil").with_kind(FormKind::welcome("Chez Nous"));
    assert_eq!(welcome.company_name(), Some("Chez Nous"));
    assert!(welcome.set_company_name("Pizzeria"));
    assert_eq!(welcome.company_name(), Some("Pizzeria"));

    let mut menu = Form::new("m", "Menu").with_kind(FormKind::Menu);
    assert_eq!(menu.company_name(), None);
    assert!(!menu.set_company_name("Pizzeria"));
}

#[test]
fn test_output_prefers_own_link_over_global_link() {
    let form = Form::new("f", "Menu")
        .with_global_link("drinks")
        .with_question(Question::option(1).with_link("pizzas"))
        .with_question(Question::option(2));
    assert_eq!(form.output_for(&form.questions[0]), Some("pizzas"));
    assert_eq!(form.output_for(&form.questions[1]), Some("drinks"));
}

#[test]
fn test_display_name_placeholder() {
    assert_eq!(Form::new("f", "").display_name(), "Formulaire sans nom");
    assert_eq!(Form::new("f", "Boissons").display_name(), "Boissons");
}

#[test]
fn test_form_serializes_with_kind_tag() {
    let form = Form::new("accueil", "Bienvenue")
        .with_kind(FormKind::welcome("Chez Nous"))
        .with_main_text("Bonjour");
    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(value["type"], json!("accueil"));
    assert_eq!(value["companyName"], json!("Chez Nous"));
    assert_eq!(value["mainQuestion"]["input"], json!("0"));
    assert_eq!(value["mainQuestion"]["text_fr"], json!("Bonjour"));
    assert_eq!(value["globalLink"], json!(null));

    let back: Form = serde_json::from_value(value).unwrap();
    assert_eq!(back, form);
}

#[test]
fn test_question_deserializes_with_defaults() {
    let question: Question =
        serde_json::from_value(json!({ "input": "1", "text_fr": "Pizza", "price": "9" }))
            .unwrap();
    assert!(question.show_price);
    assert!(question.editable);
    assert_eq!(question.linked_form, None);
    assert_eq!(question.exported_price(), "9");
}

#[test]
fn test_state_lookups_span_sections() {
    let state = FormsState {
        sections: vec![
            Section::new("a", "A").with_form(Form::new("f1", "One")),
            Section::new("b", "B").with_form(Form::new("f2", "Two")),
        ],
        current_section_id: Some("a".to_string()),
        current_form_id: Some("f2".to_string()),
    };
    assert_eq!(state.form_count(), 2);
    assert_eq!(state.section_of_form("f2").map(|s| s.id.as_str()), Some("b"));
    assert_eq!(state.current_form().map(|f| f.name.as_str()), Some("Two"));
    assert!(state.find_form("missing").is_none());
}
