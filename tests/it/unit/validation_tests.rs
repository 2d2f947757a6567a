//! Unit tests for pre-export validation.

use crate::helpers::{menu_form, welcome_form, TestTreeBuilder};
use order_forms::seed;
use order_forms::types::{Form, Question};
use order_forms::validation::{validate, Violation};

#[test]
fn test_valid_tree_surfaces_company_name() {
    let state = TestTreeBuilder::new()
        .section("s1", "Bienvenue")
        .form(welcome_form("w", "Chez Nous"))
        .section("s2", "Menu")
        .form(menu_form("m", "Menu", &["Pizza", "Tacos"]))
        .build();
    let validated = validate(&state).unwrap();
    assert_eq!(validated.company_name.as_deref(), Some("Chez Nous"));
}

#[test]
fn test_tree_without_welcome_form_has_no_company_name() {
    let state = TestTreeBuilder::new()
        .section("s1", "Menu")
        .form(menu_form("m", "Menu", &["Pizza"]))
        .build();
    assert_eq!(validate(&state).unwrap().company_name, None);
}

#[test]
fn test_empty_company_name_is_rejected() {
    let state = TestTreeBuilder::new()
        .section("s1", "Bienvenue")
        .form(welcome_form("w", ""))
        .build();
    let errors = validate(&state).unwrap_err();
    assert_eq!(
        errors.violations(),
        &[Violation::MissingCompanyName {
            form: "Accueil".to_string()
        }]
    );
}

#[test]
fn test_all_violations_are_reported() {
    let state = TestTreeBuilder::new()
        .section("s1", "Bienvenue")
        .form(welcome_form("w", "   "))
        .section("s2", "Perso")
        .form(
            Form::new("c", "")
                .with_question(Question::option(1).with_text("Ok"))
                .with_question(Question::option(2)),
        )
        .build();
    let errors = validate(&state).unwrap_err();
    assert_eq!(
        errors.violations(),
        &[
            Violation::MissingCompanyName {
                form: "Accueil".to_string()
            },
            Violation::MissingMainQuestionText {
                form: "Formulaire sans nom".to_string()
            },
            Violation::MissingQuestionText {
                form: "Formulaire sans nom".to_string(),
                input: "2".to_string()
            },
        ]
    );
    assert_eq!(errors.messages().len(), 3);
    assert!(errors.to_string().starts_with("3 validation error(s)"));
}

#[test]
fn test_seed_state_is_exportable() {
    let validated = validate(&seed::default_state()).unwrap();
    assert_eq!(validated.company_name.as_deref(), Some("[Nom de l'entreprise]"));
}
