//! Unit tests for per-form CSV rendering and bundle naming.

use crate::helpers::{menu_form, welcome_form, TestTreeBuilder};
use order_forms::export::{
    build_bundle, bundle_name, file_name_for, generate_csv, BundleOptions,
};
use order_forms::seed;
use order_forms::types::{Form, Question};

#[test]
fn test_csv_body_with_linked_question() {
    let form = Form::new("f", "Menu")
        .with_main_text("Bonjour")
        .with_question(
            Question::option(1)
                .with_text("Pizza")
                .with_price("9.50")
                .with_link("menu2"),
        );
    assert_eq!(
        generate_csv(&form),
        "input,output,text_fr,price\n0,,Bonjour,\n1,menu2,Pizza,9.50"
    );
}

#[test]
fn test_global_link_fills_unlinked_questions() {
    let form = Form::new("f", "Menu")
        .with_main_text("Choix")
        .with_global_link("boissons")
        .with_question(Question::option(1).with_text("Pizza").with_link("pizzas"))
        .with_question(Question::option(2).with_text("Tacos"));
    assert_eq!(
        generate_csv(&form),
        "input,output,text_fr,price\n0,,Choix,\n1,pizzas,Pizza,\n2,boissons,Tacos,"
    );
}

#[test]
fn test_hidden_price_is_left_empty() {
    let mut question = Question::option(1).with_text("Coca").with_price("2.00");
    question.show_price = false;
    let form = Form::new("f", "Boissons")
        .with_main_text("Quelle boisson ?")
        .with_question(question);
    assert_eq!(
        generate_csv(&form),
        "input,output,text_fr,price\n0,,Quelle boisson ?,\n1,,Coca,"
    );
}

#[test]
fn test_form_without_questions_has_two_rows() {
    let form = Form::new("f", "Vide").with_main_text("Rien");
    assert_eq!(generate_csv(&form).lines().count(), 2);
}

#[test]
fn test_commas_are_not_escaped() {
    let form = Form::new("f", "Menu")
        .with_main_text("Bonjour")
        .with_question(Question::option(1).with_text("Pizza, grande"));
    let csv = generate_csv(&form);
    assert_eq!(csv.lines().last(), Some("1,,Pizza, grande,"));
}

#[test]
fn test_seed_welcome_form_snapshot() {
    let state = seed::default_state();
    let welcome = state.find_form(seed::WELCOME_FORM_ID).unwrap();
    insta::assert_snapshot!(generate_csv(welcome), @r"
    input,output,text_fr,price
    0,,Bienvenue ! Comment puis-je vous aider ?,
    1,,Commander maintenant,
    2,,Heures d'ouverture,
    3,,Notre emplacement,
    ");
}

#[test]
fn test_file_names_are_slugged() {
    assert_eq!(file_name_for(&Form::new("f", "Menu Pizza")), "menu_pizza.csv");
    assert_eq!(
        file_name_for(&Form::new("f", "Message de  bienvenue")),
        "message_de_bienvenue.csv"
    );
    assert_eq!(file_name_for(&Form::new("f", "")), "formulaire_sans_nom.csv");
}

#[test]
fn test_path_separators_in_form_names_stay_inside_bundle() {
    assert_eq!(file_name_for(&Form::new("f", "../../evil")), ".._.._evil.csv");
    assert_eq!(file_name_for(&Form::new("f", r"Plats\Chauds")), "plats_chauds.csv");

    let state = TestTreeBuilder::new()
        .section("s1", "Menu")
        .form(menu_form("m", "a/b", &["Pizza"]))
        .build();
    let bundle = build_bundle(&state, Some("Chez Nous"), &BundleOptions::default());
    assert_eq!(bundle.files[0].path, "Chez Nous/a_b.csv");
}

#[test]
fn test_bundle_name_falls_back_to_default() {
    let options = BundleOptions::default();
    assert_eq!(bundle_name(Some("Chez Nous"), &options), "Chez Nous");
    assert_eq!(bundle_name(Some("  "), &options), "formulaires_de_commande");
    assert_eq!(bundle_name(None, &options), "formulaires_de_commande");
    assert_eq!(bundle_name(Some("A/B"), &options), "A_B");
}

#[test]
fn test_bundle_nests_files_under_company_folder() {
    let state = TestTreeBuilder::new()
        .section("s1", "Bienvenue")
        .form(welcome_form("w", "Chez Nous"))
        .section("s2", "Menu")
        .form(menu_form("m", "Menu Pizza", &["Margherita"]))
        .build();

    let nested = build_bundle(&state, Some("Chez Nous"), &BundleOptions::default());
    let paths: Vec<&str> = nested.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["Chez Nous/accueil.csv", "Chez Nous/menu_pizza.csv"]);
    assert_eq!(nested.artifact_name(), "Chez Nous.zip");

    let flat_options = BundleOptions {
        nest_in_folder: false,
        ..BundleOptions::default()
    };
    let flat = build_bundle(&state, None, &flat_options);
    let paths: Vec<&str> = flat.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["accueil.csv", "menu_pizza.csv"]);
    assert_eq!(flat.artifact_name(), "formulaires_de_commande.zip");
}

#[test]
fn test_duplicate_file_names_keep_last_form() {
    let state = TestTreeBuilder::new()
        .section("s1", "Menu")
        .form(menu_form("a", "Menu", &["Pizza"]))
        .form(menu_form("b", "menu", &["Tacos"]))
        .build();
    let options = BundleOptions {
        nest_in_folder: false,
        ..BundleOptions::default()
    };
    let bundle = build_bundle(&state, None, &options);
    assert_eq!(bundle.files.len(), 1);
    assert!(bundle.file("menu.csv").unwrap().content.contains("Tacos"));
}
