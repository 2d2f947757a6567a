//! Default state used on first run and after a reset.

use crate::types::{Form, FormKind, FormsState, Question, Section};

/// Id of the seeded welcome form
pub const WELCOME_FORM_ID: &str = "accueil";

/// Id of the seeded menu form
pub const MENU_FORM_ID: &str = "menu";

fn welcome_form() -> Form {
    Form::new(WELCOME_FORM_ID, "Message de bienvenue")
        .with_kind(FormKind::welcome("[Nom de l'entreprise]"))
        .with_main_text("Bienvenue ! Comment puis-je vous aider ?")
        .with_question(Question::option(1).with_text("Commander maintenant"))
        .with_question(Question::option(2).with_text("Heures d'ouverture"))
        .with_question(Question::option(3).with_text("Notre emplacement"))
}

fn menu_form() -> Form {
    Form::new(MENU_FORM_ID, "Menu")
        .with_kind(FormKind::Menu)
        .with_main_text("Que voulez-vous commander ?")
        .with_question(Question::option(1).with_text("Pizza"))
        .with_question(Question::option(2).with_text("Tacos"))
        .with_question(Question::option(3).with_text("Sandwiches"))
}

/// The fixed default sections, all marked non-deletable.
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new("bienvenue", "Bienvenue")
            .as_default()
            .with_form(welcome_form()),
        Section::new("menu", "Menu").as_default().with_form(menu_form()),
        Section::new("nourriture", "Nourriture").as_default(),
        Section::new("supplements", "Suppléments").as_default(),
        Section::new("boissons", "Boissons").as_default(),
        Section::new("gratins", "Gratins").as_default(),
    ]
}

/// Seed state with the welcome form selected.
pub fn default_state() -> FormsState {
    FormsState {
        sections: default_sections(),
        current_section_id: Some("bienvenue".to_string()),
        current_form_id: Some(WELCOME_FORM_ID.to_string()),
    }
}
