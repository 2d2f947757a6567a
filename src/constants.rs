//! Application-wide constants.
//!
//! Centralizes sentinel values, display labels and export names so the
//! store, the validator and the exporter agree on them.

// ============================================================================
// Question Addressing
// ============================================================================

/// Input key of a form's main question
pub const MAIN_QUESTION_INPUT: &str = "0";

/// Link source that targets the form-level global link
pub const GLOBAL_LINK_SOURCE: &str = "global";

// ============================================================================
// Display Labels
// ============================================================================

/// Label for a link reference that is not set
pub const NOT_LINKED_LABEL: &str = "Non lié";

/// Label for a link reference that points at no existing form
pub const UNKNOWN_FORM_LABEL: &str = "Formulaire inconnu";

/// Display name used for forms with an empty name
pub const UNNAMED_FORM_LABEL: &str = "Formulaire sans nom";

// ============================================================================
// Export
// ============================================================================

/// Header row of every exported form
pub const CSV_HEADER: [&str; 4] = ["input", "output", "text_fr", "price"];

/// Header row of the legacy trilingual export
pub const LEGACY_CSV_HEADER: [&str; 6] =
    ["input", "output", "text_ar", "text_fr", "text_en", "price"];

/// File stem used when a form has no name
pub const UNNAMED_FORM_FILE_STEM: &str = "formulaire_sans_nom";

/// Bundle name used when no company name is available
pub const DEFAULT_BUNDLE_NAME: &str = "formulaires_de_commande";

/// Extension of exported form files
pub const CSV_EXTENSION: &str = "csv";

/// Extension of the exported archive
pub const ARCHIVE_EXTENSION: &str = "zip";

// ============================================================================
// Persistence
// ============================================================================

/// Storage key under which the whole state snapshot is written
pub const STORAGE_ROOT_KEY: &str = "root";

/// Version written into every persisted snapshot envelope
pub const SNAPSHOT_VERSION: u32 = 1;

/// Directory name used under the platform data and config directories
pub const APP_DIR_NAME: &str = "order-forms";

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";
