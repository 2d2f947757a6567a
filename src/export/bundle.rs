//! Multi-file bundle assembly.

use super::csv::{file_name_for, generate_csv};
use crate::constants::{ARCHIVE_EXTENSION, DEFAULT_BUNDLE_NAME};
use crate::types::FormsState;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How the bundle is laid out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BundleOptions {
    /// Put every file under a folder named after the bundle
    pub nest_in_folder: bool,
    /// Bundle name used when there is no company name
    pub default_name: String,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            nest_in_folder: true,
            default_name: DEFAULT_BUNDLE_NAME.to_string(),
        }
    }
}

/// One text file of the bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleFile {
    pub path: String,
    pub content: String,
}

/// Every form rendered to CSV, ready to be archived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bundle {
    pub name: String,
    pub files: Vec<BundleFile>,
}

impl Bundle {
    /// File name of the downloadable artifact
    pub fn artifact_name(&self) -> String {
        format!("{}.{}", self.name, ARCHIVE_EXTENSION)
    }

    pub fn file(&self, path: &str) -> Option<&BundleFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Add a file; a file with the same path is replaced in place.
    fn insert(&mut self, path: String, content: String) {
        match self.files.iter_mut().find(|f| f.path == path) {
            Some(existing) => {
                warn!(path = %path, "Two forms export to the same file name, keeping the last one");
                existing.content = content;
            }
            None => self.files.push(BundleFile { path, content }),
        }
    }
}

/// Name of the bundle: the company name, or the default when blank.
pub fn bundle_name(company_name: Option<&str>, options: &BundleOptions) -> String {
    let name = company_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(options.default_name.as_str());
    name.replace(['/', '\\'], "_")
}

/// Render every form of every section, in tree order.
pub fn build_bundle(
    state: &FormsState,
    company_name: Option<&str>,
    options: &BundleOptions,
) -> Bundle {
    let name = bundle_name(company_name, options);
    let mut bundle = Bundle {
        name: name.clone(),
        files: Vec::with_capacity(state.form_count()),
    };
    for form in state.forms() {
        let file_name = file_name_for(form);
        let path = if options.nest_in_folder {
            format!("{}/{}", name, file_name)
        } else {
            file_name
        };
        bundle.insert(path, generate_csv(form));
    }
    bundle
}
