//! CSV export of the form tree.
//!
//! ## Flow
//!
//! 1. [`validate`](crate::validation::validate) runs once over the whole tree;
//!    any violation aborts the export before a file is produced.
//! 2. Every form is rendered with [`generate_csv`] into a [`Bundle`].
//! 3. An [`ArchiveBuilder`] packs the bundle into one artifact named after
//!    the company (or [`DEFAULT_BUNDLE_NAME`](crate::constants::DEFAULT_BUNDLE_NAME)).
//!
//! ## Error Handling
//!
//! All export operations return [`ExportResult<T>`](crate::error::ExportResult).

mod archive;
mod bundle;
mod csv;
mod import;

pub use archive::*;
pub use bundle::*;
pub use csv::*;
pub use import::*;

use crate::error::ExportResult;
use crate::types::FormsState;
use crate::validation::validate;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// A packed bundle ready to be saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Validates, renders and packs the form tree.
pub struct Exporter<A: ArchiveBuilder = ZipArchiveBuilder> {
    archive: A,
    options: BundleOptions,
}

impl Exporter {
    pub fn new(options: BundleOptions) -> Self {
        Self::with_archive(ZipArchiveBuilder, options)
    }
}

impl<A: ArchiveBuilder> Exporter<A> {
    pub fn with_archive(archive: A, options: BundleOptions) -> Self {
        Self { archive, options }
    }

    /// Validate the tree and render every form.
    pub fn bundle(&self, state: &FormsState) -> ExportResult<Bundle> {
        let validated = validate(state)?;
        Ok(build_bundle(
            state,
            validated.company_name.as_deref(),
            &self.options,
        ))
    }

    /// Validate, render and pack the tree into one artifact.
    pub fn export(&self, state: &FormsState) -> ExportResult<Artifact> {
        let bundle = self.bundle(state)?;
        let bytes = self.archive.build(&bundle.files)?;
        info!(
            artifact = %bundle.artifact_name(),
            files = bundle.files.len(),
            bytes = bytes.len(),
            "Exported bundle"
        );
        Ok(Artifact {
            file_name: bundle.artifact_name(),
            bytes,
        })
    }

    /// Export and save the artifact into `dir`, replacing any previous file
    /// of the same name. Returns the written path.
    pub fn export_to_dir(&self, state: &FormsState, dir: &Path) -> ExportResult<PathBuf> {
        let artifact = self.export(state)?;
        std::fs::create_dir_all(dir)?;
        let target = dir.join(&artifact.file_name);

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(&artifact.bytes)?;
        temp.persist(&target).map_err(|e| e.error)?;
        Ok(target)
    }
}
