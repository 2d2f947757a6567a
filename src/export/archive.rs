//! Archive packaging for bundles.

use super::bundle::BundleFile;
use crate::error::ExportResult;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Packs bundle files into one binary artifact.
pub trait ArchiveBuilder {
    fn build(&self, files: &[BundleFile]) -> ExportResult<Vec<u8>>;
}

/// Deflate-compressed zip archive.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZipArchiveBuilder;

impl ArchiveBuilder for ZipArchiveBuilder {
    fn build(&self, files: &[BundleFile]) -> ExportResult<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for file in files {
            writer.start_file(file.path.as_str(), options)?;
            writer.write_all(file.content.as_bytes())?;
        }

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}
