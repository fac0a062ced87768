//! Directory-to-ZIP packaging job.

use crate::core::{ArchiveBundle, ArchiveEntry, Job, PackageConfig, Storage};
use crate::utils::error::Result;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use walkdir::WalkDir;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

pub struct ArchiveJob<S: Storage, C: PackageConfig> {
    storage: S,
    config: C,
}

impl<S: Storage, C: PackageConfig> ArchiveJob<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Archive-relative name for a file: the path below the source root, joined
/// with `/` regardless of platform.
fn entry_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[async_trait::async_trait]
impl<S: Storage, C: PackageConfig> Job for ArchiveJob<S, C> {
    type Item = ArchiveEntry;
    type Output = ArchiveBundle;

    fn name(&self) -> &'static str {
        "package"
    }

    async fn plan(&self) -> Result<Vec<ArchiveEntry>> {
        let root = Path::new(self.config.source_dir());

        // A missing source packages as an empty archive, matching the
        // behavior of a traversal over a nonexistent root.
        if !root.is_dir() {
            tracing::warn!(
                "Source directory {} does not exist, archive will be empty",
                root.display()
            );
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if entry.file_type().is_file() {
                entries.push(ArchiveEntry {
                    name: entry_name(root, entry.path()),
                    path: entry.path().to_path_buf(),
                });
            }
        }

        Ok(entries)
    }

    async fn build(&self, entries: Vec<ArchiveEntry>) -> Result<ArchiveBundle> {
        let entry_count = entries.len();
        tracing::debug!("Creating ZIP archive with {} entries", entry_count);

        let data = {
            let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

            for entry in &entries {
                println!("Adding: {}", entry.name);
                zip.start_file::<_, ()>(
                    entry.name.as_str(),
                    FileOptions::default().compression_method(CompressionMethod::Deflated),
                )?;
                let bytes = fs::read(&entry.path)?;
                zip.write_all(&bytes)?;
            }

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        Ok(ArchiveBundle { data, entry_count })
    }

    async fn publish(&self, bundle: ArchiveBundle) -> Result<String> {
        tracing::debug!(
            "Writing archive ({} bytes, {} entries) to storage",
            bundle.data.len(),
            bundle.entry_count
        );
        self.storage
            .write_file(self.config.archive_name(), &bundle.data)
            .await?;

        Ok(format!(
            "{}/{}",
            self.config.output_path(),
            self.config.archive_name()
        ))
    }
}
