use crate::error::SelectionError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use toml;

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ArchiveSelection {
    id: String,
    provider: String,
    name: String,
    description: String,
    docs: String,
    address: String,
    dates: Vec<String>,
    output_ext: String,
    verbose: bool,
    images: Vec<ImagePair>,
}

/// One image category: the source fragment it is published under and the
/// output fragment it is archived under. Pairing is by record, not by
/// position in parallel lists.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ImagePair {
    pub source_name: String,
    pub source_ext: String,
    pub output_name: String,
    download: bool,
}

impl ImagePair {
    pub fn new(source_name: &str, source_ext: &str, output_name: &str) -> Self {
        ImagePair {
            source_name: source_name.to_string(),
            source_ext: source_ext.to_string(),
            output_name: output_name.to_string(),
            download: true,
        }
    }

    /// Pair up the parallel name/extension lists of the legacy layout,
    /// failing on a length mismatch instead of truncating or indexing out
    /// of bounds.
    pub fn zip(
        source_names: &[String],
        source_exts: &[String],
        output_names: &[String],
    ) -> std::result::Result<Vec<Self>, SelectionError> {
        if source_names.len() != source_exts.len() {
            return Err(SelectionError::SourceExtMismatch {
                sources: source_names.len(),
                extensions: source_exts.len(),
            });
        }
        if source_names.len() != output_names.len() {
            return Err(SelectionError::OutputNameMismatch {
                sources: source_names.len(),
                outputs: output_names.len(),
            });
        }
        let pairs = source_names
            .iter()
            .zip(source_exts.iter())
            .zip(output_names.iter())
            .map(|((name, ext), output)| ImagePair::new(name, ext, output))
            .collect();
        Ok(pairs)
    }
}

impl ArchiveSelection {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let selection: Self = toml::from_str(&content)?;
        Ok(selection)
    }

    pub fn write<P: AsRef<Path>>(self: &Self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn from_template(table: &toml::Table) -> Self {
        let selection: Self =
            toml::from_str(&table.to_string()).expect("Error serializing template");
        selection
    }

    pub fn address(self: &Self) -> &str {
        &self.address
    }

    pub fn output_ext(self: &Self) -> &str {
        &self.output_ext
    }

    pub fn verbose(self: &Self) -> bool {
        self.verbose
    }

    pub fn images_to_download(self: &Self) -> Option<Vec<ImagePair>> {
        let images = self.images.clone();
        let to_download = images
            .into_iter()
            .filter(|p| p.download == true)
            .collect::<Vec<_>>();
        if to_download.is_empty() {
            return None;
        }
        Some(to_download)
    }

    pub fn dates_to_download(self: &Self) -> Option<Vec<String>> {
        if self.dates.is_empty() {
            return None;
        }
        // Remove duplicates, keeping the first occurrence in order
        let mut seen = HashSet::new();
        let dates = self
            .dates
            .iter()
            .filter(|d| seen.insert(d.as_str()))
            .cloned()
            .collect::<Vec<_>>();
        Some(dates)
    }
}
