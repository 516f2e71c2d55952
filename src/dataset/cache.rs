use std::{collections::HashMap, path::Path, sync::Arc};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::{common, dataset::PreparedDataset};

/// Prepared datasets keyed by the SHA-256 of their source bytes.
///
/// Loading a file whose bytes are unchanged returns the shared, already
/// prepared value instead of re-reading and re-deriving it.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<String, Arc<PreparedDataset>>,
}

impl DatasetCache {
    pub fn new() -> Self { Self::default() }

    /// Load the county CSV at `path`, reusing a cached preparation when the
    /// file content has been seen before.
    pub fn load(&mut self, path: &Path) -> Result<Arc<PreparedDataset>> {
        let (bytes, checksum) = common::read_with_sha256(path)?;

        if let Some(dataset) = self.entries.get(&checksum) {
            debug!("[dataset::cache] hit {} ({})", path.display(), &checksum[..12]);
            return Ok(dataset.clone());
        }

        let dataset = PreparedDataset::from_csv_bytes(&bytes, checksum.clone())
            .with_context(|| format!("[dataset::cache] Failed to load {}", path.display()))?;
        info!("[dataset] loaded {} counties from {}", dataset.len(), path.display());

        let dataset = Arc::new(dataset);
        self.entries.insert(checksum, dataset.clone());
        Ok(dataset)
    }

    /// Cached dataset for a given source checksum.
    pub fn get(&self, checksum: &str) -> Option<Arc<PreparedDataset>> {
        self.entries.get(checksum).cloned()
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
