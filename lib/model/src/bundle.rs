use crate::pipeline::EmbeddingPipeline;
use quantx_core::{DocumentTable, Error, Result, Vector};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// The serialized training artifact
///
/// Holds the frozen pipeline stages, the per-document embedding matrix and
/// the augmented document table as one unit. Written once by the trainer,
/// loaded once by the scorer and treated as read-only for the lifetime of
/// the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBundle {
    pub pipeline: EmbeddingPipeline,
    pub embeddings: Vec<Vector>,
    pub table: DocumentTable,
}

impl ModelBundle {
    /// Number of documents in the bundle
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }

    /// Save the bundle to disk
    ///
    /// Writes to a temp file first and renames, so a crash mid-write never
    /// leaves a truncated bundle behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let data =
            bincode::serialize(self).map_err(|e| Error::Serialization(e.to_string()))?;

        let temp = path.with_extension("tmp");
        std::fs::write(&temp, &data)?;
        std::fs::rename(&temp, path)?;

        info!(path = %path.display(), bytes = data.len(), "model bundle saved");
        Ok(())
    }

    /// Load a bundle from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let bundle: Self =
            bincode::deserialize(&data).map_err(|e| Error::Bundle(e.to_string()))?;

        if bundle.embeddings.len() != bundle.table.len() {
            return Err(Error::Bundle(format!(
                "embedding count {} does not match table rows {}",
                bundle.embeddings.len(),
                bundle.table.len()
            )));
        }

        info!(
            path = %path.display(),
            documents = bundle.len(),
            "model bundle loaded"
        );
        Ok(bundle)
    }
}
