use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::foundation::error::{DeckmorphError, DeckmorphResult};
use crate::foundation::math::content_digest;
use crate::model::record::{ImageRef, ShapeId};

/// Identity of one persisted picture payload.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageKey {
    /// 0-based slide index.
    pub slide_index: usize,
    /// Picture shape id within the slide.
    pub shape_id: ShapeId,
}

/// Persistence contract for picture bytes.
///
/// The builder calls [`ImageStore::persist`] once per picture per slide. Implementations must be
/// overwrite-safe, and the returned reference must depend only on the shape id and the payload:
/// the same picture on consecutive slides yields the same reference, so the differ sees no change.
pub trait ImageStore {
    /// Store `bytes` under `key` and return a stable reference to them.
    fn persist(&mut self, key: &ImageKey, bytes: &[u8]) -> DeckmorphResult<ImageRef>;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryImageStore {
    images: BTreeMap<ImageKey, Vec<u8>>,
    writes: usize,
}

impl InMemoryImageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes stored under `key`.
    pub fn get(&self, key: &ImageKey) -> Option<&[u8]> {
        self.images.get(key).map(Vec::as_slice)
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Return `true` when nothing was stored.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Total number of `persist` calls, including overwrites.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl ImageStore for InMemoryImageStore {
    fn persist(&mut self, key: &ImageKey, bytes: &[u8]) -> DeckmorphResult<ImageRef> {
        self.images.insert(key.clone(), bytes.to_vec());
        self.writes += 1;
        Ok(image_ref_for(key, bytes, "bin"))
    }
}

/// Writes each picture to `<root>/shape{id}_{digest}.{ext}`, `digest` being the 16-hex-digit
/// FNV-1a of the payload.
///
/// The extension is sniffed from the payload (`png` when the format is unknown). References are
/// file names relative to `root`.
#[derive(Clone, Debug)]
pub struct DirImageStore {
    root: PathBuf,
}

impl DirImageStore {
    /// Store rooted at `root`; the directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path a reference returned by this store points at.
    pub fn path_for(&self, image: &ImageRef) -> PathBuf {
        self.root.join(&image.0)
    }
}

impl ImageStore for DirImageStore {
    fn persist(&mut self, key: &ImageKey, bytes: &[u8]) -> DeckmorphResult<ImageRef> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            DeckmorphError::image_store(format!(
                "create image directory '{}': {e}",
                self.root.display()
            ))
        })?;

        let image = image_ref_for(key, bytes, sniff_extension(bytes));
        let path = self.path_for(&image);
        std::fs::write(&path, bytes).map_err(|e| {
            DeckmorphError::image_store(format!("write image '{}': {e}", path.display()))
        })?;

        tracing::debug!(
            slide = key.slide_index,
            path = %path.display(),
            len = bytes.len(),
            "persisted image"
        );
        Ok(image)
    }
}

fn image_ref_for(key: &ImageKey, bytes: &[u8], ext: &str) -> ImageRef {
    ImageRef(format!(
        "shape{}_{:016x}.{ext}",
        key.shape_id,
        content_digest(bytes)
    ))
}

fn sniff_extension(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .ok()
        .and_then(|f| f.extensions_str().first().copied())
        .unwrap_or("png")
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
