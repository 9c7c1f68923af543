//! File descriptors as handed over by an input event.

use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// One candidate file.
///
/// `H` is the opaque handle to the raw content (`web_sys::File` in the
/// browser). The core never looks inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<H> {
    /// File name as reported by the input source
    pub name: String,
    /// Declared MIME type (may be empty)
    pub mime_type: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Raw content handle
    pub raw: H,
}

impl<H> SelectedFile<H> {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
        raw: H,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            raw,
        }
    }

    /// Text after the last `.` of the name, if there is one.
    pub fn extension(&self) -> Option<&str> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }

    /// Display projection of this file.
    pub fn metadata(&self) -> FileMetadata {
        FileMetadata {
            name: self.name.clone(),
            mime_type: self.mime_type.clone(),
            size_bytes: self.size_bytes,
        }
    }
}

/// Ordered, immutable set of files from one picker change or drop.
///
/// Clones share the same underlying files.
#[derive(Debug, PartialEq)]
pub struct FileSet<H> {
    files: Rc<[SelectedFile<H>]>,
}

impl<H> FileSet<H> {
    pub fn new(files: Vec<SelectedFile<H>>) -> Self {
        Self { files: files.into() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectedFile<H>> {
        self.files.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SelectedFile<H>> {
        self.files.get(index)
    }

    /// Sum of all file sizes.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size_bytes).sum()
    }

    /// Display projections, in order.
    pub fn metadata(&self) -> Vec<FileMetadata> {
        self.files.iter().map(SelectedFile::metadata).collect()
    }
}

impl<H> Clone for FileSet<H> {
    fn clone(&self) -> Self {
        Self {
            files: Rc::clone(&self.files),
        }
    }
}

impl<H> Default for FileSet<H> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<H> FromIterator<SelectedFile<H>> for FileSet<H> {
    fn from_iter<I: IntoIterator<Item = SelectedFile<H>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, H> IntoIterator for &'a FileSet<H> {
    type Item = &'a SelectedFile<H>;
    type IntoIter = std::slice::Iter<'a, SelectedFile<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// What the metadata renderer shows for one file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl FileMetadata {
    /// Size as rendered in the file list, e.g. `"500000 bytes"`.
    pub fn size_label(&self) -> String {
        format!("{} bytes", self.size_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_uses_last_dot() {
        assert_eq!(SelectedFile::new("photo.png", "", 1, ()).extension(), Some("png"));
        assert_eq!(SelectedFile::new("archive.tar.gz", "", 1, ()).extension(), Some("gz"));
        assert_eq!(SelectedFile::new("README", "", 1, ()).extension(), None);
        assert_eq!(SelectedFile::new("trailing.", "", 1, ()).extension(), None);
    }

    #[test]
    fn test_file_set_clones_share_files() {
        let set: FileSet<()> = vec![
            SelectedFile::new("a.png", "image/png", 10, ()),
            SelectedFile::new("b.webp", "image/webp", 32, ()),
        ]
        .into_iter()
        .collect();
        let copy = set.clone();

        assert_eq!(copy.len(), 2);
        assert_eq!(copy.total_bytes(), 42);
        assert_eq!(copy.get(1).map(|f| f.name.as_str()), Some("b.webp"));
        assert_eq!(set, copy);
    }

    #[test]
    fn test_metadata_projection() {
        let file = SelectedFile::new("photo.png", "image/png", 500_000, ());
        let meta = file.metadata();
        assert_eq!(meta.name, "photo.png");
        assert_eq!(meta.mime_type, "image/png");
        assert_eq!(meta.size_label(), "500000 bytes");
    }
}
