//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - Browser files as core file sets
//! - **Error Types** - Frontend error handling

use imgdrop::{AllowList, FileSet, InputSource, SelectedFile};
use leptos::html::Input;
use leptos::NodeRef;
use std::fmt;
use wasm_bindgen::JsValue;
use web_sys::{DragEvent, File, FileList};

// =============================================================================
// File Types
// =============================================================================

/// A file picked or dropped in the browser.
pub type BrowserFile = SelectedFile<File>;

/// The file set the controller works on in the browser.
pub type BrowserFileSet = FileSet<File>;

pub fn browser_file(file: File) -> BrowserFile {
    let name = file.name();
    let mime_type = file.type_();
    // Blob sizes are integral
    let size_bytes = file.size() as u64;
    SelectedFile::new(name, mime_type, size_bytes, file)
}

/// Files of a picker selection or a drop, in order. `None` is an empty set.
pub fn file_set(list: Option<FileList>) -> BrowserFileSet {
    let Some(list) = list else {
        return FileSet::empty();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(browser_file)
        .collect()
}

/// The file picker's current selection.
#[derive(Clone, Copy)]
pub struct PickerSource(pub NodeRef<Input>);

impl InputSource<File> for PickerSource {
    fn files(&self) -> BrowserFileSet {
        file_set(self.0.get_untracked().and_then(|input| input.files()))
    }
}

/// The files carried by a `drop` event.
pub struct DropSource<'a>(pub &'a DragEvent);

impl InputSource<File> for DropSource<'_> {
    fn files(&self) -> BrowserFileSet {
        file_set(self.0.data_transfer().and_then(|dt| dt.files()))
    }
}

/// Value of the file input's `accept` attribute for an allow-list.
pub fn accept_attribute(allow: &AllowList) -> String {
    match allow {
        AllowList::MimeTypes(types) => types.iter().cloned().collect::<Vec<_>>().join(","),
        AllowList::Extensions(exts) => exts
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(","),
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Building or sending the upload request failed.
    Request(String),
}

impl AppError {
    /// Wrap a JavaScript exception raised while building the request.
    pub fn request(context: &str, err: JsValue) -> Self {
        AppError::Request(format!("{}: {:?}", context, err))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Request(msg) => write!(f, "Request error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
