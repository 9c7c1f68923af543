//! UI Components for the Imgdrop application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Image upload form with drag & drop
//! - [`ProgressBar`] - Upload progress indicator
//! - [`FileMetadataList`] - Files of the last successful upload

mod hero;
mod upload;
mod progress;
mod metadata;
mod footer;

pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use metadata::*;
pub use footer::*;
