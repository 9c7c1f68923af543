//! Browser services.
//!
//! - [`upload`] - Multipart upload transport with progress events

pub mod upload;

pub use upload::*;
