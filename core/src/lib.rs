//! # Imgdrop - upload session core
//!
//! Target-independent logic behind the image drop widget: one validation-gated,
//! asynchronous upload pipeline fed by two input channels (form submission and
//! drag-and-drop).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ picker/drop │────▶│  Validator  │────▶│  Transport  │────▶│  Renderer   │
//! │  (FileSet)  │     │ (fail-fast) │     │ (progress…) │     │ (metadata)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                        UploadController
//!        │
//! ┌─────────────┐
//! │ DragHover   │  enter / over / leave / drop
//! │ Tracker     │
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - File descriptors and file sets
//! - [`config`] - Validation rule and upload configuration
//! - [`validation`] - Fail-fast file validator
//! - [`hover`] - Counter-based drag hover tracking
//! - [`progress`] - Progress samples and percentage mapping
//! - [`view`] - Presentation collaborator traits
//! - [`transport`] - Upload request and transport event contract
//! - [`session`] - Upload session controller

// Core modules
pub mod error;
pub mod models;
pub mod config;

// Pure building blocks
pub mod validation;
pub mod hover;
pub mod progress;

// Orchestration
pub mod view;
pub mod transport;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    ConfigError, ConfigResult, SessionError, SessionResult, TransportError, TransportResult,
    ValidationError, ValidationOutcome,
};

pub use models::{FileMetadata, FileSet, SelectedFile};

pub use config::{AllowList, UploadConfig, ValidationRule};

pub use validation::validate;

pub use hover::{DragEventKind, DragHoverTracker, HighlightChange};

pub use progress::{percentage, ProgressSample};

pub use view::{
    InputSource, MetadataRenderer, ProgressPresenter, StatusPresenter, SubmitControl, UploadView,
};

pub use transport::{Transport, TransportEvent, TransportOutcome, UploadRequest};

pub use session::{drive, SessionState, UploadController, UploadSession};
