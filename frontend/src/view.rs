//! Signal-backed presenters for the upload controller.

use imgdrop::{
    FileMetadata, FileSet, MetadataRenderer, ProgressPresenter, StatusPresenter, SubmitControl,
};
use leptos::html::Input;
use leptos::*;
use web_sys::File;

/// Reactive state the upload components render from.
///
/// The controller writes it; components only read.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub status: RwSignal<String>,
    pub progress: RwSignal<u8>,
    /// Rendered file list; its length is the displayed count
    pub metadata: RwSignal<Vec<FileMetadata>>,
    pub submit_enabled: RwSignal<bool>,
    pub picker: NodeRef<Input>,
}

impl SignalView {
    pub fn new(picker: NodeRef<Input>) -> Self {
        Self {
            status: create_rw_signal(String::new()),
            progress: create_rw_signal(0),
            metadata: create_rw_signal(Vec::new()),
            submit_enabled: create_rw_signal(true),
            picker,
        }
    }
}

impl StatusPresenter for SignalView {
    fn update_status(&self, message: &str) {
        self.status.set(message.to_string());
    }
}

impl ProgressPresenter for SignalView {
    fn update_progress(&self, percentage: u8) {
        self.progress.set(percentage);
    }
}

impl MetadataRenderer<File> for SignalView {
    fn render(&self, files: &FileSet<File>) {
        self.metadata.set(files.metadata());
    }

    fn clear_metadata(&self) {
        self.metadata.set(Vec::new());
    }
}

impl SubmitControl for SignalView {
    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }

    fn clear_selection(&self) {
        match self.picker.get_untracked() {
            Some(input) => input.set_value(""),
            None => log::debug!("File input not mounted, nothing to clear"),
        }
    }
}
