//! Presentation collaborators driven by the controller.
//!
//! All calls are fire-and-forget and take `&self`; implementations own
//! whatever interior mutability they need (signals, cells). The controller is
//! the only caller while a session is pending.

use crate::models::FileSet;

/// Single-line status text.
pub trait StatusPresenter {
    fn update_status(&self, message: &str);
}

/// Progress bar, `0..=100`.
pub trait ProgressPresenter {
    fn update_progress(&self, percentage: u8);
}

/// File list and file count.
pub trait MetadataRenderer<H> {
    /// Called once per successful session.
    fn render(&self, files: &FileSet<H>);

    /// Empties the list and resets the count to 0.
    fn clear_metadata(&self);
}

/// The submit trigger and the file picker it submits.
pub trait SubmitControl {
    fn set_submit_enabled(&self, enabled: bool);

    /// Forget the picker's selection so picking the same files again counts as
    /// a new change.
    fn clear_selection(&self);
}

/// Everything the controller talks to.
pub trait UploadView<H>: StatusPresenter + ProgressPresenter + MetadataRenderer<H> + SubmitControl {}

impl<H, T> UploadView<H> for T where
    T: StatusPresenter + ProgressPresenter + MetadataRenderer<H> + SubmitControl
{
}

/// Where a file set comes from: the picker's current selection or a drop.
pub trait InputSource<H> {
    fn files(&self) -> FileSet<H>;
}
