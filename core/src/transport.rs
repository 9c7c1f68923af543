//! Upload request and the two-phase transport contract.
//!
//! A transport turns an [`UploadRequest`] into a stream of zero or more
//! [`TransportEvent::Progress`] events with non-decreasing `bytes_sent`,
//! followed by exactly one [`TransportEvent::Complete`]. The stream ends after
//! the terminal event.

use futures::stream::LocalBoxStream;

use crate::error::{TransportError, TransportResult};
use crate::models::{FileSet, SelectedFile};
use crate::progress::ProgressSample;

/// The only method the widget sends with.
pub const UPLOAD_METHOD: &str = "POST";

/// Status that counts as a successful upload.
pub const SUCCESS_STATUS: u16 = 200;

/// A `multipart/form-data` POST with one part per file.
#[derive(Debug, PartialEq)]
pub struct UploadRequest<H> {
    pub endpoint: String,
    pub field_name: String,
    pub files: FileSet<H>,
}

impl<H> UploadRequest<H> {
    pub fn method(&self) -> &'static str {
        UPLOAD_METHOD
    }

    /// `(field name, file)` for every part, in file order.
    pub fn parts(&self) -> impl Iterator<Item = (&str, &SelectedFile<H>)> + '_ {
        self.files.iter().map(move |file| (self.field_name.as_str(), file))
    }
}

impl<H> Clone for UploadRequest<H> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            field_name: self.field_name.clone(),
            files: self.files.clone(),
        }
    }
}

/// Terminal response. Status `0` means no response was received.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransportOutcome {
    pub status: u16,
}

impl TransportOutcome {
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    /// Transport-level failure (network error, aborted request, ...).
    pub fn network_failure() -> Self {
        Self::new(0)
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Only the status decides; the response body is never read.
    pub fn into_result(self) -> TransportResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(TransportError::NonSuccessStatus(self.status))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportEvent {
    Progress(ProgressSample),
    Complete(TransportOutcome),
}

/// Starts uploads. There is no cancellation: a started upload always runs to
/// its terminal event.
pub trait Transport<H> {
    fn start(&self, request: UploadRequest<H>) -> LocalBoxStream<'static, TransportEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_use_configured_field_name() {
        let request = UploadRequest {
            endpoint: "https://example.com/upload".into(),
            field_name: "files[]".into(),
            files: vec![
                SelectedFile::new("a.png", "image/png", 1, ()),
                SelectedFile::new("b.png", "image/png", 2, ()),
            ]
            .into_iter()
            .collect(),
        };

        let parts: Vec<(&str, &str)> = request
            .parts()
            .map(|(field, file)| (field, file.name.as_str()))
            .collect();
        assert_eq!(parts, vec![("files[]", "a.png"), ("files[]", "b.png")]);
        assert_eq!(request.method(), "POST");
    }

    #[test]
    fn test_only_200_is_success() {
        assert_eq!(TransportOutcome::new(200).into_result(), Ok(()));
        for status in [0, 201, 204, 302, 404, 500] {
            assert_eq!(
                TransportOutcome::new(status).into_result(),
                Err(TransportError::NonSuccessStatus(status))
            );
        }
        assert!(!TransportOutcome::network_failure().is_success());
    }
}
