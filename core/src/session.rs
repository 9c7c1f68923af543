//! Upload session controller.
//!
//! Both input channels (form submission and drop) end up in
//! [`UploadController::submit`]. The controller owns the one
//! [`UploadSession`], validates before anything starts, and is the only writer
//! of the view while a session is pending.
//!
//! # State machine
//!
//! ```text
//!          submit (valid)           200
//!  Idle ───────────────────▶ Pending ────▶ Succeeded ─┐
//!   ▲  ◀─ submit (invalid)      │                     │
//!   │                           └───────▶ Failed ─────┤
//!   │                          other status           │
//!   └────────────────── next submit ──────────────────┘
//! ```
//!
//! A submit while `Pending` is refused with [`SessionError::Busy`].

use futures::{Stream, StreamExt};
use std::cell::RefCell;

use crate::config::UploadConfig;
use crate::error::{SessionError, SessionResult, ValidationError, ValidationOutcome};
use crate::models::FileSet;
use crate::progress::ProgressSample;
use crate::transport::{TransportEvent, TransportOutcome, UploadRequest};
use crate::validation::validate;
use crate::view::UploadView;

pub const PENDING_MESSAGE: &str = "⏳ Pending...";
pub const SUCCESS_MESSAGE: &str = "✅ Success";
pub const ERROR_MESSAGE: &str = "❌ Error";

/// Status line for a rejected file.
pub fn rejection_message(err: &ValidationError) -> String {
    format!("❌ {}", err)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// One attempt to upload a validated file set.
#[derive(Debug)]
pub struct UploadSession<H> {
    pub state: SessionState,
    pub files: FileSet<H>,
    pub bytes_sent: u64,
    pub bytes_total: u64,
}

impl<H> UploadSession<H> {
    fn pending(files: FileSet<H>) -> Self {
        let bytes_total = files.total_bytes();
        Self {
            state: SessionState::Pending,
            files,
            bytes_sent: 0,
            bytes_total,
        }
    }
}

pub struct UploadController<H, V> {
    config: UploadConfig,
    view: V,
    // `None` is Idle
    session: Option<UploadSession<H>>,
}

impl<H, V: UploadView<H>> UploadController<H, V> {
    pub fn new(config: UploadConfig, view: V) -> Self {
        Self {
            config,
            view,
            session: None,
        }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn session(&self) -> Option<&UploadSession<H>> {
        self.session.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.session.as_ref().map_or(SessionState::Idle, |s| s.state)
    }

    pub fn is_pending(&self) -> bool {
        self.state() == SessionState::Pending
    }

    /// Check a fresh picker selection before it is submitted.
    ///
    /// Rejections are surfaced right away and clear the picker. While a
    /// session is pending the view is left alone.
    pub fn inspect(&self, files: &FileSet<H>) -> ValidationOutcome {
        let outcome = validate(files, &self.config.rule);
        if self.is_pending() {
            log::debug!("Selection changed during upload, view untouched");
            return outcome;
        }
        match &outcome {
            Ok(()) => self.view.set_submit_enabled(true),
            Err(err) => self.reject(err),
        }
        outcome
    }

    /// Validate `files` and, if they pass, enter `Pending` and hand back the
    /// request the caller must start on a transport.
    ///
    /// An empty set skips validation and uploads nothing.
    pub fn submit(&mut self, files: FileSet<H>) -> SessionResult<UploadRequest<H>> {
        if self.is_pending() {
            log::warn!("Submit ignored: an upload is already pending");
            return Err(SessionError::Busy);
        }

        // Any finished session is over now
        self.session = None;

        if !files.is_empty() {
            if let Err(err) = validate(&files, &self.config.rule) {
                log::info!("Upload rejected: {}", err);
                self.reject(&err);
                return Err(err.into());
            }
        }

        self.view.clear_metadata();
        self.view.set_submit_enabled(false);
        self.view.update_progress(0);
        self.view.update_status(PENDING_MESSAGE);

        let session = UploadSession::pending(files.clone());
        log::info!(
            "📤 Upload started: {} file(s), {} bytes to {}",
            files.len(),
            session.bytes_total,
            self.config.endpoint
        );
        self.session = Some(session);

        Ok(UploadRequest {
            endpoint: self.config.endpoint.clone(),
            field_name: self.config.field_name.clone(),
            files,
        })
    }

    /// Publish one progress sample. Returns the published percentage.
    pub fn on_progress(&mut self, sample: ProgressSample) -> SessionResult<u8> {
        let session = self.pending_session()?;
        session.bytes_sent = sample.bytes_sent;
        session.bytes_total = sample.bytes_total;

        let pct = sample.percentage();
        self.view.update_status(&sample.status_message());
        self.view.update_progress(pct);
        Ok(pct)
    }

    /// Finish the pending session. A non-200 outcome comes back as
    /// [`SessionError::Transport`] after the view has been updated.
    pub fn on_complete(&mut self, outcome: TransportOutcome) -> SessionResult<()> {
        let result = outcome.into_result();
        let session = self.pending_session()?;
        session.state = if result.is_ok() {
            SessionState::Succeeded
        } else {
            SessionState::Failed
        };
        let files = session.files.clone();

        match &result {
            Ok(()) => {
                log::info!("✅ Upload succeeded: {} file(s)", files.len());
                self.view.update_status(SUCCESS_MESSAGE);
                self.view.render(&files);
            }
            Err(err) => {
                log::warn!("❌ {}", err);
                self.view.update_status(ERROR_MESSAGE);
            }
        }

        self.view.update_progress(0);
        self.view.clear_selection();
        self.view.set_submit_enabled(true);

        result.map_err(SessionError::from)
    }

    /// Apply one transport event.
    pub fn handle(&mut self, event: TransportEvent) -> SessionResult<()> {
        match event {
            TransportEvent::Progress(sample) => self.on_progress(sample).map(|_| ()),
            TransportEvent::Complete(outcome) => self.on_complete(outcome),
        }
    }

    fn pending_session(&mut self) -> SessionResult<&mut UploadSession<H>> {
        match self.session.as_mut() {
            Some(session) if session.state == SessionState::Pending => Ok(session),
            _ => {
                log::warn!("Transport event ignored: no pending upload");
                Err(SessionError::NotPending)
            }
        }
    }

    fn reject(&self, err: &ValidationError) {
        self.view.update_status(&rejection_message(err));
        self.view.clear_metadata();
        self.view.clear_selection();
        self.view.set_submit_enabled(true);
    }
}

/// Feed a transport's events into a shared controller until the terminal one.
///
/// The controller is borrowed only while an event is applied, so other
/// handlers (a second drop, a picker change) can reach it between events.
/// A stream that ends without a terminal event counts as a network failure.
pub async fn drive<H, V, S>(controller: &RefCell<UploadController<H, V>>, events: S) -> SessionResult<()>
where
    V: UploadView<H>,
    S: Stream<Item = TransportEvent>,
{
    futures::pin_mut!(events);
    while let Some(event) = events.next().await {
        match event {
            TransportEvent::Progress(sample) => {
                let result = controller.borrow_mut().on_progress(sample);
                if let Err(err) = result {
                    log::debug!("Progress dropped: {}", err);
                }
            }
            TransportEvent::Complete(outcome) => {
                return controller.borrow_mut().on_complete(outcome);
            }
        }
    }

    log::warn!("Transport closed without a terminal event");
    controller.borrow_mut().on_complete(TransportOutcome::network_failure())
}
