//! Browser upload transport over `XMLHttpRequest`.
//!
//! `fetch` exposes no upload progress, so the request goes through XHR:
//! `upload.onprogress` becomes [`TransportEvent::Progress`] and `onloadend`
//! becomes the single [`TransportEvent::Complete`]. Both are forwarded over an
//! unbounded channel that is closed after the terminal event.

use futures::channel::mpsc::{self, UnboundedSender};
use futures::stream::LocalBoxStream;
use futures::StreamExt;
use imgdrop::{ProgressSample, Transport, TransportEvent, TransportOutcome, UploadRequest};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use crate::types::{AppError, AppResult};

/// Sends each upload as one `multipart/form-data` request.
#[derive(Clone, Copy, Debug, Default)]
pub struct XhrTransport;

impl Transport<File> for XhrTransport {
    fn start(&self, request: UploadRequest<File>) -> LocalBoxStream<'static, TransportEvent> {
        let (tx, rx) = mpsc::unbounded();

        if let Err(e) = send(&request, tx.clone()) {
            log::error!("❌ Upload could not be sent: {}", e);
            let _ = tx.unbounded_send(TransportEvent::Complete(TransportOutcome::network_failure()));
            tx.close_channel();
        }

        rx.boxed_local()
    }
}

/// One part per file, under the request's field name.
fn form_data(request: &UploadRequest<File>) -> AppResult<FormData> {
    let form = FormData::new().map_err(|e| AppError::request("Failed to create FormData", e))?;
    for (field, file) in request.parts() {
        form.append_with_blob_and_filename(field, &file.raw, &file.name)
            .map_err(|e| AppError::request("Failed to append file", e))?;
    }
    Ok(form)
}

fn send(request: &UploadRequest<File>, tx: UnboundedSender<TransportEvent>) -> AppResult<()> {
    let body = form_data(request)?;
    let xhr = XmlHttpRequest::new().map_err(|e| AppError::request("Failed to create XMLHttpRequest", e))?;
    let upload = xhr
        .upload()
        .map_err(|e| AppError::request("XMLHttpRequest has no upload target", e))?;

    // Upload progress
    let progress_tx = tx.clone();
    let onprogress = Closure::wrap(Box::new(move |event: ProgressEvent| {
        // `total` is meaningless unless the length is computable
        let total = if event.length_computable() { event.total() as u64 } else { 0 };
        let sample = ProgressSample::new(event.loaded() as u64, total);
        let _ = progress_tx.unbounded_send(TransportEvent::Progress(sample));
    }) as Box<dyn FnMut(ProgressEvent)>);
    upload.set_onprogress(Some(onprogress.as_ref().unchecked_ref()));

    // Terminal event: fires once, after success, error, abort or timeout
    let loadend_xhr = xhr.clone();
    let onloadend = Closure::once_into_js(move || {
        upload.set_onprogress(None);
        drop(onprogress);

        let status = loadend_xhr.status().unwrap_or(0);
        log::debug!("📡 Upload finished with status {}", status);
        let _ = tx.unbounded_send(TransportEvent::Complete(TransportOutcome::new(status)));
        tx.close_channel();
    });
    xhr.set_onloadend(Some(onloadend.unchecked_ref()));

    xhr.open(request.method(), &request.endpoint)
        .map_err(|e| AppError::request("Failed to open request", e))?;
    xhr.send_with_opt_form_data(Some(&body))
        .map_err(|e| AppError::request("Failed to send request", e))?;

    log::debug!(
        "📤 {} {} ({} part(s) as \"{}\")",
        request.method(),
        request.endpoint,
        request.files.len(),
        request.field_name
    );
    Ok(())
}
