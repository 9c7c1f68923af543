//! Image upload form with drag & drop support.
//!
//! Form submission and drops both go through the same controller; the drop
//! area highlight follows a [`DragHoverTracker`] so nested children don't
//! make it flicker.

use std::cell::RefCell;
use std::rc::Rc;

use imgdrop::{
    drive, DragEventKind, DragHoverTracker, HighlightChange, InputSource, Transport, UploadConfig,
    UploadController,
};
use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement, SubmitEvent};

use crate::components::{FileMetadataList, ProgressBar};
use crate::services::XhrTransport;
use crate::types::{accept_attribute, file_set, DropSource, PickerSource};
use crate::view::SignalView;

type SharedController = Rc<RefCell<UploadController<File, SignalView>>>;

/// Submit the source's files and, if a session starts, run it to completion.
fn start_upload(controller: &SharedController, source: &impl InputSource<File>) {
    let submitted = controller.borrow_mut().submit(source.files());
    let request = match submitted {
        Ok(request) => request,
        Err(e) => {
            log::info!("Upload not started: {}", e);
            return;
        }
    };

    let events = XhrTransport.start(request);
    let controller = Rc::clone(controller);
    spawn_local(async move {
        if let Err(e) = drive(&controller, events).await {
            log::warn!("❌ Upload failed: {}", e);
        }
    });
}

#[component]
pub fn UploadSection(config: UploadConfig) -> impl IntoView {
    let accept = accept_attribute(&config.rule.allow);
    let picker = create_node_ref::<leptos::html::Input>();
    let presenter = SignalView::new(picker);
    let controller: SharedController = Rc::new(RefCell::new(UploadController::new(config, presenter)));

    let tracker = Rc::new(RefCell::new(DragHoverTracker::new()));
    let (highlighted, set_highlighted) = create_signal(false);

    // Picker change: validate right away
    let on_file_change = {
        let controller = Rc::clone(&controller);
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            let files = file_set(input.files());
            if let Err(e) = controller.borrow().inspect(&files) {
                log::info!("Selection rejected: {}", e);
            }
        }
    };

    // Form submission uploads the picker's selection
    let on_submit = {
        let controller = Rc::clone(&controller);
        move |ev: SubmitEvent| {
            ev.prevent_default();
            start_upload(&controller, &PickerSource(picker));
        }
    };

    // All four drag events share one handler
    let on_drag = {
        let controller = Rc::clone(&controller);
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();

            let Some(kind) = DragEventKind::from_dom_type(&ev.type_()) else {
                return;
            };
            let change = tracker.borrow_mut().handle(kind);
            match change {
                Some(HighlightChange::On) => set_highlighted.set(true),
                Some(HighlightChange::Off) => set_highlighted.set(false),
                None => {}
            }

            if kind == DragEventKind::Drop {
                start_upload(&controller, &DropSource(&ev));
            }
        }
    };

    view! {
        <div
            class="drop-area"
            id="dropArea"
            class:highlight=move || highlighted.get()
            on:dragenter=on_drag.clone()
            on:dragover=on_drag.clone()
            on:dragleave=on_drag.clone()
            on:drop=on_drag
        >
            <form on:submit=on_submit>
                <div class="upload-icon">"🖼️"</div>
                <label for="fileInput" class="upload-text">
                    "Drop images here or choose files"
                </label>
                <input
                    type="file"
                    id="fileInput"
                    multiple=true
                    accept=accept
                    node_ref=picker
                    on:change=on_file_change
                />
                <button
                    type="submit"
                    class="upload-button"
                    disabled=move || !presenter.submit_enabled.get()
                >
                    "Upload"
                </button>
            </form>

            <output id="statusMessage" class="status-message">
                {move || presenter.status.get()}
            </output>

            <ProgressBar progress=presenter.progress/>
            <FileMetadataList metadata=presenter.metadata/>
        </div>
    }
}
