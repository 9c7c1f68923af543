//! Metadata of the files from the last successful upload.

use imgdrop::FileMetadata;
use leptos::*;

#[component]
pub fn FileMetadataList(metadata: RwSignal<Vec<FileMetadata>>) -> impl IntoView {
    view! {
        <div class="file-metadata">
            <div class="file-count">
                "Files uploaded: "
                <output id="fileNum">{move || metadata.with(Vec::len)}</output>
            </div>
            <ul id="fileListMetadata">
                <For
                    each=move || metadata.get().into_iter().enumerate()
                    key=|(idx, meta)| (*idx, meta.name.clone())
                    children=move |(_, meta)| {
                        let size = meta.size_label();
                        view! {
                            <li>
                                <span>
                                    <span class="meta-label">"Name: "</span>
                                    <output>{meta.name}</output>
                                </span>
                                <span>
                                    <span class="meta-label">"Type: "</span>
                                    <output>{meta.mime_type}</output>
                                    <br/>
                                    <span class="meta-label">"Size: "</span>
                                    <output>{size}</output>
                                </span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
