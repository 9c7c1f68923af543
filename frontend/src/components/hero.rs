//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Imgdrop - Image Upload"</h1>
            <p class="subtitle">
                "Pick or drop PNG, JPEG or WebP images to upload them."
            </p>
        </div>
    }
}
