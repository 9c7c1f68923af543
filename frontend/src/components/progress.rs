use leptos::*;

#[component]
pub fn ProgressBar(progress: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="progress-section">
            <progress id="progressBar" max="100" value=move || progress.get().to_string()></progress>
            <span class="progress-label">{move || format!("{}%", progress.get())}</span>
        </div>
    }
}
