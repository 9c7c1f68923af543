//! Imgdrop - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget for picking or dropping image files, validating
//! them, and uploading them with live progress.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadSection (drop area + form)                       │
//! │      ├── status line                                        │
//! │      ├── ProgressBar                                        │
//! │      └── FileMetadataList                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The upload logic itself lives in the `imgdrop` core crate; this crate
//! binds it to the DOM.
//!
//! # Modules
//!
//! - [`config`] - Default and embedded upload configuration
//! - [`types`] - Browser file conversion, errors
//! - [`view`] - Signal-backed presenters
//! - [`components`] - UI components
//! - [`services`] - Upload transport

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod view;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, BrowserFile, BrowserFileSet};

// Presenters
pub use view::SignalView;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Imgdrop - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let config = load_config();
    log::info!(
        "Uploading to {} as \"{}\" (max {} bytes per file)",
        config.endpoint,
        config.field_name,
        config.rule.max_size_bytes
    );

    view! {
        <div class="container">
            <Hero/>
            <UploadSection config=config/>
        </div>

        <Footer/>
    }
}
