//! Front-end behavior for a static personal website.
//!
//! This crate is compiled to WebAssembly and attaches to an already rendered
//! page. It owns single-section navigation, the mobile sidebar toggle, the
//! persisted dark/light theme, the time-of-day greeting, the resume filter and
//! the contact form validation. All decisions are made by the pure state
//! machines in [`state`]; the browser shell in `dom` only resolves element
//! bindings, forwards DOM events as [`state::ui::UiEvent`]s and applies the
//! returned [`state::ui::Patch`]es.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Per-feature state machines and the [`state::ui::UiState`] dispatcher |
//! | [`config`] | Element ids, selectors and storage key, overridable from the page |
//! | [`error`] | Configuration and binding faults |
//! | [`util`] | Greeting clock and the preference store abstraction |
//! | [`consts`] | Default ids, class names, literals and messages |
//! | `dom` | Browser bindings, rendering and event wiring (`hydrate` only) |

pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod state;
pub mod util;

pub use config::SiteConfig;
pub use error::SiteError;

/// WASM entry point. Installs logging and attaches to the document once it is
/// interactive.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    dom::attach_when_ready();
}
