//! Browser shell: binds to the host document and drives [`UiState`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once the document is interactive. Resolves [`bindings::Bindings`],
//! renders the startup patches and registers listeners. Every listener reads
//! the controls it needs, dispatches a [`UiEvent`] and renders the result.
//! Handlers run to completion on the single browser thread, so the shared
//! state sits behind a plain `RefCell`.

pub mod bindings;
pub mod events;
pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event};

use crate::config::SiteConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::SiteError;
use crate::state::ui::{UiEvent, UiState};
use crate::util::greeting::current_hour;
use crate::util::storage::LocalStore;

use self::bindings::Bindings;

/// Everything a listener needs.
pub struct Site {
    pub bindings: Bindings,
    state: RefCell<UiState>,
    store: RefCell<LocalStore>,
}

impl Site {
    pub fn dispatch(&self, event: UiEvent) {
        let result = {
            let mut state = self.state.borrow_mut();
            let mut store = self.store.borrow_mut();
            state.handle(event, &mut *store)
        };
        match result {
            Ok(patches) => render::apply_all(&self.bindings, &patches),
            Err(err) => log::error!("dispatch failed: {err}"),
        }
    }
}

/// Attach now if the document is already parsed, otherwise on
/// `DOMContentLoaded`.
pub fn attach_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document to attach to");
        return;
    };
    if document.ready_state() != "loading" {
        attach_logged(&document);
        return;
    }
    let ready_document = document.clone();
    let on_ready = Closure::once(move |_: Event| attach_logged(&ready_document));
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        log::error!("failed to wait for DOMContentLoaded: {err:?}");
        return;
    }
    on_ready.forget();
}

fn attach_logged(document: &Document) {
    if let Err(err) = attach(document) {
        log::error!("site script not attached: {err}");
    }
}

/// Resolve config and bindings, render the initial state, wire listeners.
pub fn attach(document: &Document) -> Result<Rc<Site>, SiteError> {
    let config = read_config(document)?;
    let bindings = Bindings::resolve(document, &config)?;
    let mut store = LocalStore::open();
    let (state, patches) = UiState::start(
        bindings.section_ids(),
        &config,
        current_hour(),
        bindings.criteria(),
        bindings.sidebar_open(),
        &mut store,
    )?;
    render::apply_all(&bindings, &patches);

    let site = Rc::new(Site { bindings, state: RefCell::new(state), store: RefCell::new(store) });
    events::wire(&site)?;
    log::info!(
        "site attached: {} sections, {} nav links",
        site.bindings.sections.len(),
        site.bindings.nav_links.len()
    );
    Ok(site)
}

/// Page-provided overrides from the inline config block, if any.
fn read_config(document: &Document) -> Result<SiteConfig, SiteError> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => SiteConfig::from_json(&element.text_content().unwrap_or_default()),
        None => Ok(SiteConfig::default()),
    }
}
