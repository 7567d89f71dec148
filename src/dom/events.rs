//! DOM listener wiring.
//!
//! Listeners live as long as the page, so each closure is leaked with
//! `forget` once registered.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::SiteError;
use crate::state::ui::UiEvent;

use super::Site;

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), SiteError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Register every handler against the bound elements.
pub fn wire(site: &Rc<Site>) -> Result<(), SiteError> {
    let bindings = &site.bindings;

    for link in &bindings.nav_links {
        let site = Rc::clone(site);
        let target = link.target.clone();
        listen(&link.element, "click", move |event: Event| {
            event.prevent_default();
            site.dispatch(UiEvent::Navigate(target.clone()));
        })?;
    }

    let sidebar_site = Rc::clone(site);
    listen(&bindings.sidebar_toggle, "click", move |_| sidebar_site.dispatch(UiEvent::ToggleSidebar))?;

    let theme_site = Rc::clone(site);
    listen(&bindings.theme_toggle, "click", move |_| theme_site.dispatch(UiEvent::ToggleTheme))?;

    let apply_site = Rc::clone(site);
    listen(&bindings.filter_apply, "click", move |_| {
        apply_site.dispatch(UiEvent::FilterResume(apply_site.bindings.criteria()));
    })?;
    for control in bindings.filter_controls() {
        let site = Rc::clone(site);
        listen(control, "change", move |_| {
            site.dispatch(UiEvent::FilterResume(site.bindings.criteria()));
        })?;
    }

    for input in bindings.contact_inputs() {
        let site = Rc::clone(site);
        listen(input.target(), "input", move |_| {
            site.dispatch(UiEvent::ContactInput(site.bindings.contact_fields()));
        })?;
    }

    let submit_site = Rc::clone(site);
    listen(&bindings.form, "submit", move |event: Event| {
        event.prevent_default();
        submit_site.dispatch(UiEvent::ContactSubmit(submit_site.bindings.contact_fields()));
    })?;

    Ok(())
}
