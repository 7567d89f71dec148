//! Applies [`Patch`]es to the bound elements.

use web_sys::HtmlElement;

use crate::error::SiteError;
use crate::state::ui::Patch;

use super::bindings::Bindings;

const SHOWN: &str = "block";
const HIDDEN: &str = "none";

/// Render every patch in order. A failing patch is logged and the rest still
/// apply.
pub fn apply_all(bindings: &Bindings, patches: &[Patch]) {
    for patch in patches {
        if let Err(err) = apply(bindings, patch) {
            log::error!("render: {patch:?} failed: {err}");
        }
    }
}

pub fn apply(bindings: &Bindings, patch: &Patch) -> Result<(), SiteError> {
    match patch {
        Patch::ShowSection(target) => {
            for (id, section) in &bindings.sections {
                set_display(section, if id == target { SHOWN } else { HIDDEN })?;
            }
        }
        Patch::Sidebar { open } => {
            bindings.sidebar.class_list().toggle_with_force(&bindings.sidebar_open_class, *open)?;
        }
        Patch::Theme(effects) => {
            bindings.body.class_list().toggle_with_force(&bindings.dark_class, effects.dark_class)?;
            bindings.theme_toggle.set_text_content(Some(effects.icon));
        }
        Patch::Greeting(text) => bindings.greeting.set_text_content(Some(*text)),
        Patch::ResumeList(items) => {
            bindings.resume_list.set_inner_html("");
            for label in items {
                let item = bindings.document.create_element("li")?;
                item.set_text_content(Some(label.as_str()));
                bindings.resume_list.append_child(&item)?;
            }
        }
        Patch::ContactErrors(errors) => {
            bindings.name_error.set_text_content(Some(errors.name));
            bindings.email_error.set_text_content(Some(errors.email));
            bindings.message_error.set_text_content(Some(errors.message));
        }
        Patch::ContactSubmitted => {
            set_display(&bindings.form, HIDDEN)?;
            set_display(&bindings.success, SHOWN)?;
        }
    }
    Ok(())
}

fn set_display(element: &HtmlElement, value: &str) -> Result<(), SiteError> {
    element.style().set_property("display", value)?;
    Ok(())
}
