//! Typed handles to every element the site script touches.
//!
//! Resolved once at startup from [`SiteConfig`]. A missing or mistyped element
//! fails the whole attach instead of surfacing later inside a handler.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::contact::ContactFields;
use crate::state::nav::section_from_href;
use crate::state::resume::FilterCriteria;

/// A contact field: `<input>` or `<textarea>`.
pub enum TextField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextField {
    pub fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    pub fn target(&self) -> &EventTarget {
        match self {
            Self::Input(el) => el.as_ref(),
            Self::TextArea(el) => el.as_ref(),
        }
    }
}

/// Navigation link and the section id its href points at.
pub struct NavLink {
    pub element: Element,
    pub target: String,
}

pub struct Bindings {
    pub document: Document,
    pub body: HtmlElement,
    pub nav_links: Vec<NavLink>,
    pub sections: Vec<(String, HtmlElement)>,
    pub sidebar: Element,
    pub sidebar_toggle: Element,
    pub sidebar_open_class: String,
    pub theme_toggle: Element,
    pub dark_class: String,
    pub greeting: Element,
    pub filter_professional: HtmlInputElement,
    pub filter_education: HtmlInputElement,
    pub filter_from: HtmlInputElement,
    pub filter_to: HtmlInputElement,
    pub filter_apply: Element,
    pub resume_list: Element,
    pub form: HtmlFormElement,
    pub name: TextField,
    pub email: TextField,
    pub message: TextField,
    pub name_error: Element,
    pub email_error: Element,
    pub message_error: Element,
    pub success: HtmlElement,
}

impl Bindings {
    pub fn resolve(document: &Document, config: &SiteConfig) -> Result<Self, SiteError> {
        let body = document.body().ok_or_else(|| SiteError::missing("body"))?;
        let sections = resolve_sections(document, &config.nav.section_selector)?;
        let nav_links = resolve_nav_links(document, &config.nav.link_selector, &sections)?;
        let resume = &config.resume;
        let contact = &config.contact;

        Ok(Self {
            document: document.clone(),
            body,
            nav_links,
            sections,
            sidebar: by_id(document, &config.sidebar.container_id)?,
            sidebar_toggle: by_id(document, &config.sidebar.toggle_id)?,
            sidebar_open_class: config.sidebar.open_class.clone(),
            theme_toggle: by_id(document, &config.theme.toggle_id)?,
            dark_class: config.theme.dark_class.clone(),
            greeting: by_id(document, &config.greeting_id)?,
            filter_professional: typed(document, &resume.professional_id, "input")?,
            filter_education: typed(document, &resume.education_id, "input")?,
            filter_from: typed(document, &resume.from_id, "input")?,
            filter_to: typed(document, &resume.to_id, "input")?,
            filter_apply: by_id(document, &resume.apply_id)?,
            resume_list: by_id(document, &resume.list_id)?,
            form: typed(document, &contact.form_id, "form")?,
            name: text_field(document, &contact.name_id)?,
            email: text_field(document, &contact.email_id)?,
            message: text_field(document, &contact.message_id)?,
            name_error: by_id(document, &contact.name_error_id)?,
            email_error: by_id(document, &contact.email_error_id)?,
            message_error: by_id(document, &contact.message_error_id)?,
            success: typed(document, &contact.success_id, "html element")?,
        })
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|(id, _)| id.clone()).collect()
    }

    /// Whether the markup ships the sidebar already open.
    pub fn sidebar_open(&self) -> bool {
        self.sidebar.class_list().contains(&self.sidebar_open_class)
    }

    /// Current filter control values.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_controls(
            self.filter_professional.checked(),
            self.filter_education.checked(),
            &self.filter_from.value(),
            &self.filter_to.value(),
        )
    }

    /// Current contact field values.
    pub fn contact_fields(&self) -> ContactFields {
        ContactFields { name: self.name.value(), email: self.email.value(), message: self.message.value() }
    }

    /// The four filter controls, in markup order.
    pub fn filter_controls(&self) -> [&HtmlInputElement; 4] {
        [&self.filter_professional, &self.filter_education, &self.filter_from, &self.filter_to]
    }

    pub fn contact_inputs(&self) -> [&TextField; 3] {
        [&self.name, &self.email, &self.message]
    }
}

fn by_id(document: &Document, id: &str) -> Result<Element, SiteError> {
    document.get_element_by_id(id).ok_or_else(|| SiteError::missing(id))
}

fn typed<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, SiteError> {
    by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|_| SiteError::WrongElementType { id: id.to_owned(), expected })
}

fn text_field(document: &Document, id: &str) -> Result<TextField, SiteError> {
    let element = by_id(document, id)?;
    let element = match element.dyn_into::<HtmlInputElement>() {
        Ok(input) => return Ok(TextField::Input(input)),
        Err(element) => element,
    };
    element
        .dyn_into::<HtmlTextAreaElement>()
        .map(TextField::TextArea)
        .map_err(|_| SiteError::WrongElementType { id: id.to_owned(), expected: "text input" })
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        let Some(node) = list.item(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            out.push(element);
        }
    }
    Ok(out)
}

fn resolve_sections(document: &Document, selector: &str) -> Result<Vec<(String, HtmlElement)>, SiteError> {
    let mut sections = Vec::new();
    for element in query_all(document, selector)? {
        let id = element.id();
        let section = element
            .dyn_into::<HtmlElement>()
            .map_err(|_| SiteError::WrongElementType { id: id.clone(), expected: "html element" })?;
        if id.is_empty() {
            return Err(SiteError::missing(format!("id on {selector} element")));
        }
        sections.push((id, section));
    }
    if sections.is_empty() {
        return Err(SiteError::NoSections);
    }
    Ok(sections)
}

fn resolve_nav_links(
    document: &Document,
    selector: &str,
    sections: &[(String, HtmlElement)],
) -> Result<Vec<NavLink>, SiteError> {
    let mut links = Vec::new();
    for element in query_all(document, selector)? {
        let href = element.get_attribute("href").unwrap_or_default();
        let target = section_from_href(&href)
            .filter(|id| sections.iter().any(|(section, _)| section == *id))
            .ok_or_else(|| SiteError::UnknownSection(href.clone()))?
            .to_owned();
        links.push(NavLink { element, target });
    }
    Ok(links)
}
