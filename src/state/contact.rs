//! Contact form validation.
//!
//! DESIGN
//! ======
//! Two phases: `Editing` (form shown) and `Submitted` (success message shown).
//! Every keystroke revalidates all three fields; a submit moves to
//! `Submitted` only when all of them pass. The move is one-way and further
//! submits are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{MSG_INVALID_EMAIL, MSG_REQUIRED};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN) {
    Ok(re) => Some(re),
    Err(err) => {
        log::error!("contact: bad email pattern: {err}");
        None
    }
});

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field messages. An empty string means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: FieldErrors,
    pub valid: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; the form stays visible.
    Rejected(Validation),
    /// All fields passed; swap the form for the success message.
    Submitted,
    /// The form was already submitted. Nothing changes.
    AlreadySubmitted,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

pub fn validate(fields: &ContactFields) -> Validation {
    let errors = FieldErrors {
        name: if fields.name.trim().is_empty() { MSG_REQUIRED } else { "" },
        email: if is_valid_email(&fields.email) { "" } else { MSG_INVALID_EMAIL },
        message: if fields.message.trim().is_empty() { MSG_REQUIRED } else { "" },
    };
    let valid = errors.is_clear();
    Validation { errors, valid }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    phase: Phase,
    last: Validation,
}

impl ContactForm {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Result of the most recent validation pass.
    pub fn last(&self) -> &Validation {
        &self.last
    }

    /// Live validation on input.
    pub fn input(&mut self, fields: &ContactFields) -> Validation {
        self.last = validate(fields);
        self.last.clone()
    }

    pub fn submit(&mut self, fields: &ContactFields) -> SubmitOutcome {
        if self.phase == Phase::Submitted {
            log::debug!("contact: ignoring submit after success");
            return SubmitOutcome::AlreadySubmitted;
        }
        let validation = self.input(fields);
        if validation.valid {
            self.phase = Phase::Submitted;
            log::info!("contact: form submitted");
            SubmitOutcome::Submitted
        } else {
            SubmitOutcome::Rejected(validation)
        }
    }
}
