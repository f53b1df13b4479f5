//! # Client Validator Model
//!
//! Typed model of what the browser does before a submission leaves the
//! page. The browser script (`validate.js` in `sreg-api`) executes the same
//! semantics over the serialized client manifest; this module is the
//! reference behavior it is tested against.
//!
//! UI feedback is a pure projection: `(field, validity) → DisplayState`.
//! Nothing here mutates a document; a renderer applies the state.
//!
//! The client is never authoritative. A `Proceed` decision only means the
//! request may be sent; the server re-validates everything.

use crate::field::{Field, Trigger};
use crate::rules::{rule_for, Profile};

/// The browser's current raw field values.
///
/// Optional fields (date of birth, address) have no client rule and are
/// not tracked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Value of the checked radio, if any.
    pub gender: Option<String>,
    /// Selected option value; `None` while the disabled placeholder is shown.
    pub course: Option<String>,
    pub terms: bool,
}

impl FormSnapshot {
    /// Form value of `field` under the HTML form value model.
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => Some(self.full_name.as_str()),
            Field::Email => Some(self.email.as_str()),
            Field::Phone => Some(self.phone.as_str()),
            Field::Gender => self.gender.as_deref(),
            Field::Course => self.course.as_deref(),
            Field::Terms => self.terms.then_some("on"),
        }
    }
}

/// Visual state of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    /// The control carries the `error` class.
    pub input_invalid: bool,
    /// The inline error message is visible.
    pub error_visible: bool,
}

impl DisplayState {
    /// Project a validity result onto a field's display state.
    pub fn project(field: Field, valid: bool) -> Self {
        Self {
            input_invalid: !valid && field.marks_input(),
            error_visible: !valid,
        }
    }
}

/// Result of checking one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFeedback {
    pub field: Field,
    pub valid: bool,
    pub display: DisplayState,
}

/// A user interaction the validator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// A control lost focus.
    Blur(Field),
    /// A select, radio, or checkbox changed.
    Change(Field),
    /// The user attempted to submit the form.
    Submit,
}

/// Whether the browser lets a submission go out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Every check passed; send the request.
    Proceed,
    /// At least one check failed; no request is sent.
    Cancel,
}

/// What handling an event produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// No handler is attached for this event on this field.
    Ignored,
    /// A live check ran on one field.
    Feedback(FieldFeedback),
    /// A submit attempt ran every check.
    Submit {
        decision: SubmitDecision,
        feedback: Vec<FieldFeedback>,
    },
}

/// Run the client check for `field` against the snapshot.
pub fn check_field(field: Field, snapshot: &FormSnapshot) -> FieldFeedback {
    let valid = rule_for(field).passes(Profile::Client, snapshot.value(field));
    FieldFeedback {
        field,
        valid,
        display: DisplayState::project(field, valid),
    }
}

/// Run all six checks, unconditionally and in order.
pub fn check_all(snapshot: &FormSnapshot) -> Vec<FieldFeedback> {
    Field::all_fields()
        .iter()
        .map(|field| check_field(*field, snapshot))
        .collect()
}

/// Dispatch a form event to the handler the page would run.
pub fn handle_event(event: FormEvent, snapshot: &FormSnapshot) -> EventOutcome {
    match event {
        FormEvent::Blur(field) if field.trigger() == Trigger::Blur => {
            EventOutcome::Feedback(check_field(field, snapshot))
        }
        FormEvent::Change(field) if field.trigger() == Trigger::Change => {
            EventOutcome::Feedback(check_field(field, snapshot))
        }
        FormEvent::Blur(_) | FormEvent::Change(_) => EventOutcome::Ignored,
        FormEvent::Submit => {
            let feedback = check_all(snapshot);
            let decision = if feedback.iter().all(|f| f.valid) {
                SubmitDecision::Proceed
            } else {
                SubmitDecision::Cancel
            };
            EventOutcome::Submit { decision, feedback }
        }
    }
}
