//! # sreg-core — Shared Validation Core for Student Registration
//!
//! Registration rules are validated twice: in the browser to fail fast,
//! and on the server because the browser is never trusted. This crate
//! holds the single definition both sides execute.
//!
//! ## Key Design Principles
//!
//! 1. **Rules are data.** [`rules::RULES`] lists one rule per field with a
//!    client check, a server check, and a message. The server, the client
//!    model, and the browser script all interpret that table; none of them
//!    restates a pattern or a message.
//!
//! 2. **Sanitize, then validate.** Submitted text becomes [`Sanitized`]
//!    before any rule sees it. Rules read its cleaned text; renderers only
//!    accept its escaped form, so unescaped input cannot reach a page.
//!
//! 3. **Accumulate, don't short-circuit.** Every rule runs on every
//!    attempt; [`ValidationErrors`] preserves field order so the user sees
//!    every problem at once.
//!
//! 4. **Feedback is a projection.** The client model maps
//!    `(field, validity)` to a [`client::DisplayState`] instead of mutating
//!    a document.
//!
//! ## Crate Policy
//!
//! - No web framework dependency; `sreg-api` owns HTTP and HTML.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.
//! - Nothing is persisted.

pub mod client;
pub mod email;
pub mod error;
pub mod field;
pub mod rules;
pub mod sanitize;
pub mod submission;

// Re-export primary types for ergonomic imports.
pub use error::{FailureReason, FieldError, SregError, ValidationErrors};
pub use field::{Field, Gender, COURSE_OPTIONS, FIELD_COUNT, GENDER_OPTIONS};
pub use rules::{client_manifest_json, rule_for, Check, Profile, Rule, RULES};
pub use sanitize::Sanitized;
pub use submission::{validate_submission, RawSubmission, RegistrationSubmission};
