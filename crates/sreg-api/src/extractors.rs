//! # Submission Extraction
//!
//! The server never faults on malformed input. The body is read as an
//! ordered list of `name=value` pairs, so a repeated name keeps its last
//! value and affects only its own field. A body that cannot be read as a
//! form at all (wrong content type, over the size limit, invalid
//! encoding) degrades to an empty submission, which then fails every
//! required rule and renders as an ordinary error page.

use axum::extract::rejection::FormRejection;
use axum::Form;
use sreg_core::RawSubmission;

/// Decoded form body, in submission order.
pub type FormPairs = Vec<(String, String)>;

/// Extract a form body, degrading any rejection to an empty submission.
pub fn extract_submission(result: Result<Form<FormPairs>, FormRejection>) -> RawSubmission {
    match result {
        Ok(Form(pairs)) => RawSubmission::from_pairs(pairs),
        Err(rejection) => {
            tracing::warn!(
                error = %rejection.body_text(),
                "unreadable form body; validating as an empty submission"
            );
            RawSubmission::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> FormPairs {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn accepted_form_passes_through() {
        let raw = extract_submission(Ok(Form(pairs(&[("fullName", "Kiran")]))));
        assert_eq!(raw.full_name.as_deref(), Some("Kiran"));
        assert!(raw.email.is_none());
    }

    #[test]
    fn repeated_name_keeps_last_value() {
        let raw = extract_submission(Ok(Form(pairs(&[
            ("fullName", "Kiran Rao"),
            ("gender", "Male"),
            ("gender", "Other"),
        ]))));
        assert_eq!(raw.full_name.as_deref(), Some("Kiran Rao"));
        assert_eq!(raw.gender.as_deref(), Some("Other"));
    }
}
