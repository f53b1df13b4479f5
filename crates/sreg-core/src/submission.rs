//! # Server-Side Submission Validation
//!
//! The authoritative gate. A [`RawSubmission`] arrives straight from the
//! form body and nothing the browser decided is trusted:
//!
//! ```text
//! RawSubmission ──sanitize──▶ SanitizedForm ──RULES (Server)──▶ Result<RegistrationSubmission, ValidationErrors>
//! ```
//!
//! Sanitization happens first: rules read the cleaned text of each
//! value, and only the escaped form is ever displayed. Every rule runs;
//! failures are collected in field order.
//! Absent or malformed fields degrade to validation failures, never to
//! panics or transport errors.
//!
//! A validated [`RegistrationSubmission`] is built fresh per attempt and
//! discarded once the result page is rendered. It is never stored.

use serde::Serialize;

use crate::error::ValidationErrors;
use crate::field::{Field, Gender};
use crate::rules::{evaluate, rule_for, Profile};
use crate::sanitize::{filter_email, Sanitized};

/// Form body exactly as posted. `terms` is present only when checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub course: Option<String>,
    pub address: Option<String>,
    pub terms: Option<String>,
}

impl RawSubmission {
    /// Build a submission from decoded `name=value` pairs.
    ///
    /// A repeated name keeps its last value. Unknown names are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                "fullName" => &mut raw.full_name,
                "email" => &mut raw.email,
                "phone" => &mut raw.phone,
                "dob" => &mut raw.dob,
                "gender" => &mut raw.gender,
                "course" => &mut raw.course,
                "address" => &mut raw.address,
                "terms" => &mut raw.terms,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        raw
    }
}

/// A submission that passed every server rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSubmission {
    pub full_name: Sanitized,
    pub email: Sanitized,
    pub phone: Sanitized,
    pub date_of_birth: Option<Sanitized>,
    pub gender: Gender,
    pub course: Sanitized,
    pub address: Option<Sanitized>,
    pub terms_accepted: bool,
}

/// Sanitized view of a raw submission, the input to server rules.
#[derive(Debug, Clone, Default)]
struct SanitizedForm {
    full_name: Option<Sanitized>,
    /// Filtered address text. Escaped only once it has been validated.
    email: Option<String>,
    phone: Option<Sanitized>,
    dob: Option<Sanitized>,
    gender: Option<Sanitized>,
    course: Option<Sanitized>,
    address: Option<Sanitized>,
    terms: bool,
}

impl SanitizedForm {
    fn from_raw(raw: &RawSubmission) -> Self {
        let escape = |v: &Option<String>| v.as_deref().map(Sanitized::special_chars);
        Self {
            full_name: escape(&raw.full_name),
            email: raw.email.as_deref().map(filter_email),
            phone: escape(&raw.phone),
            dob: escape(&raw.dob),
            gender: escape(&raw.gender),
            course: escape(&raw.course),
            address: escape(&raw.address),
            terms: raw.terms.is_some(),
        }
    }

    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => self.full_name.as_ref().map(Sanitized::text),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_ref().map(Sanitized::text),
            Field::Gender => self.gender.as_ref().map(Sanitized::text),
            Field::Course => self.course.as_ref().map(Sanitized::text),
            Field::Terms => self.terms.then_some("on"),
        }
    }

    fn into_record(self) -> Result<RegistrationSubmission, ValidationErrors> {
        let missing = |field: Field| ValidationErrors::from(rule_for(field).failure());
        let gender = self
            .gender
            .as_ref()
            .and_then(|g| g.text().parse::<Gender>().ok())
            .ok_or_else(|| missing(Field::Gender))?;

        Ok(RegistrationSubmission {
            full_name: self.full_name.ok_or_else(|| missing(Field::FullName))?,
            email: self
                .email
                .map(|e| Sanitized::special_chars(&e))
                .ok_or_else(|| missing(Field::Email))?,
            phone: self.phone.ok_or_else(|| missing(Field::Phone))?,
            date_of_birth: self.dob.filter(|d| !d.is_blank()),
            gender,
            course: self.course.ok_or_else(|| missing(Field::Course))?,
            address: self.address.filter(|a| !a.is_blank()),
            terms_accepted: self.terms,
        })
    }
}

/// Sanitize and validate a submission against every server rule.
///
/// Returns the typed record, or every failure in field order.
pub fn validate_submission(raw: &RawSubmission) -> Result<RegistrationSubmission, ValidationErrors> {
    let form = SanitizedForm::from_raw(raw);
    let failures = evaluate(Profile::Server, |field| form.value(field));
    if !failures.is_empty() {
        tracing::debug!(failed = failures.len(), "submission rejected");
        return Err(ValidationErrors::new(failures));
    }
    form.into_record()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureReason;
    use proptest::prelude::*;

    fn valid_raw() -> RawSubmission {
        RawSubmission {
            full_name: Some("Priya Sharma".into()),
            email: Some("priya@example.com".into()),
            phone: Some("9876543210".into()),
            dob: Some("2004-05-17".into()),
            gender: Some("Female".into()),
            course: Some("Computer Science".into()),
            address: Some("12 MG Road\nBengaluru".into()),
            terms: Some("on".into()),
        }
    }

    #[test]
    fn valid_submission_is_accepted() {
        let record = validate_submission(&valid_raw()).unwrap();
        assert_eq!(record.full_name.as_str(), "Priya Sharma");
        assert_eq!(record.email.as_str(), "priya@example.com");
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.course.as_str(), "Computer Science");
        assert_eq!(record.date_of_birth.unwrap().as_str(), "2004-05-17");
        assert!(record.terms_accepted);
    }

    #[test]
    fn every_failure_reported_in_order() {
        let raw = RawSubmission {
            full_name: Some("A".into()),
            email: Some("not-an-email".into()),
            phone: Some("123".into()),
            gender: None,
            course: Some(String::new()),
            terms: None,
            ..Default::default()
        };
        let errs = validate_submission(&raw).unwrap_err();
        assert_eq!(errs.fields(), Field::all_fields());
        assert_eq!(
            errs.messages(),
            vec![
                "Full Name is required and must be at least 2 characters.",
                "A valid Email Address is required.",
                "Phone Number must be exactly 10 digits.",
                "Please select a valid Gender.",
                "Please select a Course.",
                "You must agree to the Terms & Conditions.",
            ]
        );
        let reasons: Vec<FailureReason> = errs.iter().map(|e| e.reason).collect();
        assert_eq!(reasons[0], FailureReason::TooShort);
        assert_eq!(reasons[5], FailureReason::Unchecked);
    }

    #[test]
    fn empty_submission_fails_every_rule() {
        let errs = validate_submission(&RawSubmission::default()).unwrap_err();
        assert_eq!(errs.len(), 6);
    }

    #[test]
    fn single_failure_is_isolated() {
        let raw = RawSubmission {
            terms: None,
            ..valid_raw()
        };
        let errs = validate_submission(&raw).unwrap_err();
        assert_eq!(errs.fields(), vec![Field::Terms]);
    }

    #[test]
    fn server_accepts_punctuated_phone() {
        let raw = RawSubmission {
            phone: Some("987-654-3210".into()),
            ..valid_raw()
        };
        let record = validate_submission(&raw).unwrap();
        assert_eq!(record.phone.as_str(), "987-654-3210");
    }

    #[test]
    fn short_phone_rejected() {
        let raw = RawSubmission {
            phone: Some("98765".into()),
            ..valid_raw()
        };
        let errs = validate_submission(&raw).unwrap_err();
        assert_eq!(errs.fields(), vec![Field::Phone]);
    }

    #[test]
    fn unknown_gender_rejected() {
        let raw = RawSubmission {
            gender: Some("Robot".into()),
            ..valid_raw()
        };
        let errs = validate_submission(&raw).unwrap_err();
        assert_eq!(errs.fields(), vec![Field::Gender]);
    }

    #[test]
    fn markup_is_escaped_before_display() {
        let raw = RawSubmission {
            full_name: Some("<b>Ravi</b>".into()),
            course: Some("Electronics & Communication".into()),
            ..valid_raw()
        };
        let record = validate_submission(&raw).unwrap();
        assert_eq!(record.full_name.as_str(), "&lt;b&gt;Ravi&lt;/b&gt;");
        assert_eq!(record.course.as_str(), "Electronics &amp; Communication");
    }

    #[test]
    fn email_is_filtered_then_validated() {
        let raw = RawSubmission {
            email: Some(" priya @example.com ".into()),
            ..valid_raw()
        };
        let record = validate_submission(&raw).unwrap();
        assert_eq!(record.email.as_str(), "priya@example.com");

        let raw = RawSubmission {
            email: Some("o'neil&co@example.com".into()),
            ..valid_raw()
        };
        let record = validate_submission(&raw).unwrap();
        assert_eq!(record.email.as_str(), "o&apos;neil&amp;co@example.com");
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let raw = RawSubmission {
            dob: Some(String::new()),
            address: Some("   ".into()),
            ..valid_raw()
        };
        let record = validate_submission(&raw).unwrap();
        assert!(record.date_of_birth.is_none());
        assert!(record.address.is_none());
    }

    #[test]
    fn whitespace_name_is_too_short() {
        let raw = RawSubmission {
            full_name: Some("  A  ".into()),
            ..valid_raw()
        };
        let errs = validate_submission(&raw).unwrap_err();
        assert_eq!(errs.fields(), vec![Field::FullName]);
    }

    #[test]
    fn single_special_character_name_is_too_short() {
        for name in ["<", "&", "'", " > ", "\""] {
            let raw = RawSubmission {
                full_name: Some(name.into()),
                ..valid_raw()
            };
            let errs = validate_submission(&raw).unwrap_err();
            assert_eq!(errs.fields(), vec![Field::FullName], "{name:?}");
        }
    }

    #[test]
    fn two_special_characters_make_a_name() {
        let raw = RawSubmission {
            full_name: Some("<&".into()),
            ..valid_raw()
        };
        let record = validate_submission(&raw).unwrap();
        assert_eq!(record.full_name.as_str(), "&lt;&amp;");
    }

    #[test]
    fn from_pairs_keeps_last_repeated_value() {
        let raw = RawSubmission::from_pairs([
            ("fullName", "Priya Sharma"),
            ("gender", "Male"),
            ("gender", "Female"),
            ("unknown", "ignored"),
        ]);
        assert_eq!(raw.full_name.as_deref(), Some("Priya Sharma"));
        assert_eq!(raw.gender.as_deref(), Some("Female"));
        assert!(raw.terms.is_none());
    }

    proptest! {
        /// The server name rule agrees with the browser rule on the raw
        /// value, whatever HTML-significant characters it contains.
        #[test]
        fn server_name_rule_matches_client_on_raw_value(name in "[<>&'\" a-z]{0,4}") {
            let client = rule_for(Field::FullName).passes(Profile::Client, Some(name.as_str()));
            let raw = RawSubmission {
                full_name: Some(name.clone()),
                ..valid_raw()
            };
            prop_assert_eq!(validate_submission(&raw).is_ok(), client);
        }
    }
}
