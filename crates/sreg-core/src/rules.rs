//! # Validation Rule Table
//!
//! One table, [`RULES`], defines every registration rule as data: the
//! field, the check the browser runs, the check the server runs, the
//! failure reason, and the message shown to the user. The server
//! interprets the table in [`crate::submission`], the client model in
//! [`crate::client`], and the browser interprets the serialized client
//! half ([`client_manifest_json`]). Neither side carries its own copy of a
//! pattern or a message, so the two cannot drift apart.
//!
//! ## Client / Server asymmetry
//!
//! Three rules run a different check in the browser than on the server,
//! and the table records both explicitly:
//!
//! | Field | Client | Server |
//! |-------|--------|--------|
//! | email | `^[^\s@]+@[^\s@]+\.[^\s@]+$` | [`crate::email::is_standard_email`] |
//! | phone | literal `^[0-9]{10}$` | 10 digits after stripping non-digits |
//! | gender | any option selected | one of Male, Female, Other |
//!
//! Every check reads the HTML form value model: `None` means the control
//! was absent, the radio group had no selection, or the checkbox was not
//! checked.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::email::is_standard_email;
use crate::error::{FailureReason, FieldError};
use crate::field::{Field, Trigger, FIELD_COUNT, GENDER_OPTIONS};

/// Which side of the wire is evaluating a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Pre-submission check in the browser. Advisory only.
    Client,
    /// Authoritative re-check on submission receipt.
    Server,
}

/// Regular expressions shared verbatim with the browser.
///
/// Sources use only syntax with identical meaning in Rust `regex` and
/// ECMAScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// `local@domain.tld` shape with no whitespace.
    EmailShape,
    /// Exactly ten ASCII digits.
    TenDigits,
}

impl Pattern {
    /// Pattern source, as sent to the browser.
    ///
    /// `\s` is not quite the same class on both sides: ECMAScript counts
    /// U+FEFF as whitespace and Rust `regex` counts U+0085 instead. Only
    /// the email shape uses `\s`, and the server never relies on it.
    pub fn source(&self) -> &'static str {
        match self {
            Self::EmailShape => r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
            Self::TenDigits => r"^[0-9]{10}$",
        }
    }

    fn regex(&self) -> &'static Regex {
        static EMAIL_SHAPE: OnceLock<Regex> = OnceLock::new();
        static TEN_DIGITS: OnceLock<Regex> = OnceLock::new();
        let cell = match self {
            Self::EmailShape => &EMAIL_SHAPE,
            Self::TenDigits => &TEN_DIGITS,
        };
        cell.get_or_init(|| Regex::new(self.source()).expect("shared pattern is a valid regex"))
    }

    /// `true` if `value` matches in full. Callers trim first.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex().is_match(value)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.source())
    }
}

/// A field predicate, expressed as data so it can be shipped to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "arg", rename_all = "snake_case")]
pub enum Check {
    /// Trimmed value has at least this many characters.
    MinTrimmedChars(usize),
    /// Trimmed value matches the pattern in full.
    Pattern(Pattern),
    /// Value passes [`is_standard_email`].
    StandardEmail,
    /// Value is non-empty and contains exactly this many ASCII digits once
    /// every other character is discarded.
    DigitCount(usize),
    /// Value equals one of the listed options exactly.
    OneOf(&'static [&'static str]),
    /// A non-blank value was chosen.
    Selected,
    /// The control was submitted at all (checked checkbox).
    Checked,
}

impl Check {
    /// Evaluate this check against a form value.
    pub fn passes(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            Self::MinTrimmedChars(min) => trim_form_value(value).chars().count() >= *min,
            Self::Pattern(pattern) => pattern.is_match(trim_form_value(value)),
            Self::StandardEmail => is_standard_email(value),
            Self::DigitCount(count) => {
                !value.is_empty() && value.chars().filter(char::is_ascii_digit).count() == *count
            }
            Self::OneOf(options) => options.contains(&value),
            Self::Selected => !trim_form_value(value).is_empty(),
            Self::Checked => true,
        }
    }
}

/// Trim with the browser's `String.prototype.trim` whitespace set.
///
/// Rust's `str::trim` strips U+0085 and keeps U+FEFF; the browser does the
/// opposite. Both sides must agree on a value's trimmed length.
pub fn trim_form_value(value: &str) -> &str {
    value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

/// A named predicate over one field plus its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub field: Field,
    pub reason: FailureReason,
    pub client: Check,
    pub server: Check,
    pub message: &'static str,
}

impl Rule {
    /// The check this rule runs under `profile`.
    pub fn check(&self, profile: Profile) -> &Check {
        match profile {
            Profile::Client => &self.client,
            Profile::Server => &self.server,
        }
    }

    /// Evaluate this rule's `profile` check against a form value.
    pub fn passes(&self, profile: Profile, value: Option<&str>) -> bool {
        self.check(profile).passes(value)
    }

    /// The failure reported when this rule does not pass.
    pub fn failure(&self) -> FieldError {
        FieldError {
            field: self.field,
            reason: self.reason,
            message: self.message,
        }
    }
}

/// The registration rule table, one rule per field in reporting order.
pub static RULES: [Rule; FIELD_COUNT] = [
    Rule {
        field: Field::FullName,
        reason: FailureReason::TooShort,
        client: Check::MinTrimmedChars(2),
        server: Check::MinTrimmedChars(2),
        message: "Full Name is required and must be at least 2 characters.",
    },
    Rule {
        field: Field::Email,
        reason: FailureReason::Malformed,
        client: Check::Pattern(Pattern::EmailShape),
        server: Check::StandardEmail,
        message: "A valid Email Address is required.",
    },
    Rule {
        field: Field::Phone,
        reason: FailureReason::WrongLength,
        client: Check::Pattern(Pattern::TenDigits),
        server: Check::DigitCount(10),
        message: "Phone Number must be exactly 10 digits.",
    },
    Rule {
        field: Field::Gender,
        reason: FailureReason::MissingSelection,
        client: Check::Selected,
        server: Check::OneOf(GENDER_OPTIONS),
        message: "Please select a valid Gender.",
    },
    Rule {
        field: Field::Course,
        reason: FailureReason::MissingSelection,
        client: Check::Selected,
        server: Check::Selected,
        message: "Please select a Course.",
    },
    Rule {
        field: Field::Terms,
        reason: FailureReason::Unchecked,
        client: Check::Checked,
        server: Check::Checked,
        message: "You must agree to the Terms & Conditions.",
    },
];

/// The rule governing `field`.
pub fn rule_for(field: Field) -> &'static Rule {
    &RULES[field.index()]
}

/// Run every rule under `profile` and return the failures in reporting
/// order. Never short-circuits: all failures surface together.
pub fn evaluate<'a, F>(profile: Profile, value_of: F) -> Vec<FieldError>
where
    F: Fn(Field) -> Option<&'a str>,
{
    RULES
        .iter()
        .filter(|rule| !rule.passes(profile, value_of(rule.field)))
        .map(Rule::failure)
        .collect()
}

/// One entry of the manifest the browser interprets.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRule {
    pub field: Field,
    pub error_element: &'static str,
    pub trigger: Trigger,
    pub marks_input: bool,
    pub check: Check,
    pub message: &'static str,
}

/// The client half of [`RULES`], in reporting order.
pub fn client_manifest() -> Vec<ClientRule> {
    RULES
        .iter()
        .map(|rule| ClientRule {
            field: rule.field,
            error_element: rule.field.error_element_id(),
            trigger: rule.field.trigger(),
            marks_input: rule.field.marks_input(),
            check: rule.client,
            message: rule.message,
        })
        .collect()
}

/// [`client_manifest`] as JSON, safe to inline in a `<script>` element.
pub fn client_manifest_json() -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(&client_manifest())?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn table_is_in_reporting_order() {
        for (rule, field) in RULES.iter().zip(Field::all_fields()) {
            assert_eq!(rule.field, *field);
            assert_eq!(rule_for(*field).field, *field);
        }
    }

    #[test]
    fn shared_patterns_compile() {
        assert!(Pattern::EmailShape.is_match("user@example.com"));
        assert!(Pattern::TenDigits.is_match("9876543210"));
    }

    #[test]
    fn client_email_shape() {
        let rule = rule_for(Field::Email);
        assert!(rule.passes(Profile::Client, Some("user@example.com")));
        assert!(rule.passes(Profile::Client, Some("  user@example.com ")));
        for bad in ["user@", "user.example.com", "@example.com", "user @example.com"] {
            assert!(!rule.passes(Profile::Client, Some(bad)), "{bad}");
        }
    }

    #[test]
    fn server_email_is_stricter() {
        let rule = rule_for(Field::Email);
        assert!(rule.passes(Profile::Client, Some("user..x@example.com")));
        assert!(!rule.passes(Profile::Server, Some("user..x@example.com")));
        assert!(rule.passes(Profile::Server, Some("user@example.com")));
    }

    #[test]
    fn client_phone_requires_literal_digits() {
        let rule = rule_for(Field::Phone);
        assert!(rule.passes(Profile::Client, Some("9876543210")));
        assert!(!rule.passes(Profile::Client, Some("987-654-3210")));
        assert!(!rule.passes(Profile::Client, Some("98765432100")));
        assert!(!rule.passes(Profile::Client, Some("٩٨٧٦٥٤٣٢١٠")));
    }

    #[test]
    fn server_phone_strips_non_digits() {
        let rule = rule_for(Field::Phone);
        assert!(rule.passes(Profile::Server, Some("987-654-3210")));
        assert!(rule.passes(Profile::Server, Some("9876543210")));
        assert!(!rule.passes(Profile::Server, Some("98765")));
        assert!(!rule.passes(Profile::Server, Some("")));
        assert!(!rule.passes(Profile::Server, None));
    }

    #[test]
    fn gender_requires_one_known_option() {
        let rule = rule_for(Field::Gender);
        assert!(!rule.passes(Profile::Client, None));
        assert!(!rule.passes(Profile::Server, None));
        for g in ["Male", "Female", "Other"] {
            assert!(rule.passes(Profile::Client, Some(g)));
            assert!(rule.passes(Profile::Server, Some(g)));
        }
        assert!(rule.passes(Profile::Client, Some("Robot")));
        assert!(!rule.passes(Profile::Server, Some("Robot")));
        assert!(!rule.passes(Profile::Server, Some("male")));
    }

    #[test]
    fn course_rejects_placeholder() {
        let rule = rule_for(Field::Course);
        assert!(!rule.passes(Profile::Client, None));
        assert!(!rule.passes(Profile::Server, Some("")));
        assert!(rule.passes(Profile::Server, Some("Computer Science")));
    }

    #[test]
    fn terms_is_presence() {
        let rule = rule_for(Field::Terms);
        assert!(rule.passes(Profile::Server, Some("on")));
        assert!(!rule.passes(Profile::Server, None));
    }

    #[test]
    fn evaluate_reports_every_failure_in_order() {
        let failures = evaluate(Profile::Server, |_| None);
        let fields: Vec<Field> = failures.iter().map(|f| f.field).collect();
        assert_eq!(fields, Field::all_fields());
    }

    #[test]
    fn manifest_carries_client_checks() {
        let json: serde_json::Value =
            serde_json::from_str(&client_manifest_json().unwrap()).unwrap();
        let rules = json.as_array().unwrap();
        assert_eq!(rules.len(), FIELD_COUNT);

        assert_eq!(rules[0]["field"], "fullName");
        assert_eq!(rules[0]["errorElement"], "nameError");
        assert_eq!(rules[0]["trigger"], "blur");
        assert_eq!(rules[0]["check"]["kind"], "min_trimmed_chars");
        assert_eq!(rules[0]["check"]["arg"], 2);

        assert_eq!(rules[2]["check"]["kind"], "pattern");
        assert_eq!(rules[2]["check"]["arg"], r"^[0-9]{10}$");

        assert_eq!(rules[3]["marksInput"], false);
        assert_eq!(rules[5]["check"]["kind"], "checked");
        assert!(rules[5]["check"].get("arg").is_none());
        assert_eq!(rules[5]["message"], "You must agree to the Terms & Conditions.");
    }

    #[test]
    fn trim_matches_browser_whitespace() {
        assert_eq!(trim_form_value("\u{FEFF} ab \u{3000}"), "ab");
        assert_eq!(trim_form_value("\u{85}ab"), "\u{85}ab");
        let name = rule_for(Field::FullName);
        assert!(!name.passes(Profile::Server, Some("\u{FEFF}a")));
        assert!(!rule_for(Field::Course).passes(Profile::Server, Some("\u{FEFF}")));
    }

    proptest! {
        /// Name passes exactly when the trimmed value has two or more characters.
        #[test]
        fn name_rule_matches_trimmed_length(s in "\\PC{0,12}") {
            let expected = trim_form_value(&s).chars().count() >= 2;
            let rule = rule_for(Field::FullName);
            prop_assert_eq!(rule.passes(Profile::Client, Some(s.as_str())), expected);
            prop_assert_eq!(rule.passes(Profile::Server, Some(s.as_str())), expected);
        }

        /// Every ten-digit string passes both phone checks.
        #[test]
        fn ten_digits_pass_both_profiles(s in "[0-9]{10}") {
            let rule = rule_for(Field::Phone);
            prop_assert!(rule.passes(Profile::Client, Some(s.as_str())));
            prop_assert!(rule.passes(Profile::Server, Some(s.as_str())));
        }

        /// Anything the client accepts as a phone number, the server accepts.
        #[test]
        fn client_phone_acceptance_implies_server(s in "[0-9 ()-]{0,14}") {
            let rule = rule_for(Field::Phone);
            if rule.passes(Profile::Client, Some(s.as_str())) {
                prop_assert!(rule.passes(Profile::Server, Some(s.as_str())));
            }
        }

        /// Anything the server accepts as an email, the client accepts.
        #[test]
        fn server_email_acceptance_implies_client(
            local in "[a-z0-9.+_-]{1,10}",
            domain in "[a-z0-9-]{1,8}",
            tld in "[a-z]{2,4}",
        ) {
            let addr = format!("{local}@{domain}.{tld}");
            let rule = rule_for(Field::Email);
            if rule.passes(Profile::Server, Some(addr.as_str())) {
                prop_assert!(rule.passes(Profile::Client, Some(addr.as_str())));
            }
        }
    }
}
