//! # Form Fields — Single Source of Truth
//!
//! Defines the `Field` enum naming the six validated registration fields,
//! the `Gender` option set, and the fixed course catalogue. Every `match`
//! on `Field` is exhaustive, so adding a field forces the rule table, the
//! client model, and the renderers to handle it at compile time.
//!
//! Field order is significant: it is the order in which validation
//! failures are reported on both the client and the server.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SregError;

/// A validated field of the registration form.
///
/// Optional fields (date of birth, address) carry no rule and are not
/// represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Student's full name (`fullName`).
    FullName,
    /// Contact email address (`email`).
    Email,
    /// Ten-digit phone number (`phone`).
    Phone,
    /// Radio group selection (`gender`).
    Gender,
    /// Course select (`course`).
    Course,
    /// Terms & Conditions checkbox (`terms`).
    Terms,
}

/// Number of validated fields.
pub const FIELD_COUNT: usize = 6;

/// Browser event that triggers a field's live check ahead of submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Loss of focus on a text input.
    Blur,
    /// Value change on a select, radio group, or checkbox.
    Change,
}

impl Field {
    /// Returns all validated fields in reporting order.
    pub fn all_fields() -> &'static [Field] {
        &[
            Self::FullName,
            Self::Email,
            Self::Phone,
            Self::Gender,
            Self::Course,
            Self::Terms,
        ]
    }

    /// Position of this field in reporting order.
    pub fn index(&self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Gender => 3,
            Self::Course => 4,
            Self::Terms => 5,
        }
    }

    /// The form control `name` attribute, as submitted in the POST body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Gender => "gender",
            Self::Course => "course",
            Self::Terms => "terms",
        }
    }

    /// Human-readable label shown next to the control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Gender => "Gender",
            Self::Course => "Course",
            Self::Terms => "I agree to the Terms & Conditions",
        }
    }

    /// Id of the inline error element revealed when the field is invalid.
    pub fn error_element_id(&self) -> &'static str {
        match self {
            Self::FullName => "nameError",
            Self::Email => "emailError",
            Self::Phone => "phoneError",
            Self::Gender => "genderError",
            Self::Course => "courseError",
            Self::Terms => "termsError",
        }
    }

    /// Event that runs this field's check while the user edits the form.
    pub fn trigger(&self) -> Trigger {
        match self {
            Self::FullName | Self::Email | Self::Phone => Trigger::Blur,
            Self::Gender | Self::Course | Self::Terms => Trigger::Change,
        }
    }

    /// Whether a failure marks the control itself invalid.
    ///
    /// The radio group and the checkbox only reveal their message.
    pub fn marks_input(&self) -> bool {
        match self {
            Self::FullName | Self::Email | Self::Phone | Self::Course => true,
            Self::Gender | Self::Terms => false,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = SregError;

    /// Parse a field from its form control name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullName" => Ok(Self::FullName),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "gender" => Ok(Self::Gender),
            "course" => Ok(Self::Course),
            "terms" => Ok(Self::Terms),
            other => Err(SregError::UnknownField(other.to_string())),
        }
    }
}

/// Gender options offered by the radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Submitted values accepted for the gender radio group.
pub const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other"];

impl Gender {
    /// Returns all gender options in display order.
    pub fn all() -> &'static [Gender] {
        &[Self::Male, Self::Female, Self::Other]
    }

    /// The submitted radio value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = SregError;

    /// Case-sensitive: only the exact radio values are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            "Other" => Ok(Self::Other),
            other => Err(SregError::UnknownGender(other.to_string())),
        }
    }
}

/// Courses offered in the course select, in display order.
pub const COURSE_OPTIONS: &[&str] = &[
    "Computer Science",
    "Information Technology",
    "Electronics & Communication",
    "Mechanical Engineering",
    "Civil Engineering",
    "Business Administration",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_reporting_order() {
        assert_eq!(Field::all_fields().len(), FIELD_COUNT);
        for (i, field) in Field::all_fields().iter().enumerate() {
            assert_eq!(field.index(), i, "{field} out of order");
        }
    }

    #[test]
    fn form_name_roundtrip() {
        for field in Field::all_fields() {
            let parsed: Field = field.as_str().parse().unwrap();
            assert_eq!(*field, parsed);
        }
        assert!("full_name".parse::<Field>().is_err());
        assert!("dob".parse::<Field>().is_err());
    }

    #[test]
    fn serde_format_matches_form_name() {
        for field in Field::all_fields() {
            let json = serde_json::to_string(field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn error_element_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for field in Field::all_fields() {
            assert!(seen.insert(field.error_element_id()));
        }
    }

    #[test]
    fn text_inputs_check_on_blur() {
        assert_eq!(Field::FullName.trigger(), Trigger::Blur);
        assert_eq!(Field::Phone.trigger(), Trigger::Blur);
        assert_eq!(Field::Gender.trigger(), Trigger::Change);
        assert_eq!(Field::Terms.trigger(), Trigger::Change);
    }

    #[test]
    fn gender_parse_is_case_sensitive() {
        for g in Gender::all() {
            assert_eq!(g.as_str().parse::<Gender>().unwrap(), *g);
            assert!(GENDER_OPTIONS.contains(&g.as_str()));
        }
        assert!("male".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }
}
