//! # Registration Form Page
//!
//! Renders the entry form. Inline error elements start hidden and carry
//! the rule table's messages; the client rule manifest is embedded as JSON
//! for `validate.js` to interpret, so the page and the server report the
//! same text for the same failure.

use sreg_core::{rule_for, Field, Gender, Sanitized, COURSE_OPTIONS};

use super::layout::document;

const FORM_STYLE: &str = "\
.form-group { margin-bottom: 1rem; }
.form-group label { display: block; font-weight: 600; margin-bottom: .25rem; }
input.error, select.error { border-color: #EF4444; }
.error-message { display: none; color: #B91C1C; font-size: .875rem; }
";

/// Path the form posts to.
pub const SUBMIT_PATH: &str = "/submit";

/// Path of the browser rule interpreter.
pub const SCRIPT_PATH: &str = "/assets/validate.js";

/// Render the registration form with `manifest_json` embedded.
///
/// `manifest_json` must come from [`sreg_core::client_manifest_json`],
/// which escapes closing tags.
pub fn form_page(manifest_json: &str) -> String {
    let mut body = String::from(
        "<header class=\"card-header\">\n\
         <h1>Student Registration</h1>\n\
         <p>Fill in your details to enrol in a course.</p>\n\
         </header>\n",
    );
    body.push_str(&format!(
        "<form id=\"registrationForm\" action=\"{SUBMIT_PATH}\" method=\"post\" novalidate>\n"
    ));
    body.push_str(&text_input(Field::FullName, "text", "fullName"));
    body.push_str(&text_input(Field::Email, "email", "email"));
    body.push_str(&text_input(Field::Phone, "tel", "phone"));
    body.push_str(
        "<div class=\"form-group\">\n\
         <label for=\"dob\">Date of Birth</label>\n\
         <input type=\"date\" id=\"dob\" name=\"dob\">\n\
         </div>\n",
    );
    body.push_str(&gender_group());
    body.push_str(&course_select());
    body.push_str(
        "<div class=\"form-group\">\n\
         <label for=\"address\">Address</label>\n\
         <textarea id=\"address\" name=\"address\" rows=\"3\"></textarea>\n\
         </div>\n",
    );
    body.push_str(&terms_checkbox());
    body.push_str(
        "<div class=\"form-actions\"><button type=\"submit\">Register</button></div>\n\
         </form>\n",
    );
    body.push_str(&format!(
        "<script type=\"application/json\" id=\"validation-rules\">{manifest_json}</script>\n\
         <script src=\"{SCRIPT_PATH}\" defer></script>\n"
    ));

    document("Student Registration", FORM_STYLE, &body)
}

fn error_element(field: Field) -> String {
    format!(
        "<span class=\"error-message\" id=\"{}\">{}</span>\n",
        field.error_element_id(),
        Sanitized::special_chars(rule_for(field).message),
    )
}

fn text_input(field: Field, input_type: &str, id: &str) -> String {
    format!(
        "<div class=\"form-group\">\n\
         <label for=\"{id}\">{label}</label>\n\
         <input type=\"{input_type}\" id=\"{id}\" name=\"{name}\">\n\
         {error}\
         </div>\n",
        label = field.label(),
        name = field.as_str(),
        error = error_element(field),
    )
}

fn gender_group() -> String {
    let radios: String = Gender::all()
        .iter()
        .map(|g| {
            format!(
                "<label><input type=\"radio\" name=\"{name}\" value=\"{g}\"> {g}</label>\n",
                name = Field::Gender.as_str(),
            )
        })
        .collect();
    format!(
        "<div class=\"form-group\">\n\
         <span>{label}</span>\n\
         {radios}\
         {error}\
         </div>\n",
        label = Field::Gender.label(),
        error = error_element(Field::Gender),
    )
}

fn course_select() -> String {
    let options: String = COURSE_OPTIONS
        .iter()
        .map(|course| {
            let course = Sanitized::special_chars(course);
            format!("<option value=\"{course}\">{course}</option>\n")
        })
        .collect();
    format!(
        "<div class=\"form-group\">\n\
         <label for=\"course\">{label}</label>\n\
         <select id=\"course\" name=\"{name}\">\n\
         <option value=\"\" disabled selected>Select a course</option>\n\
         {options}\
         </select>\n\
         {error}\
         </div>\n",
        label = Field::Course.label(),
        name = Field::Course.as_str(),
        error = error_element(Field::Course),
    )
}

fn terms_checkbox() -> String {
    format!(
        "<div class=\"form-group\">\n\
         <label><input type=\"checkbox\" id=\"terms\" name=\"{name}\"> {label}</label>\n\
         {error}\
         </div>\n",
        name = Field::Terms.as_str(),
        label = Sanitized::special_chars(Field::Terms.label()),
        error = error_element(Field::Terms),
    )
}
