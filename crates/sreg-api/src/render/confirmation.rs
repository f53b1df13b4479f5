//! # Confirmation Page
//!
//! Echoes back an accepted registration. Every value is already
//! [`Sanitized`]; empty optional fields show [`NOT_APPLICABLE`].

use sreg_core::{RegistrationSubmission, Sanitized};

use super::layout::document;

/// Placeholder for an optional field left empty.
pub const NOT_APPLICABLE: &str = "N/A";

const CONFIRMATION_STYLE: &str = "\
.success-icon { font-size: 3rem; color: #10B981; margin-bottom: 1rem; }
.data-list { text-align: left; margin-top: 1.5rem; border-top: 1px solid #E5E7EB; padding-top: 1rem; }
.data-item { margin-bottom: 0.5rem; }
.data-label { font-weight: 600; color: #4B5563; }
";

/// Render the confirmation document for an accepted submission.
pub fn confirmation_page(record: &RegistrationSubmission) -> String {
    let dob = record
        .date_of_birth
        .as_ref()
        .map_or(NOT_APPLICABLE, Sanitized::as_str);
    let address = record
        .address
        .as_ref()
        .map_or_else(|| NOT_APPLICABLE.to_string(), line_breaks);

    let items = [
        ("Email", record.email.as_str()),
        ("Phone", record.phone.as_str()),
        ("DOB", dob),
        ("Gender", record.gender.as_str()),
        ("Course", record.course.as_str()),
        ("Address", address.as_str()),
    ];
    let data_list: String = items
        .iter()
        .map(|(label, value)| {
            format!(
                "<div class=\"data-item\"><span class=\"data-label\">{label}:</span> {value}</div>\n"
            )
        })
        .collect();

    let body = format!(
        "<div class=\"success-icon\">&#10004;</div>\n\
         <header class=\"card-header\">\n\
         <h1>Registration Successful!</h1>\n\
         <p>Thank you, <strong>{name}</strong>. We have received your details.</p>\n\
         </header>\n\
         <div class=\"data-list\">\n\
         {data_list}\
         </div>\n\
         <div class=\"form-actions\">\n\
         <a href=\"/index.html\"><button type=\"button\">Register Another Student</button></a>\n\
         </div>\n",
        name = record.full_name,
    );

    document("Registration Successful", CONFIRMATION_STYLE, &body)
}

/// Render each line break as `<br>` followed by the original break.
fn line_breaks(text: &Sanitized) -> String {
    let text = text.as_str();
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                out.push_str("<br>\r\n");
            }
            '\r' | '\n' => {
                out.push_str("<br>");
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}
