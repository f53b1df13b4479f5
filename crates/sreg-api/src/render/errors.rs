//! # Error Listing Page
//!
//! Lists every validation failure in field order. "Go Back & Fix" steps
//! back through browser history instead of reloading the form, so the
//! user's typed values survive.

use sreg_core::{Sanitized, ValidationErrors};

use super::layout::document;

const ERROR_STYLE: &str = "\
.error-icon { font-size: 3rem; color: #EF4444; margin-bottom: 1rem; }
.error-list { text-align: left; background: #FEF2F2; padding: 1rem 1rem 1rem 2rem; border-radius: 8px; border: 1px solid #FECACA; color: #991B1B; }
";

/// Render the failure document for a rejected submission.
pub fn error_page(errors: &ValidationErrors) -> String {
    let items: String = errors
        .iter()
        .map(|err| format!("<li>{}</li>\n", Sanitized::special_chars(err.message)))
        .collect();

    let body = format!(
        "<div class=\"error-icon\">&#9888;</div>\n\
         <header class=\"card-header\">\n\
         <h1>Submission Failed</h1>\n\
         <p>Please fix the following errors and try again.</p>\n\
         </header>\n\
         <ul class=\"error-list\">\n\
         {items}\
         </ul>\n\
         <div class=\"form-actions\">\n\
         <button type=\"button\" onclick=\"history.back()\">Go Back &amp; Fix</button>\n\
         </div>\n"
    );

    document("Registration Failed", ERROR_STYLE, &body)
}
