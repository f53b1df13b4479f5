//! Shared HTML document shell.

/// Base styles shared by every page.
const BASE_STYLE: &str = "\
body { font-family: system-ui, sans-serif; background: #F3F4F6; margin: 0; }
.container { max-width: 640px; margin: 2rem auto; padding: 0 1rem; }
.registration-card { background: #FFFFFF; border-radius: 12px; padding: 2rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.card-header h1 { margin-top: 0; }
.form-actions { margin-top: 1.5rem; }
";

/// Wrap `body` in a complete HTML5 document.
///
/// `title` and `style` are trusted, static text. `body` must already be
/// HTML-safe.
pub fn document(title: &str, style: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n\
         <style>\n{BASE_STYLE}{style}</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         <div class=\"registration-card\">\n\
         {body}\
         </div>\n\
         </div>\n\
         </body>\n\
         </html>\n"
    )
}

/// A minimal page carrying a heading and one line of text.
pub fn message_page(title: &str, message: &str) -> String {
    let body = format!(
        "<header class=\"card-header\">\n<h1>{title}</h1>\n<p>{message}</p>\n</header>\n\
         <div class=\"form-actions\"><a href=\"/index.html\">Back to the registration form</a></div>\n"
    );
    document(title, "", &body)
}
