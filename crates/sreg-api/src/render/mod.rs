//! # Page Renderers
//!
//! Pure functions from typed data to complete HTML documents. Validation
//! decides; rendering only formats. No renderer escapes user data: every
//! submitted value arrives as `Sanitized`.
//!
//! - `form` — the registration form with the embedded client manifest.
//! - `confirmation` — accepted submission echo.
//! - `errors` — ordered failure list with a history-back action.
//! - `layout` — the shared document shell.

pub mod confirmation;
pub mod errors;
pub mod form;
pub mod layout;

pub use confirmation::confirmation_page;
pub use errors::error_page;
pub use form::form_page;
