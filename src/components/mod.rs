//! UI components for the portfolio page.

pub mod contact_form;
pub mod navbar;
pub mod reveal;
pub mod toast;
