//! Page-level components. The portfolio is a single page.

pub mod home;
