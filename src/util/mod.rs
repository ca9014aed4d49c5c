//! Browser glue: localStorage, media queries, document attributes.
//!
//! Everything here degrades to a no-op (or a neutral default) outside the
//! browser so native builds and tests never touch `web-sys`.

pub mod theme;
pub mod viewport;
