//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by behavior (`theme`, `nav`, `contact`, `toast`) so each
//! component depends on a small focused model. All of it is plain data with
//! no browser types, which keeps the unit tests native.

pub mod contact;
pub mod nav;
pub mod theme;
pub mod toast;
