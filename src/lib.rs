//! # portfolio-site
//!
//! Leptos + WASM behavior layer for a static personal portfolio site.
//! Covers persisted light/dark theming, the mobile navigation toggle,
//! scroll-triggered reveal animations, and asynchronous contact form
//! submission with toast feedback.
//!
//! State lives in plain-data modules under [`state`] so the logic tests
//! run natively; everything touching browser APIs is gated behind the
//! `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
