//! Network helpers for the form-relay endpoint.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning a transport error so logic tests and
//! tooling compile without a browser.

pub mod contact;
