//! Integration tests for the Bridge Rust SDK.
//!
//! Each test starts a local wiremock server standing in for a bridge
//! backend and drives the public API against it.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With SDK logs
//! RUST_LOG=bridge_sdk=debug cargo test --test integration -- --nocapture
//! ```

mod client_tests;
mod common;
mod envelope_tests;
mod project_tests;
