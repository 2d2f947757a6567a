//! Single test binary entry point.
//!
//! Structure:
//! - helpers: Builders and assertions shared by the tests
//! - integration: Multi-component workflow tests (store, export, persistence)
//! - unit: Single-component unit tests

mod helpers;
mod unit;
