//! Unit tests for the order form library.

mod csv_tests;
mod types_tests;
mod validation_tests;
