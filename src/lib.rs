//! Order form composer.
//!
//! Builds a tree of sections → forms → questions describing a conversational
//! ordering flow, and exports every form as a CSV file for the ordering bot.
//!
//! - [`types`] - the data model
//! - [`store`] - the state container and all edit operations
//! - [`links`] - form-id to display-name resolution
//! - [`validation`] - pre-export checks
//! - [`export`] - CSV rendering, bundles, archives and CSV import
//! - [`persistence`] - versioned snapshots in local storage

pub mod constants;
pub mod error;
pub mod export;
pub mod links;
pub mod logging;
pub mod persistence;
pub mod seed;
pub mod settings;
pub mod store;
pub mod types;
pub mod validation;
