//! Core library for holonet
//!
//! This crate implements the **Functional Core** of the holonet application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The holonet project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`holonet_core`** (this crate): Pure transformation functions with zero I/O
//! - **`holonet`**: Upstream HTTP calls, the HTTP surface and the CLI (the Imperative Shell)
//!
//! All functions in this crate take plain data and return plain data. They can be
//! tested with fixture values, no HTTP server or mocking required.
//!
//! # Module Organization
//!
//! - [`swapi`]: Catalog page envelope, planet view, resident planning and enrichment
//! - [`sort`]: Character ordering by name, mass or height
//! - [`collation`]: Locale-aware string comparison used for names
//! - [`pagination`]: Page parsing and slicing for aggregated listings
//! - [`error`]: Validation errors for user-supplied parameters
//!
//! # Example Usage
//!
//! ```rust
//! use holonet_core::pagination::{paginate, DEFAULT_LIMIT};
//! use holonet_core::sort::{sort_characters, SortField};
//! use holonet_core::swapi::Record;
//! use serde_json::json;
//!
//! let characters: Vec<Record> = ["Leia", "Anakin"]
//!     .iter()
//!     .map(|name| match json!({ "name": name }) {
//!         serde_json::Value::Object(map) => map,
//!         _ => unreachable!(),
//!     })
//!     .collect();
//!
//! let sorted = sort_characters(characters, SortField::Name);
//! let page = paginate(sorted, 1, DEFAULT_LIMIT);
//!
//! assert_eq!(page.total, 2);
//! assert_eq!(page.results[0]["name"], "Anakin");
//! ```

pub mod collation;
pub mod error;
pub mod pagination;
pub mod sort;
pub mod swapi;
