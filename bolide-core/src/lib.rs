//! # Bolide Core
//!
//! Core types, errors, and coercion rules for the Bolide meteorite API.
//!
//! This crate provides the foundational building blocks used by all other
//! Bolide crates:
//!
//! - **Types**: Domain models for meteorite records, query parameters, and
//!   response pages
//! - **Coercion**: The loose numeric and date coercion rules applied to
//!   query parameters and record fields
//! - **Errors**: Error types with context
//! - **Constants**: Dataset location, cache TTL, and paging defaults
//!
//! ## Example
//!
//! ```rust
//! use bolide_core::MeteorRecord;
//!
//! // Types are serializable and well-documented
//! let record = MeteorRecord::new(Some("2001-01-01T00:00:00.000"), Some("100"));
//! let json = serde_json::to_string(&record).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod coerce;
pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use coerce::*;
pub use constants::*;
pub use error::{BolideError, Result};
pub use types::*;
