//! Dataset access for Bolide.
//!
//! Holds the in-memory record store, the one-shot fetch that populates it
//! at startup, and the filter/paginate pipeline the listing endpoint runs
//! on a cache miss.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;
mod query;
mod store;

pub use client::{load, DatasetClient, DatasetConfig};
pub use query::{distinct_years, run_query};
pub use store::MeteorStore;
