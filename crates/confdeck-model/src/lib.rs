#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    unused,
    unreachable_pub,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]
//! Shared configuration DTOs for the Confdeck console.
//!
//! These types are re-used by the REST service and the web UI so the JSON
//! contract stays a single source of truth. Layout: `model.rs` (wire types),
//! `validate.rs` (update validation and key normalisation), `seed.rs` (the
//! built-in configuration collection), `catalog.rs` (in-memory store).

pub mod catalog;
pub mod error;
pub mod model;
pub mod seed;
pub mod validate;

pub use catalog::{Catalog, assign_order};
pub use error::{CatalogError, CatalogResult};
pub use model::{
    Configuration, ConfigurationEnvelope, ConfigurationUpdate, OrderedConfiguration,
    ProblemDetails, ProblemInvalidParam, Property, PropertyList,
};
pub use validate::{normalize_key, validate_update};
