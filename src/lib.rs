//! Core domain library for the stay-map backend: geospatial search over
//! lodging places and rooms, backed by Postgres.
//!
//! Organized by feature, with each feature split into models, dtos,
//! repositories and services. `core` holds configuration, database pooling
//! and the crate-wide error type; `shared` holds the geo primitives and the
//! response envelope every feature reuses.

pub mod core;
pub mod features;
pub mod shared;
