//! Paper domain model.
//!
//! # Responsibility
//! - Define the record shape shared by loader, query engine and assistant.
//! - Keep derived facets typed instead of free-form strings.
//!
//! # Invariants
//! - Records are immutable after load; there is no write path.

pub mod organism;
pub mod paper;
