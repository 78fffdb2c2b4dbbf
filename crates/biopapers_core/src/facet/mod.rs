//! Load-time facet derivation.
//!
//! # Responsibility
//! - Compute secondary, filterable attributes from free-text paper fields.
//!
//! # Invariants
//! - Derivation is pure and runs once per record at load time.

pub mod organism;
