//! In-memory paper query engine.
//!
//! # Responsibility
//! - Substring search and optional-field filtering over a loaded collection.
//! - Facet aggregation for filter pickers and insight charts.
//!
//! # Invariants
//! - Every operation is pure; input collections are never mutated.
//! - Results preserve input order unless an operation documents a sort.
//! - Matching is linear, case-insensitive substring containment.

pub mod facets;
pub mod insights;
pub mod query;
