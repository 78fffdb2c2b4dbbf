//! Rule-table research assistant.
//!
//! # Responsibility
//! - Answer free-text questions from a fixed, ordered rule table.
//! - Keep a chat transcript for interactive front ends.
//!
//! # Invariants
//! - Answers are deterministic for a given query and collection.
//! - There is no model or inference; every answer is canned or templated.

pub mod rules;
pub mod session;
