//! Flutter-facing bindings for the paper engine.

pub mod api;
