//! Repository layer: storage contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract for the catalog
//!   and its social graph.
//! - Keep collection ownership, natural-key lookup and index maintenance
//!   inside the repository boundary.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) for caller-input
//!   failures; internal invariant violations assert instead.
//! - Validation precedes mutation: a failed operation leaves no partial
//!   state behind.

pub mod catalog_repo;
