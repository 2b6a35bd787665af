//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep external request layers decoupled from storage details.
//!
//! # Invariants
//! - Services never bypass repository index-maintenance contracts.
//! - Log records carry entity ids and counters only, never display names
//!   or mobile numbers.

pub mod catalog_service;
pub mod community_service;
