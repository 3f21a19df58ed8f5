//! Name services.
//!
//! # Responsibility
//! - Romanize names, decide per-contact updates, and drive batch runs.
//! - Stay storage-agnostic; stores are injected through `ContactStore`.

pub mod phonetic_service;
pub mod planner;
pub mod transliterator;
