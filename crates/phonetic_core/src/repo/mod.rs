//! Contact store abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the address-book provider contract used by name services.
//! - Isolate SQLite query details from planning and orchestration.

pub mod contact_repo;
