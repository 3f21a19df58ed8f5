//! Address-book domain model.
//!
//! # Responsibility
//! - Define the read view of a contact that name processing consumes.
//! - Define the write request value submitted back to the contact store.
//!
//! # Invariants
//! - Every contact is identified by a stable `ContactId`.
//! - Stored records are never mutated in place; writes go through
//!   `PhoneticUpdate` requests.

pub mod contact;
