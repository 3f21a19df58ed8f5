//! Core logic for filling and cleaning phonetic contact names.
//! Address-book access goes through the injected `ContactStore` contract.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, RunOptions};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{ContactId, ContactRecord, PhoneticNames, PhoneticUpdate};
pub use repo::contact_repo::{
    AccessStatus, ContactStore, RepoError, RepoResult, SqliteContactStore,
};
pub use service::phonetic_service::{
    ContactOutcome, PhoneticService, RunError, RunObserver, RunSummary, WriteOutcome,
};
pub use service::planner::{RunMode, UpdateDecision, UpdatePlanner};
pub use service::transliterator::{
    name_overrides, NameTransliterator, PinyinRomanizer, RomanizeError, Romanizer,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
