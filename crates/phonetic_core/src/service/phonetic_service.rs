//! Phonetic-name batch run.
//!
//! # Responsibility
//! - Gate on store access, snapshot contacts, plan and write each one.
//! - Report every access result and per-contact outcome to an observer.
//!
//! # Invariants
//! - Access is resolved before any contact is listed.
//! - Contacts are processed sequentially in snapshot order.
//! - A failed write is reported and never aborts the batch.
//! - Dry runs never call `ContactStore::write_update`.

use crate::config::RunOptions;
use crate::model::contact::{ContactRecord, PhoneticNames, PhoneticUpdate};
use crate::repo::contact_repo::{AccessStatus, ContactStore, RepoError};
use crate::service::planner::{UpdateDecision, UpdatePlanner};
use crate::service::transliterator::{PinyinRomanizer, Romanizer};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Failure that ends a run before any contact is processed.
#[derive(Debug)]
pub enum RunError {
    PermissionDenied,
    AccessCheck(RepoError),
    Enumeration(RepoError),
}

impl Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "cannot get contact permission."),
            Self::AccessCheck(err) => write!(f, "cannot get contact permission. {err}"),
            Self::Enumeration(err) => write!(f, "unable to list contacts. {err}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PermissionDenied => None,
            Self::AccessCheck(err) | Self::Enumeration(err) => Some(err),
        }
    }
}

/// Result of consuming an `Apply` decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// Reported only; dry runs never persist.
    DryRun,
    Failed(String),
}

/// Per-contact record handed to the observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactOutcome {
    pub contact: ContactRecord,
    pub decision: UpdateDecision,
    /// `Some` only for `UpdateDecision::Apply`.
    pub write: Option<WriteOutcome>,
}

/// Counters for one finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub written: usize,
    pub dry_run_planned: usize,
    pub skipped_already_set: usize,
    pub skipped_not_chinese: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &ContactOutcome) {
        self.total += 1;
        match (&outcome.decision, &outcome.write) {
            (UpdateDecision::SkipAlreadySet, _) => self.skipped_already_set += 1,
            (UpdateDecision::SkipNotChinese, _) => self.skipped_not_chinese += 1,
            (UpdateDecision::Apply(_), Some(WriteOutcome::Written)) => self.written += 1,
            (UpdateDecision::Apply(_), Some(WriteOutcome::DryRun)) => self.dry_run_planned += 1,
            (UpdateDecision::Apply(_), Some(WriteOutcome::Failed(_))) => self.failed += 1,
            (UpdateDecision::Apply(_), None) => {}
        }
    }
}

/// Receives progress while a run executes.
pub trait RunObserver {
    fn on_access(&mut self, _status: AccessStatus) {}
    fn on_contact(&mut self, _outcome: &ContactOutcome) {}
}

impl RunObserver for () {}

/// Fill/clean service over an injected contact store.
pub struct PhoneticService<S: ContactStore, R: Romanizer = PinyinRomanizer> {
    store: S,
    planner: UpdatePlanner<R>,
    options: RunOptions,
}

impl<S: ContactStore> PhoneticService<S> {
    pub fn new(store: S, options: RunOptions) -> Self {
        Self::with_planner(store, UpdatePlanner::new(), options)
    }
}

impl<S: ContactStore, R: Romanizer> PhoneticService<S, R> {
    pub fn with_planner(store: S, planner: UpdatePlanner<R>, options: RunOptions) -> Self {
        Self {
            store,
            planner,
            options,
        }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Runs one batch over the full contact snapshot.
    ///
    /// # Errors
    /// - `PermissionDenied`/`AccessCheck` when store access is not granted.
    /// - `Enumeration` when the contact snapshot cannot be read.
    pub fn run(&self, observer: &mut impl RunObserver) -> Result<RunSummary, RunError> {
        let started_at = Instant::now();
        let mode = self.options.mode.as_str();
        info!(
            "event=run_start module=service status=start mode={} dry_run={} force={}",
            mode, self.options.dry_run, self.options.force
        );

        let access = self.store.request_access().map_err(|err| {
            error!("event=access_check module=service status=error error={err}");
            RunError::AccessCheck(err)
        })?;
        observer.on_access(access);
        if !access.is_allowed() {
            warn!("event=access_check module=service status=denied");
            return Err(RunError::PermissionDenied);
        }
        info!(
            "event=access_check module=service status=ok access={}",
            access.as_str()
        );

        let contacts = self.store.list_contacts().map_err(|err| {
            error!("event=list_contacts module=service status=error error={err}");
            RunError::Enumeration(err)
        })?;
        info!(
            "event=list_contacts module=service status=ok count={}",
            contacts.len()
        );

        let mut summary = RunSummary::default();
        for contact in contacts {
            let decision = self
                .planner
                .plan(&contact, self.options.mode, self.options.force);
            let write = match &decision {
                UpdateDecision::Apply(phonetic) => Some(self.consume_apply(&contact, phonetic)),
                UpdateDecision::SkipAlreadySet | UpdateDecision::SkipNotChinese => {
                    info!(
                        "event=plan_contact module=service status=skip contact_id={} decision={}",
                        contact.id,
                        decision.as_str()
                    );
                    None
                }
            };

            let outcome = ContactOutcome {
                contact,
                decision,
                write,
            };
            summary.record(&outcome);
            observer.on_contact(&outcome);
        }

        info!(
            "event=run_finish module=service status=ok mode={} total={} written={} dry_run_planned={} skipped_already_set={} skipped_not_chinese={} failed={} duration_ms={}",
            mode,
            summary.total,
            summary.written,
            summary.dry_run_planned,
            summary.skipped_already_set,
            summary.skipped_not_chinese,
            summary.failed,
            started_at.elapsed().as_millis()
        );
        Ok(summary)
    }

    fn consume_apply(&self, contact: &ContactRecord, phonetic: &PhoneticNames) -> WriteOutcome {
        if self.options.dry_run {
            info!(
                "event=write_contact module=service status=dry_run contact_id={}",
                contact.id
            );
            return WriteOutcome::DryRun;
        }

        let update = PhoneticUpdate::new(contact.id, phonetic.clone());
        let outcome = match self.store.write_update(&update) {
            Ok(()) => {
                info!(
                    "event=write_contact module=service status=ok contact_id={}",
                    contact.id
                );
                WriteOutcome::Written
            }
            Err(err) => {
                error!(
                    "event=write_contact module=service status=error contact_id={} error={}",
                    contact.id, err
                );
                WriteOutcome::Failed(err.to_string())
            }
        };

        if !self.options.write_pause.is_zero() {
            std::thread::sleep(self.options.write_pause);
        }
        outcome
    }
}
