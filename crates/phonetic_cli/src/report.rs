//! Console progress lines.
//!
//! Output is human-readable only and not a stable format.

use phonetic_core::{
    AccessStatus, ContactOutcome, RunMode, RunObserver, RunOptions, UpdateDecision, WriteOutcome,
};
use std::io::{Stdout, Write};

/// Writes run progress to a console stream.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Prints the dry-run/force notices shown before the run starts.
    pub fn notices(&mut self, options: &RunOptions) {
        if options.dry_run {
            self.line("Will perform dry run, your contacts will not be modified.");
        }
        if options.force {
            self.line(
                "Will force update all phonetic names, even if the phonetic names already exist.",
            );
        }
    }

    pub fn finished(&mut self, options: &RunOptions) {
        self.line(final_line(options));
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        // Console write errors (closed pipe) must not stop the batch.
        let _ = writeln!(self.out, "{text}");
    }
}

impl<W: Write> RunObserver for ConsoleReporter<W> {
    fn on_access(&mut self, status: AccessStatus) {
        match status {
            AccessStatus::Authorized => self.line("Contact permission already authorized."),
            AccessStatus::Granted => {
                self.line("Contact permission is not determined. Asking for contact permission...");
                self.line("Permission granted.");
            }
            AccessStatus::Denied => self.line("Permission denied."),
        }
    }

    fn on_contact(&mut self, outcome: &ContactOutcome) {
        let contact = &outcome.contact;
        match &outcome.decision {
            UpdateDecision::SkipAlreadySet => self.line(&format!(
                "Phonetic name already exists: {}{} ( {} {} ), skipped.",
                contact.family_name,
                contact.given_name,
                contact.phonetic_family_name,
                contact.phonetic_given_name
            )),
            UpdateDecision::SkipNotChinese => self.line(&format!(
                "Non-Chinese contact name: {}, skipped.",
                contact.full_name()
            )),
            UpdateDecision::Apply(phonetic) => {
                self.line(&format!(
                    "Setting phonetic names for {}: {}.",
                    contact.full_name(),
                    phonetic.readable()
                ));
                if let Some(WriteOutcome::Failed(message)) = &outcome.write {
                    self.line(&format!("Fail to execute store request: {message}"));
                }
            }
        }
    }
}

fn final_line(options: &RunOptions) -> &'static str {
    if options.dry_run {
        return "Dry run mode. Your contacts were not modified.";
    }
    match options.mode {
        RunMode::Fill => "Phonetic names updated.",
        RunMode::Clean => "Phonetic names cleaned.",
    }
}
