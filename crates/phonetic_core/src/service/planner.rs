//! Per-contact update decision.
//!
//! # Invariants
//! - `Clean` always yields `Apply` with three empty values.
//! - `Fill` never yields `Apply` when transliteration left all three
//!   source fields unchanged.

use crate::model::contact::{ContactRecord, PhoneticNames};
use crate::service::transliterator::{NameTransliterator, PinyinRomanizer, Romanizer};

/// Run mode: populate phonetic fields or erase them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Fill,
    Clean,
}

impl RunMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Clean => "clean",
        }
    }
}

/// Outcome of planning one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateDecision {
    /// Phonetic data exists and the run is not forced.
    SkipAlreadySet,
    /// Transliteration was a no-op on every name field.
    SkipNotChinese,
    /// Phonetic values to write.
    Apply(PhoneticNames),
}

impl UpdateDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SkipAlreadySet => "skip_already_set",
            Self::SkipNotChinese => "skip_not_chinese",
            Self::Apply(_) => "apply",
        }
    }
}

/// Decides what to write for each contact.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlanner<R: Romanizer = PinyinRomanizer> {
    transliterator: NameTransliterator<R>,
}

impl UpdatePlanner<PinyinRomanizer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Romanizer> UpdatePlanner<R> {
    pub fn with_transliterator(transliterator: NameTransliterator<R>) -> Self {
        Self { transliterator }
    }

    /// Plans the phonetic update for `record`.
    ///
    /// `force` only affects `Fill`; it is rejected together with `Clean`
    /// before any planning happens.
    pub fn plan(&self, record: &ContactRecord, mode: RunMode, force: bool) -> UpdateDecision {
        if mode == RunMode::Clean {
            return UpdateDecision::Apply(PhoneticNames::empty());
        }

        if record.has_phonetic() && !force {
            return UpdateDecision::SkipAlreadySet;
        }

        let phonetic = PhoneticNames::new(
            self.transliterator.transliterate(&record.family_name),
            self.transliterator.transliterate(&record.middle_name),
            self.transliterator.transliterate(&record.given_name),
        );
        if phonetic == record.names() {
            return UpdateDecision::SkipNotChinese;
        }

        UpdateDecision::Apply(phonetic)
    }
}

#[cfg(test)]
mod tests {
    use super::{RunMode, UpdateDecision, UpdatePlanner};
    use crate::model::contact::{ContactRecord, PhoneticNames};

    #[test]
    fn fill_romanizes_chinese_name_with_surname_override() {
        let contact = ContactRecord::new("曾", "", "华");
        let decision = UpdatePlanner::new().plan(&contact, RunMode::Fill, false);
        assert_eq!(
            decision,
            UpdateDecision::Apply(PhoneticNames::new("zēng", "", "huá"))
        );
    }

    #[test]
    fn fill_skips_latin_names() {
        let contact = ContactRecord::new("Smith", "", "John");
        let decision = UpdatePlanner::new().plan(&contact, RunMode::Fill, false);
        assert_eq!(decision, UpdateDecision::SkipNotChinese);
    }

    #[test]
    fn fill_skips_contacts_with_phonetic_data_unless_forced() {
        let contact =
            ContactRecord::new("李", "", "").with_phonetic(PhoneticNames::new("lǐ", "", ""));
        let planner = UpdatePlanner::new();

        assert_eq!(
            planner.plan(&contact, RunMode::Fill, false),
            UpdateDecision::SkipAlreadySet
        );
        assert_eq!(
            planner.plan(&contact, RunMode::Fill, true),
            UpdateDecision::Apply(PhoneticNames::new("lǐ", "", ""))
        );
    }

    #[test]
    fn already_set_wins_over_non_chinese_name() {
        let contact = ContactRecord::new("Smith", "", "John")
            .with_phonetic(PhoneticNames::new("", "", "jon"));
        let decision = UpdatePlanner::new().plan(&contact, RunMode::Fill, false);
        assert_eq!(decision, UpdateDecision::SkipAlreadySet);
    }

    #[test]
    fn clean_always_applies_empty_values() {
        let planner = UpdatePlanner::new();
        let bare = ContactRecord::new("Smith", "", "John");
        let filled =
            ContactRecord::new("张", "", "三").with_phonetic(PhoneticNames::new("zhāng", "", "sān"));

        for contact in [&bare, &filled] {
            assert_eq!(
                planner.plan(contact, RunMode::Clean, false),
                UpdateDecision::Apply(PhoneticNames::empty())
            );
        }
    }

    #[test]
    fn forced_fill_is_stable_across_runs() {
        let planner = UpdatePlanner::new();
        let contact = ContactRecord::new("单", "", "明");
        let first = planner.plan(&contact, RunMode::Fill, true);
        let second = planner.plan(&contact, RunMode::Fill, true);
        assert_eq!(first, second);
        assert!(matches!(first, UpdateDecision::Apply(_)));
    }

    #[test]
    fn one_chinese_field_is_enough_to_apply() {
        let contact = ContactRecord::new("Wong", "", "明");
        let decision = UpdatePlanner::new().plan(&contact, RunMode::Fill, false);
        assert_eq!(
            decision,
            UpdateDecision::Apply(PhoneticNames::new("Wong", "", "míng"))
        );
    }
}
