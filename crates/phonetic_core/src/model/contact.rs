//! Contact name model.
//!
//! # Responsibility
//! - Carry the name and phonetic-name fields of one contact.
//! - Build phonetic update requests without touching the stored record.
//!
//! # Invariants
//! - Absent name fields are represented as empty strings, never `None`.
//! - `PhoneticUpdate` only carries the three phonetic fields plus the id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one contact in the address book.
pub type ContactId = Uuid;

/// Family/middle/given triple used for both source and phonetic names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticNames {
    pub family: String,
    pub middle: String,
    pub given: String,
}

impl PhoneticNames {
    pub fn new(
        family: impl Into<String>,
        middle: impl Into<String>,
        given: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            middle: middle.into(),
            given: given.into(),
        }
    }

    /// All three fields empty; the value written by a clean run.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.family.is_empty() && self.middle.is_empty() && self.given.is_empty()
    }

    /// Human-readable rendering: `<family><middle> <given>`, or `[empty]`.
    pub fn readable(&self) -> String {
        if self.is_empty() {
            return "[empty]".to_string();
        }
        format!("{}{} {}", self.family, self.middle, self.given)
    }
}

/// Read view of one address-book contact.
///
/// Owned by the contact store; name processing only reads it and emits
/// a separate [`PhoneticUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: ContactId,
    pub family_name: String,
    pub middle_name: String,
    pub given_name: String,
    pub phonetic_family_name: String,
    pub phonetic_middle_name: String,
    pub phonetic_given_name: String,
}

impl ContactRecord {
    /// Creates a contact with a generated id and no phonetic fields.
    pub fn new(
        family_name: impl Into<String>,
        middle_name: impl Into<String>,
        given_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            family_name: family_name.into(),
            middle_name: middle_name.into(),
            given_name: given_name.into(),
            phonetic_family_name: String::new(),
            phonetic_middle_name: String::new(),
            phonetic_given_name: String::new(),
        }
    }

    /// Returns a copy carrying the given phonetic fields.
    pub fn with_phonetic(mut self, phonetic: PhoneticNames) -> Self {
        self.phonetic_family_name = phonetic.family;
        self.phonetic_middle_name = phonetic.middle;
        self.phonetic_given_name = phonetic.given;
        self
    }

    /// Whether any phonetic field already holds a value.
    pub fn has_phonetic(&self) -> bool {
        !self.phonetic_family_name.is_empty()
            || !self.phonetic_middle_name.is_empty()
            || !self.phonetic_given_name.is_empty()
    }

    pub fn names(&self) -> PhoneticNames {
        PhoneticNames::new(
            self.family_name.as_str(),
            self.middle_name.as_str(),
            self.given_name.as_str(),
        )
    }

    pub fn phonetic(&self) -> PhoneticNames {
        PhoneticNames::new(
            self.phonetic_family_name.as_str(),
            self.phonetic_middle_name.as_str(),
            self.phonetic_given_name.as_str(),
        )
    }

    /// Concatenated `family + middle + given`, no separators.
    pub fn full_name(&self) -> String {
        format!("{}{}{}", self.family_name, self.middle_name, self.given_name)
    }
}

/// Write request for the phonetic fields of one contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticUpdate {
    pub contact_id: ContactId,
    pub phonetic: PhoneticNames,
}

impl PhoneticUpdate {
    pub fn new(contact_id: ContactId, phonetic: PhoneticNames) -> Self {
        Self {
            contact_id,
            phonetic,
        }
    }
}
