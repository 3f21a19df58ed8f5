//! Contact store contract and SQLite implementation.
//!
//! # Responsibility
//! - Define the address-book provider interface consumed by name services.
//! - Provide a SQLite-backed provider over the `contacts` table.
//!
//! # Invariants
//! - `request_access` resolves before returning; callers never race it.
//! - `list_contacts` returns a one-shot snapshot in insertion order.
//! - `write_update` touches only the three phonetic columns.

use crate::db::schema::CONTACT_COLUMNS;
use crate::db::DbError;
use crate::model::contact::{ContactId, ContactRecord, PhoneticUpdate};
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, DatabaseName, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static CONTACT_SELECT_SQL: Lazy<String> =
    Lazy::new(|| format!("SELECT {} FROM contacts", CONTACT_COLUMNS.join(", ")));

pub type RepoResult<T> = Result<T, RepoError>;

/// Contact store error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(ContactId),
    InvalidData(String),
    /// Provider-specific failure outside SQLite (e.g. a remote address book).
    Store(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted contact data: {message}"),
            Self::Store(message) => write!(f, "contact store error: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) | Self::Store(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Resolved authorization state of a contact store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    /// Access was already granted before this run.
    Authorized,
    /// Access was granted after asking during this run.
    Granted,
    Denied,
}

impl AccessStatus {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Authorized | Self::Granted)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }
}

/// Address-book provider interface.
pub trait ContactStore {
    /// Checks (and if needed asks for) access, blocking until resolved.
    fn request_access(&self) -> RepoResult<AccessStatus>;
    /// Returns every contact as an ordered snapshot.
    fn list_contacts(&self) -> RepoResult<Vec<ContactRecord>>;
    /// Persists the phonetic fields carried by `update`.
    fn write_update(&self, update: &PhoneticUpdate) -> RepoResult<()>;
}

impl<S: ContactStore + ?Sized> ContactStore for &S {
    fn request_access(&self) -> RepoResult<AccessStatus> {
        (**self).request_access()
    }

    fn list_contacts(&self) -> RepoResult<Vec<ContactRecord>> {
        (**self).list_contacts()
    }

    fn write_update(&self, update: &PhoneticUpdate) -> RepoResult<()> {
        (**self).write_update(update)
    }
}

/// SQLite-backed contact store.
pub struct SqliteContactStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Inserts a contact, including any phonetic fields it already carries.
    pub fn insert_contact(&self, contact: &ContactRecord) -> RepoResult<ContactId> {
        self.conn.execute(
            "INSERT INTO contacts (
                uuid,
                family_name,
                middle_name,
                given_name,
                phonetic_family_name,
                phonetic_middle_name,
                phonetic_given_name
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                contact.id.to_string(),
                contact.family_name.as_str(),
                contact.middle_name.as_str(),
                contact.given_name.as_str(),
                contact.phonetic_family_name.as_str(),
                contact.phonetic_middle_name.as_str(),
                contact.phonetic_given_name.as_str(),
            ],
        )?;

        Ok(contact.id)
    }

    pub fn get_contact(&self, id: ContactId) -> RepoResult<Option<ContactRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE uuid = ?1;", *CONTACT_SELECT_SQL))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_contact_row(row)?));
        }

        Ok(None)
    }
}

impl ContactStore for SqliteContactStore<'_> {
    fn request_access(&self) -> RepoResult<AccessStatus> {
        if self.conn.is_readonly(DatabaseName::Main)? {
            return Ok(AccessStatus::Denied);
        }
        Ok(AccessStatus::Authorized)
    }

    fn list_contacts(&self) -> RepoResult<Vec<ContactRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY rowid ASC;", *CONTACT_SELECT_SQL))?;
        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();

        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }

    fn write_update(&self, update: &PhoneticUpdate) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE contacts
             SET
                phonetic_family_name = ?1,
                phonetic_middle_name = ?2,
                phonetic_given_name = ?3,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?4;",
            params![
                update.phonetic.family.as_str(),
                update.phonetic.middle.as_str(),
                update.phonetic.given.as_str(),
                update.contact_id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(update.contact_id));
        }

        Ok(())
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<ContactRecord> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in contacts.uuid"))
    })?;

    Ok(ContactRecord {
        id,
        family_name: row.get("family_name")?,
        middle_name: row.get("middle_name")?,
        given_name: row.get("given_name")?,
        phonetic_family_name: row.get("phonetic_family_name")?,
        phonetic_middle_name: row.get("phonetic_middle_name")?,
        phonetic_given_name: row.get("phonetic_given_name")?,
    })
}
