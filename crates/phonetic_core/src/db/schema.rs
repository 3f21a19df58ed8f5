//! `contacts` table creation and shape check.

use super::{DbError, DbResult};
use rusqlite::Connection;
use std::collections::HashSet;

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: u32 = 1;

/// Columns read for every contact, in select order.
pub const CONTACT_COLUMNS: &[&str] = &[
    "uuid",
    "family_name",
    "middle_name",
    "given_name",
    "phonetic_family_name",
    "phonetic_middle_name",
    "phonetic_given_name",
];

const CREATE_CONTACTS_SQL: &str = include_str!("contacts.sql");

/// Brings `conn` to a usable address book.
///
/// Writable connections get the table created on a fresh file; read-only
/// ones only accept a file that already carries the current schema.
pub(crate) fn ensure_schema(conn: &Connection, writable: bool) -> DbResult<()> {
    match schema_version(conn)? {
        0 if writable => create_contacts(conn)?,
        0 => return Err(DbError::Uninitialized),
        SCHEMA_VERSION => {}
        found => {
            return Err(DbError::SchemaTooNew {
                found,
                supported: SCHEMA_VERSION,
            })
        }
    }
    check_contact_columns(conn)
}

/// Reads `PRAGMA user_version`.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?)
}

fn create_contacts(conn: &Connection) -> DbResult<()> {
    // An existing foreign `contacts` table must not be stamped as ours.
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(CREATE_CONTACTS_SQL)?;
    check_contact_columns(&tx)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;
    Ok(())
}

fn check_contact_columns(conn: &Connection) -> DbResult<()> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('contacts');")?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<HashSet<_>, _>>()?;

    match CONTACT_COLUMNS
        .iter()
        .find(|column| !present.contains(**column))
    {
        Some(missing) => Err(DbError::MissingColumn(*missing)),
        None => Ok(()),
    }
}
