use phonetic_core::db::{open_db, open_db_in_memory, open_db_read_only};
use phonetic_core::{
    AccessStatus, ContactRecord, ContactStore, PhoneticNames, PhoneticUpdate, RepoError,
    SqliteContactStore,
};

#[test]
fn list_returns_contacts_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContactStore::new(&conn);

    let first = ContactRecord::new("张", "", "三");
    let second = ContactRecord::new("Smith", "", "John");
    let third = ContactRecord::new("李", "", "四").with_phonetic(PhoneticNames::new("lǐ", "", "sì"));
    for contact in [&first, &second, &third] {
        store.insert_contact(contact).unwrap();
    }

    let listed = store.list_contacts().unwrap();
    assert_eq!(listed, vec![first, second, third]);
}

#[test]
fn write_update_changes_only_phonetic_fields() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContactStore::new(&conn);

    let contact = ContactRecord::new("曾", "", "华");
    store.insert_contact(&contact).unwrap();
    store
        .write_update(&PhoneticUpdate::new(
            contact.id,
            PhoneticNames::new("zēng", "", "huá"),
        ))
        .unwrap();

    let loaded = store.get_contact(contact.id).unwrap().unwrap();
    assert_eq!(loaded.family_name, "曾");
    assert_eq!(loaded.given_name, "华");
    assert_eq!(loaded.phonetic(), PhoneticNames::new("zēng", "", "huá"));
}

#[test]
fn write_update_for_unknown_contact_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContactStore::new(&conn);

    let missing = ContactRecord::new("王", "", "五");
    let err = store
        .write_update(&PhoneticUpdate::new(missing.id, PhoneticNames::empty()))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing.id));
}

#[test]
fn get_contact_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContactStore::new(&conn);

    let missing = ContactRecord::new("王", "", "五");
    assert!(store.get_contact(missing.id).unwrap().is_none());
}

#[test]
fn writable_store_is_authorized() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContactStore::new(&conn);

    assert_eq!(store.request_access().unwrap(), AccessStatus::Authorized);
}

#[test]
fn read_only_store_is_denied_but_still_listable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.db");
    let contact = ContactRecord::new("张", "", "三");
    {
        let conn = open_db(&path).unwrap();
        SqliteContactStore::new(&conn)
            .insert_contact(&contact)
            .unwrap();
    }

    let conn = open_db_read_only(&path).unwrap();
    let store = SqliteContactStore::new(&conn);
    let access = store.request_access().unwrap();
    assert_eq!(access, AccessStatus::Denied);
    assert!(!access.is_allowed());
    assert_eq!(store.list_contacts().unwrap(), vec![contact]);
}
