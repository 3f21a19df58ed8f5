use phonetic_core::{ContactRecord, PhoneticNames, PhoneticUpdate};
use uuid::Uuid;

#[test]
fn new_contact_has_no_phonetic_fields() {
    let contact = ContactRecord::new("曾", "", "华");

    assert!(!contact.id.is_nil());
    assert!(!contact.has_phonetic());
    assert_eq!(contact.full_name(), "曾华");
    assert!(contact.phonetic().is_empty());
}

#[test]
fn any_non_empty_phonetic_field_counts_as_set() {
    let contact = ContactRecord::new("李", "", "").with_phonetic(PhoneticNames::new("", "x", ""));
    assert!(contact.has_phonetic());
}

#[test]
fn readable_phonetic_marks_empty_values() {
    assert_eq!(PhoneticNames::empty().readable(), "[empty]");
    assert_eq!(
        PhoneticNames::new("zēng", "", "huá").readable(),
        "zēng huá"
    );
}

#[test]
fn update_request_serializes_only_id_and_phonetic_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let update = PhoneticUpdate::new(id, PhoneticNames::new("zhāng", "", "sān"));

    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json["contact_id"], id.to_string());
    assert_eq!(json["phonetic"]["family"], "zhāng");
    assert_eq!(json["phonetic"]["middle"], "");
    assert_eq!(json["phonetic"]["given"], "sān");
    assert_eq!(json.as_object().unwrap().len(), 2);

    let decoded: PhoneticUpdate = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, update);
}
