use super::*;

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn is_well_formed(id: &VisitorId) -> bool {
    let Some(suffix) = id.as_str().strip_prefix(VISITOR_PREFIX) else {
        return false;
    };
    suffix.len() == VISITOR_SUFFIX_LEN && suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
}

// =============================================================
// Generation
// =============================================================

#[test]
fn generated_id_has_prefix_and_nine_base36_digits() {
    for _ in 0..50 {
        let id = VisitorId::generate();
        assert!(is_well_formed(&id), "malformed id: {}", id.as_str());
    }
}

#[test]
fn base36_suffix_is_zero_padded() {
    assert_eq!(base36_suffix(0), "000000000");
    assert_eq!(base36_suffix(35), "00000000z");
    assert_eq!(base36_suffix(36), "000000010");
}

#[test]
fn base36_suffix_keeps_only_low_digits() {
    let nine_digits = 36_u128.pow(9);
    assert_eq!(base36_suffix(nine_digits + 1), "000000001");
}

#[test]
fn from_seed_prefixes_user() {
    assert_eq!(VisitorId::from_seed(1).as_str(), "user_000000001");
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn existing_id_is_returned_unchanged() {
    let store = MemoryStore::default();
    store.set("bot_user_id", "user_abc123xyz").unwrap();

    for _ in 0..3 {
        assert_eq!(visitor_id_or_create(&store, "bot_user_id").as_str(), "user_abc123xyz");
    }
}

#[test]
fn fresh_store_gets_a_new_persisted_id() {
    let store = MemoryStore::default();
    let first = visitor_id_or_create(&store, "bot_user_id");
    assert!(is_well_formed(&first));
    assert_eq!(store.get("bot_user_id").as_deref(), Some(first.as_str()));

    let second = visitor_id_or_create(&store, "bot_user_id");
    assert_eq!(first, second);
}

#[test]
fn blank_stored_value_is_replaced() {
    let store = MemoryStore::default();
    store.set("bot_user_id", "  ").unwrap();
    let id = visitor_id_or_create(&store, "bot_user_id");
    assert!(is_well_formed(&id));
}

#[test]
fn unavailable_storage_degrades_to_ephemeral_id() {
    let a = visitor_id_or_create(&ReadOnlyStore, "bot_user_id");
    let b = visitor_id_or_create(&ReadOnlyStore, "bot_user_id");
    assert!(is_well_formed(&a));
    assert!(is_well_formed(&b));
    assert_ne!(a, b);
}
