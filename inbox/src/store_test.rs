use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get("anything"), None);
    assert_eq!(store.writes(), 0);
}

#[test]
fn memory_store_set_overwrites_and_counts() {
    let mut store = MemoryStore::new();
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("two"));
    assert_eq!(store.writes(), 2);
}

#[test]
fn memory_store_seeded_entry_is_not_a_write() {
    let store = MemoryStore::with_entry("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert_eq!(store.writes(), 0);
}

#[test]
fn store_error_display() {
    let err = StoreError::Write { key: "portfolioMessages".into(), reason: "QuotaExceededError".into() };
    assert_eq!(err.to_string(), "failed to write portfolioMessages: QuotaExceededError");
    assert_eq!(StoreError::Unavailable.to_string(), "storage is unavailable");
}
