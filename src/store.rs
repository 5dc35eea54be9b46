//! Durable user store.
//!
//! The store is a string key-value surface with two well-known keys:
//! `gm_users` holds the JSON-encoded list of registered users and
//! `gm_current` holds the signed-in user's email (absent when signed out).
//! `UserStore` is the injectable trait the session layer works against;
//! `SledStore` persists to an embedded sled database and `MemoryStore`
//! backs tests and ephemeral runs.

use crate::models::UserRecord;
use std::collections::HashMap;

/// Key holding the JSON-encoded sequence of user records.
pub const USERS_KEY: &str = "gm_users";

/// Key holding the signed-in user's email; removed on logout.
pub const CURRENT_KEY: &str = "gm_current";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone)]
pub enum StoreError {
    /// The backing store rejected a write.
    Backend(String),
    /// A value could not be encoded for storage.
    Serialize(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Backend(msg) => write!(f, "Store write failed: {}", msg),
            StoreError::Serialize(msg) => write!(f, "Could not encode value: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// ============================================================================
// Store Trait
// ============================================================================

/// String-keyed persistence with the three operations the session layer
/// needs. Reads are infallible; a missing key is simply `None`.
pub trait UserStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

// ============================================================================
// Backends
// ============================================================================

/// Volatile backend for tests and ephemeral runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Sled-backed store using the default tree. Writes flush immediately so
/// state survives an abrupt shutdown; the layout expects synchronous
/// durability.
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    pub fn new(db: sled::Db) -> Self {
        SledStore { db }
    }
}

impl UserStore for SledStore {
    fn get(&self, key: &str) -> Option<String> {
        self.db
            .get(key)
            .ok()
            .flatten()
            .and_then(|raw| String::from_utf8(raw.to_vec()).ok())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.db
            .insert(key, value.as_bytes())
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.db
            .remove(key)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }
}

// ============================================================================
// Layout Helpers
// ============================================================================

/// Decode the registered users. Missing or malformed data falls back to an
/// empty list rather than failing the page.
pub fn load_users(store: &dyn UserStore) -> Vec<UserRecord> {
    store
        .get(USERS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_users(store: &mut dyn UserStore, users: &[UserRecord]) -> Result<(), StoreError> {
    let json = serde_json::to_string(users).map_err(|e| StoreError::Serialize(e.to_string()))?;
    store.set(USERS_KEY, &json)
}

/// The session pointer, if any.
pub fn current_email(store: &dyn UserStore) -> Option<String> {
    store.get(CURRENT_KEY)
}

pub fn set_current_email(store: &mut dyn UserStore, email: &str) -> Result<(), StoreError> {
    store.set(CURRENT_KEY, email)
}

pub fn clear_current_email(store: &mut dyn UserStore) -> Result<(), StoreError> {
    store.remove(CURRENT_KEY)
}

pub fn find_user(store: &dyn UserStore, email: &str) -> Option<UserRecord> {
    load_users(store).into_iter().find(|u| u.email == email)
}

/// Insert or update a record, keyed by email. Existing records are replaced
/// in place so no two records ever share an email.
pub fn upsert_user(store: &mut dyn UserStore, record: UserRecord) -> Result<(), StoreError> {
    let mut users = load_users(store);
    match users.iter_mut().find(|u| u.email == record.email) {
        Some(slot) => *slot = record,
        None => users.push(record),
    }
    save_users(store, &users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
        // Removing a missing key is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn load_users_empty_when_key_missing() {
        let store = MemoryStore::new();
        assert!(load_users(&store).is_empty());
    }

    #[test]
    fn load_users_falls_back_on_malformed_json() {
        let mut store = MemoryStore::new();
        store.set(USERS_KEY, "{definitely not json").unwrap();
        assert!(load_users(&store).is_empty());
    }

    #[test]
    fn save_and_load_users_preserves_records() {
        let mut store = MemoryStore::new();
        let mut ada = UserRecord::new("a@x.com", "Ada");
        ada.role = Some("mentor".to_string());
        ada.interests = vec!["compilers".to_string()];
        save_users(&mut store, &[ada.clone()]).unwrap();

        let loaded = load_users(&store);
        assert_eq!(loaded, vec![ada]);
    }

    #[test]
    fn upsert_replaces_by_email() {
        let mut store = MemoryStore::new();
        upsert_user(&mut store, UserRecord::new("a@x.com", "Ada")).unwrap();
        upsert_user(&mut store, UserRecord::new("b@x.com", "Bob")).unwrap();

        let mut renamed = UserRecord::new("a@x.com", "Ada Lovelace");
        renamed.stream = Some("CS".to_string());
        upsert_user(&mut store, renamed.clone()).unwrap();

        let users = load_users(&store);
        assert_eq!(users.len(), 2);
        assert_eq!(find_user(&store, "a@x.com"), Some(renamed));
    }

    #[test]
    fn current_email_set_and_clear() {
        let mut store = MemoryStore::new();
        assert_eq!(current_email(&store), None);

        set_current_email(&mut store, "a@x.com").unwrap();
        assert_eq!(current_email(&store).as_deref(), Some("a@x.com"));

        clear_current_email(&mut store).unwrap();
        assert_eq!(current_email(&store), None);
    }
}
