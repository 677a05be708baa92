//! Integration tests for the session store over real storage backends.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use univista_protocol::{Notice, Role, Route};
use univista_session::{MockAuthBackend, SessionStore};
use univista_storage::{
    FileStorage, MemoryStorage, Storage, StorageError, keys,
};

// =========================================================================
// Storage that fails writes to one key on demand
// =========================================================================

#[derive(Clone)]
struct FailingStorage {
    inner: MemoryStorage,
    fail_key: &'static str,
    failing: Arc<AtomicBool>,
}

impl FailingStorage {
    fn failing_on(fail_key: &'static str) -> Self {
        Self {
            inner: MemoryStorage::new(),
            fail_key,
            failing: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl Storage for FailingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.fail_key && self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Io {
                path: "memory".into(),
                source: std::io::Error::other("disk full"),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

// =========================================================================
// Restore across restarts
// =========================================================================

#[tokio::test]
async fn test_login_then_restart_restores_session_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal.json");

    let before = {
        let storage = FileStorage::open(&path).unwrap();
        let mut store = SessionStore::open(MockAuthBackend::new(), storage);
        store.login("jane@example.com", "x", Role::Professor).await;
        store.session()
    };

    // A fresh process: new storage handle, new backend, no login call.
    let storage = FileStorage::open(&path).unwrap();
    let store = SessionStore::open(MockAuthBackend::new(), storage);

    let after = store.session();
    assert!(after.is_authenticated());
    assert_eq!(after.identity(), before.identity());
    assert_eq!(after.token(), before.token());
}

#[tokio::test]
async fn test_logout_then_restart_stays_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal.json");

    {
        let storage = FileStorage::open(&path).unwrap();
        let mut store = SessionStore::open(MockAuthBackend::new(), storage);
        store.login("sam@uni.edu", "pw", Role::Student).await;
        store.logout();
    }

    let storage = FileStorage::open(&path).unwrap();
    assert_eq!(storage.get(keys::TOKEN).unwrap(), None);
    assert_eq!(storage.get(keys::USER).unwrap(), None);

    let store = SessionStore::open(MockAuthBackend::new(), storage);
    assert!(!store.is_authenticated());
}

// =========================================================================
// No partial state
// =========================================================================

#[tokio::test]
async fn test_login_user_write_fails_rolls_back_token() {
    let storage = FailingStorage::failing_on(keys::USER);
    let mut store =
        SessionStore::open(MockAuthBackend::new(), storage.clone());

    let outcome = store.login("a@x", "p", Role::Student).await;

    assert!(matches!(
        outcome.notice,
        Notice::LoginFailed { ref reason } if reason.contains("disk full")
    ));
    assert_eq!(outcome.redirect, None);
    assert!(!store.is_authenticated());
    assert_eq!(storage.get(keys::TOKEN).unwrap(), None);
    assert_eq!(storage.get(keys::USER).unwrap(), None);
}

#[tokio::test]
async fn test_relogin_user_write_fails_keeps_previous_session() {
    let storage = FailingStorage::failing_on(keys::USER);
    storage.failing.store(false, Ordering::SeqCst);
    let mut store =
        SessionStore::open(MockAuthBackend::new(), storage.clone());

    store.login("first@x", "p", Role::Student).await;
    let before = store.session();
    let saved_token = storage.get(keys::TOKEN).unwrap();

    storage.failing.store(true, Ordering::SeqCst);
    let outcome = store.login("second@x", "p", Role::Professor).await;

    assert!(matches!(outcome.notice, Notice::LoginFailed { .. }));
    assert_eq!(store.session(), before);
    assert_eq!(storage.get(keys::TOKEN).unwrap(), saved_token);
}

#[tokio::test]
async fn test_login_token_write_fails_leaves_storage_empty() {
    let storage = FailingStorage::failing_on(keys::TOKEN);
    let mut store =
        SessionStore::open(MockAuthBackend::new(), storage.clone());

    let outcome = store.login("a@x", "p", Role::Student).await;

    assert!(matches!(outcome.notice, Notice::LoginFailed { .. }));
    assert!(storage.inner.is_empty().unwrap());
}

// =========================================================================
// Full cycle
// =========================================================================

#[tokio::test]
async fn test_register_login_logout_cycle() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(MockAuthBackend::new(), storage.clone());
    let mut rx = store.subscribe();

    let registered = store
        .register("Sam Lee", "sam@uni.edu", "pw", Role::Student)
        .await;
    assert_eq!(registered.redirect, Some(Route::Login));
    assert!(!rx.has_changed().unwrap());

    let logged_in = store.login("sam@uni.edu", "pw", Role::Student).await;
    assert_eq!(logged_in.redirect, Some(Route::dashboard(Role::Student)));
    assert!(rx.borrow_and_update().is_authenticated());

    let logged_out = store.logout();
    assert_eq!(logged_out.redirect, Some(Route::Landing));
    assert!(!rx.borrow_and_update().is_authenticated());
    assert!(storage.is_empty().unwrap());
}
