//! Session store
//!
//! Owns the signed-in identity. Login checks a fixed table of demo
//! accounts; signup accepts anyone. Every successful change is written
//! through to the session slot, and `restore` is the only path that reads it
//! back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use chrono::Utc;

use crate::error::{FinbuddyError, FinbuddyResult};
use crate::models::Session;
use crate::storage::SessionSlot;

/// A built-in account accepted by `login`
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub id: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
}

pub const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        id: "1",
        email: "demo@finbuddy.com",
        password: "demo123",
        name: "Demo User",
    },
    DemoAccount {
        id: "2",
        email: "user@example.com",
        password: "password",
        name: "John Doe",
    },
];

/// Clears the loading flag when dropped, so every exit path resets it
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct SessionStore {
    slot: Box<dyn SessionSlot>,
    current: RwLock<Option<Session>>,
    loading: AtomicBool,
    auth_delay: Duration,
}

impl SessionStore {
    /// Create a store over `slot`; login and signup wait `auth_delay`
    pub fn new(slot: Box<dyn SessionSlot>, auth_delay: Duration) -> Self {
        Self {
            slot,
            current: RwLock::new(None),
            loading: AtomicBool::new(false),
            auth_delay,
        }
    }

    /// Sign in with one of the demo accounts.
    ///
    /// On a mismatch nothing changes, in memory or in the slot.
    pub async fn login(&self, email: &str, password: &str) -> FinbuddyResult<Session> {
        let _loading = LoadingGuard::start(&self.loading);
        tokio::time::sleep(self.auth_delay).await;

        let account = DEMO_ACCOUNTS
            .iter()
            .find(|a| a.email == email && a.password == password)
            .ok_or_else(|| {
                tracing::info!(email, "Login rejected");
                FinbuddyError::InvalidCredentials
            })?;

        let session = Session::new(account.id, account.email, account.name);
        self.establish(session.clone())?;

        tracing::info!(email, "Logged in");
        Ok(session)
    }

    /// Create an account and sign in with it. The password is not checked
    /// or stored.
    pub async fn signup(&self, name: &str, email: &str, _password: &str) -> FinbuddyResult<Session> {
        let _loading = LoadingGuard::start(&self.loading);
        tokio::time::sleep(self.auth_delay).await;

        let id = Utc::now().timestamp_millis().to_string();
        let session = Session::new(id, email, name);
        self.establish(session.clone())?;

        tracing::info!(email, "Signed up");
        Ok(session)
    }

    /// Forget the session in memory and in the slot. Safe to repeat.
    pub fn logout(&self) -> FinbuddyResult<()> {
        self.set_current(None)?;
        self.slot.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Load the persisted session, if any.
    ///
    /// A stored value that cannot be read or parsed is discarded and the slot
    /// cleared.
    pub fn restore(&self) -> Option<Session> {
        let raw = match self.slot.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable stored session");
                self.discard_stored();
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                if let Err(e) = self.set_current(Some(session.clone())) {
                    tracing::warn!(error = %e, "Failed to restore session");
                    return None;
                }
                tracing::debug!(email = %session.email, "Restored session");
                Some(session)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed stored session");
                self.discard_stored();
                None
            }
        }
    }

    fn discard_stored(&self) {
        if let Err(e) = self.slot.clear() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
    }

    /// The live session, if signed in
    pub fn current(&self) -> Option<Session> {
        self.current.read().ok().and_then(|s| s.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// True while a login or signup is in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    fn establish(&self, session: Session) -> FinbuddyResult<()> {
        let raw = serde_json::to_string(&session)?;
        self.slot.store(&raw)?;
        self.set_current(Some(session))
    }

    fn set_current(&self, session: Option<Session>) -> FinbuddyResult<()> {
        let mut current = self
            .current
            .write()
            .map_err(|e| FinbuddyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *current = session;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileSlot, MemorySlot};
    use tempfile::TempDir;

    const DELAY: Duration = Duration::from_millis(1000);

    fn store_with(slot: &MemorySlot) -> SessionStore {
        SessionStore::new(Box::new(slot.clone()), DELAY)
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_with_demo_account() {
        let slot = MemorySlot::new();
        let store = store_with(&slot);

        let session = store.login("demo@finbuddy.com", "demo123").await.unwrap();

        assert_eq!(session.id, "1");
        assert_eq!(session.name, "Demo User");
        assert_eq!(
            session.avatar_url.as_deref(),
            Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Demo%20User")
        );
        assert_eq!(store.current(), Some(session));
        assert!(slot.load().unwrap().is_some());
        assert!(!store.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_login_leaves_state_unchanged() {
        let slot = MemorySlot::new();
        let store = store_with(&slot);
        let existing = store.login("user@example.com", "password").await.unwrap();
        let stored = slot.load().unwrap();

        let err = store.login("demo@finbuddy.com", "wrong").await.unwrap_err();

        assert!(matches!(err, FinbuddyError::InvalidCredentials));
        assert_eq!(store.current(), Some(existing));
        assert_eq!(slot.load().unwrap(), stored);
        assert!(!store.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_login_when_signed_out() {
        let slot = MemorySlot::new();
        let store = store_with(&slot);

        assert!(store.login("nobody@example.com", "x").await.is_err());
        assert!(store.current().is_none());
        assert!(slot.load().unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_flag_during_login() {
        let store = store_with(&MemorySlot::new());

        let (result, loading_midway) = tokio::join!(
            store.login("demo@finbuddy.com", "demo123"),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                store.is_loading()
            }
        );

        assert!(result.is_ok());
        assert!(loading_midway);
        assert!(!store.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_auth_delay() {
        let store = store_with(&MemorySlot::new());
        let start = tokio::time::Instant::now();

        store.login("demo@finbuddy.com", "demo123").await.unwrap();

        assert!(start.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_signup_always_succeeds() {
        let slot = MemorySlot::new();
        let store = store_with(&slot);

        let session = store
            .signup("Asha Rao", "asha@example.com", "anything")
            .await
            .unwrap();

        assert_eq!(session.name, "Asha Rao");
        assert_eq!(session.email, "asha@example.com");
        assert!(session.id.parse::<i64>().is_ok());
        assert!(session.avatar_url.unwrap().ends_with("seed=Asha%20Rao"));
        assert!(slot.load().unwrap().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_is_idempotent() {
        let slot = MemorySlot::new();
        let store = store_with(&slot);
        store.login("demo@finbuddy.com", "demo123").await.unwrap();

        store.logout().unwrap();
        assert!(store.current().is_none());
        assert!(slot.load().unwrap().is_none());

        store.logout().unwrap();
        assert!(!store.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_after_login() {
        let slot = MemorySlot::new();
        let first = store_with(&slot);
        let session = first.login("demo@finbuddy.com", "demo123").await.unwrap();

        let second = store_with(&slot);
        assert!(second.current().is_none());
        assert_eq!(second.restore(), Some(session.clone()));
        assert_eq!(second.current(), Some(session));
    }

    #[test]
    fn test_restore_empty_slot() {
        let store = store_with(&MemorySlot::new());
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_restore_malformed_clears_slot() {
        let slot = MemorySlot::with_value("{ this is not a session");
        let store = store_with(&slot);

        assert!(store.restore().is_none());
        assert!(slot.load().unwrap().is_none());
    }

    #[test]
    fn test_restore_accepts_missing_avatar() {
        let slot = MemorySlot::with_value(r#"{"id":"7","email":"a@b.c","name":"A"}"#);
        let store = store_with(&slot);

        let session = store.restore().unwrap();
        assert_eq!(session.id, "7");
        assert!(session.avatar_url.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_file_slot_survives_new_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");

        let first = SessionStore::new(Box::new(FileSlot::new(path.clone())), DELAY);
        first.login("user@example.com", "password").await.unwrap();

        let second = SessionStore::new(Box::new(FileSlot::new(path.clone())), DELAY);
        let restored = second.restore().unwrap();
        assert_eq!(restored.name, "John Doe");

        second.logout().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_session_file_is_discarded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        std::fs::write(&path, "garbage").unwrap();

        let store = SessionStore::new(Box::new(FileSlot::new(path.clone())), DELAY);
        assert!(store.restore().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_non_utf8_session_file_is_discarded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        std::fs::write(&path, [0xff, 0xfe, 0x7b]).unwrap();

        let store = SessionStore::new(Box::new(FileSlot::new(path.clone())), DELAY);
        assert!(store.restore().is_none());
        assert!(!path.exists());
        assert!(store.restore().is_none());
    }
}
