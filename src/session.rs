//! Admin session gate.
//!
//! A single shared secret flips one process-wide flag in the key-value store.
//! It is a placeholder gate, not a security boundary.

use std::sync::Arc;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

pub const SESSION_KEY: &str = "folio.session";
const AUTHENTICATED: &str = "true";

pub struct SessionGate<S> {
    store: Arc<S>,
    secret: Arc<str>,
}

impl<S> Clone for SessionGate<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            secret: Arc::clone(&self.secret),
        }
    }
}

impl<S: KeyValueStore> SessionGate<S> {
    pub fn new(store: Arc<S>, secret: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            secret: secret.into(),
        }
    }

    /// True only when the stored flag holds the sentinel. Read failures count as signed out.
    pub async fn is_authenticated(&self) -> bool {
        match self.store.get(SESSION_KEY).await {
            Ok(flag) => flag.as_deref() == Some(AUTHENTICATED),
            Err(err) => {
                tracing::error!(error = %err, "failed to read session flag");
                false
            }
        }
    }

    /// Sets the flag when `secret` matches. A mismatch changes nothing.
    pub async fn login(&self, secret: &str) -> Result<bool, StorageError> {
        if secret != &*self.secret {
            tracing::warn!("rejected admin login");
            return Ok(false);
        }
        self.store.set(SESSION_KEY, AUTHENTICATED).await?;
        tracing::info!("admin signed in");
        Ok(true)
    }

    pub async fn logout(&self) -> Result<(), StorageError> {
        self.store.remove(SESSION_KEY).await?;
        tracing::info!("admin signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn gate() -> (Arc<MemoryStore>, SessionGate<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        (kv.clone(), SessionGate::new(kv, "admin"))
    }

    #[tokio::test]
    async fn anonymous_by_default() {
        let (_, gate) = gate();
        assert!(!gate.is_authenticated().await);
    }

    #[tokio::test]
    async fn correct_secret_signs_in() {
        let (_, gate) = gate();
        assert!(gate.login("admin").await.unwrap());
        assert!(gate.is_authenticated().await);
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected_without_side_effects() {
        let (kv, gate) = gate();
        assert!(!gate.login("wrong").await.unwrap());
        assert!(!gate.is_authenticated().await);
        assert_eq!(kv.get(SESSION_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn wrong_secret_does_not_sign_out_an_active_session() {
        let (_, gate) = gate();
        gate.login("admin").await.unwrap();
        assert!(!gate.login("wrong").await.unwrap());
        assert!(gate.is_authenticated().await);
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let (_, gate) = gate();
        gate.login("admin").await.unwrap();
        gate.logout().await.unwrap();
        assert!(!gate.is_authenticated().await);

        gate.logout().await.unwrap();
        assert!(!gate.is_authenticated().await);
    }

    #[tokio::test]
    async fn only_the_sentinel_counts() {
        let (kv, gate) = gate();
        kv.set(SESSION_KEY, "yes").await.unwrap();
        assert!(!gate.is_authenticated().await);
    }

    #[tokio::test]
    async fn configured_secret_replaces_the_default() {
        let kv = Arc::new(MemoryStore::new());
        let gate = SessionGate::new(kv, String::from("s3cret"));
        assert!(!gate.login("admin").await.unwrap());
        assert!(gate.login("s3cret").await.unwrap());
    }
}
