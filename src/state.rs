use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::session::SessionGate;
use crate::storage::KeyValueStore;

/// Shared application state handed to every handler via `State<AppState<S>>`.
///
/// Both services hold the same store, so the session flag and the content
/// collection live side by side under different keys.
pub struct AppState<S> {
    pub content: ContentStore<S>,
    pub session: SessionGate<S>,
    pub config: Arc<SiteConfig>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            content: self.content.clone(),
            session: self.session.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: KeyValueStore> AppState<S> {
    pub fn new(store: Arc<S>, config: SiteConfig) -> Self {
        Self {
            content: ContentStore::new(Arc::clone(&store)),
            session: SessionGate::new(store, config.admin_secret.as_str()),
            config: Arc::new(config),
        }
    }
}
