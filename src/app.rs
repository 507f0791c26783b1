// src/app.rs

use crate::config::{AppConfig, ConfigError};
use crate::domain::{PropertyStore, Session};
use crate::errors::ServerError;
use std::sync::Mutex;

/// Everything a request handler needs: config, the listing store and the
/// browsing session.
///
/// The catalog keeps one session per process. Workers serialize on its lock, so
/// events are applied one at a time in arrival order.
pub struct App {
    pub config: AppConfig,
    pub store: PropertyStore,
    session: Mutex<Session>,
}

impl App {
    pub fn new(config: AppConfig, store: PropertyStore) -> Self {
        let session = Session::new(config.filter);
        Self {
            config,
            store,
            session: Mutex::new(session),
        }
    }

    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let store = config.load_store()?;
        Ok(Self::new(config, store))
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with_session<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Session, &PropertyStore) -> Result<T, ServerError>,
    {
        let mut session = self.session.lock().map_err(|_| {
            tracing::error!("session lock poisoned");
            ServerError::InternalError
        })?;
        f(&mut session, &self.store)
    }
}
