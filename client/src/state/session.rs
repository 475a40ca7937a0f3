//! Session store: the single owner of the current token and identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root creates one `SessionStore<BrowserStorage>`, wraps it in a
//! `RwSignal`, and provides it through context. Route guards and chrome read
//! it; only auth actions and logout buttons mutate it, and only through the
//! three operations below.
//!
//! PERSISTENCE
//! ===========
//! The token and the serialized identity live under `token` and `user`. They
//! are written as a pair: a failed second write rolls back the first. Once any
//! storage failure is seen the store switches to memory-only for the rest of
//! the process and stops trusting durable storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::net::types::Identity;
use crate::util::storage::{BrowserStorage, SessionStorage, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Session signal provided through context by the app root.
pub type AppSession = RwSignal<SessionStore<BrowserStorage>>;

/// A bearer token paired with the server-issued identity it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub identity: Identity,
}

/// Coarse authentication phase used for routing decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// Durable storage has not been read yet.
    Unknown,
    Unauthenticated,
    /// Authenticated with any non-admin role.
    Member,
    Admin,
}

/// In-memory session snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    initialized: bool,
    credentials: Option<Credentials>,
}

impl Session {
    fn signed_out() -> Self {
        Self { initialized: true, credentials: None }
    }

    fn signed_in(credentials: Credentials) -> Self {
        Self { initialized: true, credentials: Some(credentials) }
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.credentials.as_ref().map(|c| &c.identity)
    }

    /// True iff both a token and an identity are held.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn phase(&self) -> AuthPhase {
        match (&self.credentials, self.initialized) {
            (Some(c), _) if c.identity.is_admin() => AuthPhase::Admin,
            (Some(_), _) => AuthPhase::Member,
            (None, true) => AuthPhase::Unauthenticated,
            (None, false) => AuthPhase::Unknown,
        }
    }
}

/// Whether session changes still reach durable storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Persistence {
    #[default]
    Durable,
    MemoryOnly,
}

/// Owner of [`Session`], synchronized with a [`SessionStorage`] backend.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
    persistence: Persistence,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, session: Session::default(), persistence: Persistence::Durable }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    /// Rehydrate from durable storage.
    ///
    /// Safe to call repeatedly. Malformed or half-written entries are cleared
    /// and leave the session unauthenticated. When storage is unreachable the
    /// session is unauthenticated and the store goes memory-only; after that
    /// the in-memory session is authoritative and is left as is.
    pub fn initialize(&mut self) {
        if self.persistence == Persistence::MemoryOnly {
            self.session.initialized = true;
            return;
        }
        self.session = match self.read_persisted() {
            Ok(Some(credentials)) => Session::signed_in(credentials),
            Ok(None) => Session::signed_out(),
            Err(StorageError::Malformed(detail)) => {
                log::warn!("discarding persisted session: {detail}");
                self.clear_persisted();
                Session::signed_out()
            }
            Err(StorageError::Unavailable(detail)) => {
                log::warn!("session storage unavailable, keeping session in memory: {detail}");
                self.persistence = Persistence::MemoryOnly;
                Session::signed_out()
            }
        };
    }

    /// Record a successful sign-in in memory and, when possible, on disk.
    pub fn apply_login(&mut self, token: String, identity: Identity) {
        if self.persistence == Persistence::Durable {
            if let Err(e) = self.persist(&token, &identity) {
                log::warn!("session not persisted, keeping it in memory: {e}");
                self.persistence = Persistence::MemoryOnly;
            }
        }
        self.session = Session::signed_in(Credentials { token, identity });
    }

    /// Drop the session. Storage is always cleared, even when already signed out.
    pub fn logout(&mut self) {
        self.clear_persisted();
        self.session = Session::signed_out();
    }

    fn read_persisted(&self) -> Result<Option<Credentials>, StorageError> {
        let token = self.storage.get(TOKEN_KEY)?.filter(|t| !t.is_empty());
        let user = self.storage.get(USER_KEY)?;
        match (token, user) {
            (None, None) => Ok(None),
            (Some(token), Some(raw)) => {
                let identity = serde_json::from_str::<Identity>(&raw)
                    .map_err(|e| StorageError::Malformed(format!("user entry: {e}")))?;
                Ok(Some(Credentials { token, identity }))
            }
            (Some(_), None) => Err(StorageError::Malformed("token without user entry".to_owned())),
            (None, Some(_)) => Err(StorageError::Malformed("user entry without token".to_owned())),
        }
    }

    fn persist(&self, token: &str, identity: &Identity) -> Result<(), StorageError> {
        let raw = serde_json::to_string(identity).map_err(|e| StorageError::Malformed(e.to_string()))?;
        self.storage.set(TOKEN_KEY, token)?;
        if let Err(e) = self.storage.set(USER_KEY, &raw) {
            self.clear_persisted();
            return Err(e);
        }
        Ok(())
    }

    fn clear_persisted(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::debug!("could not remove {key}: {e}");
            }
        }
    }
}

/// Write side of the session as seen by auth actions.
pub trait SessionSink {
    fn apply_login(&self, token: String, identity: Identity);
}

impl<S> SessionSink for RwSignal<SessionStore<S>>
where
    S: SessionStorage + Send + Sync + 'static,
{
    fn apply_login(&self, token: String, identity: Identity) {
        self.update(|store| store.apply_login(token, identity));
    }
}

impl<S: SessionStorage> SessionSink for RefCell<SessionStore<S>> {
    fn apply_login(&self, token: String, identity: Identity) {
        self.borrow_mut().apply_login(token, identity);
    }
}
