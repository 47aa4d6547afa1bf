//! Session context
//!
//! One active participant at a time, persisted under three string keys.
//! Lifecycle: [`SessionContext::load`] at startup, [`SessionContext::login`]
//! after registration, [`SessionContext::logout`] to tear down.

use std::collections::HashMap;

use crate::error::Result;
use crate::types::Participant;

pub const KEY_PARTICIPANT_ID: &str = "participantId";
pub const KEY_PARTICIPANT_NAME: &str = "participantName";
pub const KEY_PARTICIPANT_EMAIL: &str = "participantEmail";

/// Every key the session owns. Logout removes exactly these.
pub const SESSION_KEYS: [&str; 3] = [KEY_PARTICIPANT_ID, KEY_PARTICIPANT_NAME, KEY_PARTICIPANT_EMAIL];

/// Key-value persistence behind the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store (tests, or when nothing should outlive the process).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// The participant the client currently acts as.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveParticipant {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&Participant> for ActiveParticipant {
    fn from(p: &Participant) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            email: p.email.clone(),
        }
    }
}

/// Session state plus the store it is persisted in.
#[derive(Debug)]
pub struct SessionContext<S> {
    store: S,
    active: Option<ActiveParticipant>,
}

impl<S: SessionStore> SessionContext<S> {
    /// Read persisted keys. A stored id is enough to count as logged in;
    /// missing name/email become empty strings.
    pub fn load(store: S) -> Self {
        let active = store
            .get(KEY_PARTICIPANT_ID)
            .filter(|id| !id.is_empty())
            .map(|id| ActiveParticipant {
                id,
                name: store.get(KEY_PARTICIPANT_NAME).unwrap_or_default(),
                email: store.get(KEY_PARTICIPANT_EMAIL).unwrap_or_default(),
            });
        Self { store, active }
    }

    /// Persist `participant` as the active one, replacing any previous.
    pub fn login(&mut self, participant: &Participant) -> Result<()> {
        let active = ActiveParticipant::from(participant);
        self.store.set(KEY_PARTICIPANT_ID, &active.id)?;
        self.store.set(KEY_PARTICIPANT_NAME, &active.name)?;
        self.store.set(KEY_PARTICIPANT_EMAIL, &active.email)?;
        self.active = Some(active);
        Ok(())
    }

    /// Remove every session key. Keys not owned by the session stay.
    pub fn logout(&mut self) -> Result<()> {
        self.active = None;
        for key in SESSION_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> SessionContext<S> {
    pub fn active(&self) -> Option<&ActiveParticipant> {
        self.active.as_ref()
    }

    pub fn participant_id(&self) -> Option<&str> {
        self.active.as_ref().map(|p| p.id.as_str())
    }

    pub fn is_logged_in(&self) -> bool {
        self.active.is_some()
    }
}
