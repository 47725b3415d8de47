//! The session store: single source of truth for "who is logged in and as
//! what", reconciled from the persisted bearer token plus a locally persisted
//! overlay, with replay-latest publication to subscribers.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::storage::SessionStorage;
use crate::tprintln;

use super::claims::decode_user;
use super::user::{LocalUser, UserPatch};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "ems_token";
/// Storage key holding the JSON-serialized overlay.
pub const USER_KEY: &str = "ems_user";

pub type SubscriberId = u64;

type Subscriber = Box<dyn Fn(Option<&LocalUser>) + Send + Sync>;

/// Owns the persisted session entries and the in-memory identity derived from
/// them. Identity is always a pure function of (token, overlay): recomputing
/// from the two persisted values reproduces the published state.
///
/// Single writer per instance; mutations are synchronous (storage write,
/// decode, publish all complete before the call returns).
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    current: RwLock<Option<LocalUser>>,
    subscribers: Mutex<Vec<(SubscriberId, Subscriber)>>,
    next_subscriber: Mutex<SubscriberId>,
}

impl SessionStore {
    /// Build a store over `storage`, reconstructing any persisted identity:
    /// decode the stored token and merge the stored overlay on top.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let current = storage
            .get(TOKEN_KEY)
            .and_then(|token| decode_user(&token))
            .map(|decoded| decoded.merged_with(&stored_overlay(storage.as_ref())));
        Self {
            storage,
            current: RwLock::new(current),
            subscribers: Mutex::new(Vec::new()),
            next_subscriber: Mutex::new(0),
        }
    }

    /// The raw bearer token. Always re-reads storage rather than caching, so
    /// the answer reflects storage state at call time.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// The most recently published identity, if any.
    pub fn user(&self) -> Option<LocalUser> {
        self.current.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some() && self.current.read().is_some()
    }

    pub fn profile_complete(&self) -> bool {
        self.current
            .read()
            .as_ref()
            .and_then(|u| u.profile_complete)
            .unwrap_or(false)
    }

    /// Persist `token` and republish the identity decoded from it, with any
    /// existing overlay merged on top. A token that fails to decode is kept in
    /// storage but publishes nothing; the previous identity stands.
    pub fn set_session(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
        match decode_user(token) {
            Some(decoded) => {
                let merged = decoded.merged_with(&stored_overlay(self.storage.as_ref()));
                self.save_overlay(&merged);
                *self.current.write() = Some(merged);
                self.publish();
                tprintln!("session.set user={}", self.user().map(|u| u.email).unwrap_or_default());
            }
            None => {
                tracing::debug!("session token failed to decode; identity unchanged");
            }
        }
    }

    /// Merge `patch` into the current identity, republish, and persist the
    /// whole merged identity as the new overlay. No-op when no identity
    /// exists.
    pub fn update_local_user(&self, patch: &UserPatch) {
        let merged = match self.current.read().as_ref() {
            Some(user) => user.merged_with(patch),
            None => return,
        };
        self.save_overlay(&merged);
        *self.current.write() = Some(merged);
        self.publish();
    }

    /// Clear both persisted entries and republish the absent identity.
    /// Idempotent.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        *self.current.write() = None;
        self.publish();
        tprintln!("session.logout");
    }

    /// Register `callback` for identity changes. The callback is invoked
    /// immediately with the latest published value, then once per subsequent
    /// publish. No coalescing: rapid successive updates each publish.
    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(Option<&LocalUser>) + Send + Sync + 'static,
    {
        let id = {
            let mut next = self.next_subscriber.lock();
            *next += 1;
            *next
        };
        callback(self.current.read().as_ref());
        self.subscribers.lock().push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.lock().retain(|(sid, _)| *sid != id);
    }

    fn publish(&self) {
        let current = self.current.read().clone();
        for (_, callback) in self.subscribers.lock().iter() {
            callback(current.as_ref());
        }
    }

    fn save_overlay(&self, user: &LocalUser) {
        match serde_json::to_string(&UserPatch::from(user)) {
            Ok(json) => self.storage.set(USER_KEY, &json),
            Err(e) => tracing::warn!("failed to serialize session overlay: {}", e),
        }
    }
}

fn stored_overlay(storage: &dyn SessionStorage) -> UserPatch {
    storage
        .get(USER_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}
