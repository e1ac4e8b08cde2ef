//! Session Handling
//!
//! The token is the sole artifact of authentication. It lives in a single
//! named browser-local-storage slot, read once at startup and written or
//! cleared only by login/logout.

/// Local-storage slot holding the session token
pub const TOKEN_KEY: &str = "jobtrack_token";

/// An authenticated session.
///
/// The token is opaque to the client and is sent verbatim in the
/// `Authorization` header of every authenticated request. No freshness check
/// happens locally; an expired token surfaces as a failed request.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Persistence capability for the session token.
///
/// Injected rather than accessed ambiently so the session flow can be
/// exercised against an in-memory store in tests.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by browser local storage.
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn save(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Restore a session from a previously stored token, if any.
pub fn restore(store: &impl TokenStore) -> Option<Session> {
    store.load().filter(|t| !t.is_empty()).map(Session::new)
}

/// Persist a freshly issued token and return the session for it.
pub fn establish(store: &impl TokenStore, token: String) -> Session {
    store.save(&token);
    Session::new(token)
}

/// Drop the stored token. No server-side call is made.
pub fn discard(store: &impl TokenStore) {
    store.clear();
}

/// In-memory token store for exercising the session flow in tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryTokenStore(std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_with_empty_store_yields_no_session() {
        let store = MemoryTokenStore::default();
        assert_eq!(restore(&store), None);
    }

    #[test]
    fn establish_persists_and_restore_finds_it() {
        let store = MemoryTokenStore::default();
        let session = establish(&store, "tok-123".to_string());
        assert_eq!(session.token, "tok-123");
        assert_eq!(restore(&store), Some(Session::new("tok-123")));
    }

    #[test]
    fn discard_clears_the_slot() {
        let store = MemoryTokenStore::default();
        establish(&store, "tok-123".to_string());
        discard(&store);
        assert_eq!(restore(&store), None);
    }

    #[test]
    fn blank_stored_token_is_not_a_session() {
        let store = MemoryTokenStore::default();
        store.save("");
        assert_eq!(restore(&store), None);
    }
}
