//! Login state.

use tracing::debug;

use clipdash_models::User;

type ChangeListener = Box<dyn Fn()>;

/// The stored API token and the user it belongs to.
#[derive(Default)]
pub struct AuthStore {
    token: Option<String>,
    user: Option<User>,
    listeners: Vec<ChangeListener>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Store a fresh token and user after the OAuth exchange.
    pub fn login(&mut self, token: impl Into<String>, user: User) {
        self.token = Some(token.into());
        self.user = Some(user);
        self.notify();
    }

    /// Update the cached user (e.g. after a `me()` refresh).
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
        self.notify();
    }

    /// Drop the token and user; called on explicit logout and when the
    /// backend rejects the token.
    pub fn logout(&mut self) {
        debug!("auth store cleared");
        self.token = None;
        self.user = None;
        self.notify();
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl Fn() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "user-1".to_string(),
            email: "creator@example.com".to_string(),
            name: None,
            picture: None,
        }
    }

    #[test]
    fn test_login_logout_cycle() {
        let mut store = AuthStore::new();
        assert!(!store.is_authenticated());

        store.login("tok", user());
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("tok"));
        assert_eq!(store.user().unwrap().id, "user-1");

        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }
}
