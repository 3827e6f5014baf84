//! Auth slice: who is logged in, with what token.

use bolt_core::types::User;

use super::LoadState;

#[derive(Debug, Default)]
pub struct AuthSlice {
    pub load: LoadState,
    pub token: Option<String>,
    pub user: Option<User>,
}

impl AuthSlice {
    pub fn pending(&mut self) {
        self.load = LoadState::Loading;
    }

    /// A login succeeded or a saved session was restored.
    pub fn logged_in(&mut self, token: String, user: User) {
        self.load = LoadState::Loaded;
        self.token = Some(token);
        self.user = Some(user);
    }

    pub fn failed(&mut self, message: String) {
        self.load = LoadState::Failed(message);
    }

    /// Logout, or a 401 that invalidated the session.
    pub fn logged_out(&mut self) {
        self.load = LoadState::Idle;
        self.token = None;
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@shop.in".to_string(),
            role: None,
        }
    }

    #[test]
    fn test_login_logout_cycle() {
        let mut slice = AuthSlice::default();
        assert!(!slice.is_authenticated());

        slice.pending();
        slice.logged_in("jwt".to_string(), user());
        assert!(slice.is_authenticated());
        assert_eq!(slice.load, LoadState::Loaded);

        slice.logged_out();
        assert!(!slice.is_authenticated());
        assert!(slice.user.is_none());
    }
}
