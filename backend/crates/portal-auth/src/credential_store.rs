use crate::{Result as AuthErrorResult, User, hash_password};

use std::collections::HashMap;

/// Demo account seeded into every fresh store
pub const DEMO_CLIENT_EMAIL: &str = "client@test.com";
pub const DEMO_CLIENT_PASSWORD: &str = "password";

/// Read-only source of portal accounts.
///
/// The auth service depends only on this lookup, so an in-memory map and a
/// real user database are interchangeable.
pub trait CredentialStore: Send + Sync {
    /// Exact, case-sensitive lookup by email
    fn lookup(&self, email: &str) -> Option<User>;
}

/// Credential store backed by a map built once at startup
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    users: HashMap<String, User>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding only the demo client account
    pub fn seeded() -> AuthErrorResult<Self> {
        Self::new().with_user(DEMO_CLIENT_EMAIL, DEMO_CLIENT_PASSWORD)
    }

    /// Add an active account, hashing the plaintext password
    pub fn with_user(self, email: &str, password: &str) -> AuthErrorResult<Self> {
        let hash = hash_password(password)?;
        Ok(self.with_record(User::new(email, hash)))
    }

    /// Add a deactivated account
    pub fn with_inactive_user(self, email: &str, password: &str) -> AuthErrorResult<Self> {
        let hash = hash_password(password)?;
        Ok(self.with_record(User::new(email, hash).deactivated()))
    }

    /// Add a prebuilt record; a later record for the same email replaces the earlier one
    pub fn with_record(mut self, user: User) -> Self {
        self.users.insert(user.email.clone(), user);
        self
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn lookup(&self, email: &str) -> Option<User> {
        self.users.get(email).cloned()
    }
}
