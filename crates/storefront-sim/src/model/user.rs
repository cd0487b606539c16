use std::fmt::{Debug, Display};

/// Type-safe identifier for registered users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A plain-text password.
///
/// Stored and compared as-is (this is a simulation, not a credential store). `Debug`
/// never prints the value, so payloads can be logged safely.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Represents a registered user.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be kept in the user directory ([`crate::user_actor`]).
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: Password,
}

/// Payload for registering a new user.
#[derive(Debug, Clone, Default)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: Password,
}

impl UserCreate {
    /// Registration payload with just the two required fields.
    pub fn with_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Password::new(password),
            ..Self::default()
        }
    }
}

impl User {
    /// Both fields must match exactly.
    pub fn has_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password.matches(password)
    }
}
