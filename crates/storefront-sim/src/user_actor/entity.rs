//! [`ActorEntity`] implementation for [`User`].

use super::UserError;
use crate::model::{User, UserCreate, UserId};
use actor_framework::ActorEntity;

/// Message shown when a registration or login form is incomplete.
pub const MISSING_CREDENTIALS: &str = "Please enter a valid email and password";

impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Error = UserError;

    /// Registers a user. Email and password are required; name and phone may be empty.
    /// Email uniqueness is not checked.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        if params.email.is_empty() || params.password.is_empty() {
            return Err(UserError::Validation(MISSING_CREDENTIALS.to_string()));
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            phone: params.phone,
            password: params.password,
        })
    }
}
