//! [`ActorState`] implementation for [`Session`].

use super::SessionError;
use crate::clients::UserClient;
use crate::model::{Password, User, UserCreate, UserId};
use crate::user_actor::MISSING_CREDENTIALS;
use actor_framework::{ActorClient, ActorState};
use async_trait::async_trait;
use tracing::{info, warn};

/// Who is logged in, if anyone.
///
/// Holds a reference (the directory id) to at most one registered user. The user record
/// itself stays in the directory.
#[derive(Debug, Default)]
pub struct Session {
    active: Option<UserId>,
}

#[derive(Debug)]
pub enum SessionCommand {
    Register(UserCreate),
    Login { email: String, password: Password },
    Logout,
    Current,
}

/// Replies from SessionCommands - variants match 1:1 with SessionCommand
#[derive(Debug, Clone)]
pub enum SessionReply {
    Registered(UserId),
    LoggedIn(User),
    /// The user that was logged in, if any.
    LoggedOut(Option<User>),
    Current(Option<User>),
}

impl Session {
    async fn active_user(&self, users: &UserClient) -> Result<Option<User>, SessionError> {
        match self.active {
            None => Ok(None),
            Some(id) => Ok(users.get(id).await?),
        }
    }
}

#[async_trait]
impl ActorState for Session {
    type Command = SessionCommand;
    type Reply = SessionReply;
    type Context = UserClient;
    type Error = SessionError;

    /// # Commands
    /// - `Register`: adds the user to the directory; does not log them in
    /// - `Login`: validates input, then looks for an exact credential match
    /// - `Logout`: clears the active user (succeeds when nobody is logged in)
    /// - `Current`: resolves the active user
    async fn handle(
        &mut self,
        command: SessionCommand,
        users: &UserClient,
    ) -> Result<SessionReply, SessionError> {
        match command {
            SessionCommand::Register(params) => {
                let id = users.register(params).await?;
                info!(user_id = %id, "Registered");
                Ok(SessionReply::Registered(id))
            }
            SessionCommand::Login { email, password } => {
                if email.is_empty() || password.is_empty() {
                    return Err(SessionError::Validation(MISSING_CREDENTIALS.to_string()));
                }
                match users.find_by_credentials(&email, password.expose()).await? {
                    Some(user) => {
                        self.active = Some(user.id);
                        info!(user_id = %user.id, "Logged in");
                        Ok(SessionReply::LoggedIn(user))
                    }
                    None => {
                        warn!(%email, "Login rejected");
                        Err(SessionError::Auth)
                    }
                }
            }
            SessionCommand::Logout => {
                let previous = self.active_user(users).await?;
                self.active = None;
                if let Some(user) = &previous {
                    info!(user_id = %user.id, "Logged out");
                }
                Ok(SessionReply::LoggedOut(previous))
            }
            SessionCommand::Current => Ok(SessionReply::Current(self.active_user(users).await?)),
        }
    }
}
