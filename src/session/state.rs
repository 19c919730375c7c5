use crate::models::SessionUser;

/// What observers of the session see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<SessionUser>,
    /// True until the first refresh finishes
    pub loading: bool,
    /// The last identity check was rejected with 401
    pub unauthorized: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            unauthorized: false,
        }
    }
}

impl SessionSnapshot {
    pub fn status(&self) -> SessionStatus {
        if let Some(user) = &self.user {
            return SessionStatus::Authenticated(user.clone());
        }
        if self.unauthorized {
            SessionStatus::Unauthorized
        } else if self.loading {
            SessionStatus::Loading
        } else {
            SessionStatus::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Derived view of a [`SessionSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated(SessionUser),
    Unauthenticated,
    Unauthorized,
}
