//! Signed-in admin session.
//!
//! Token and user live in an injected [`TokenStore`] and expiry checks use an
//! injected [`Clock`], so nothing here touches process-wide state. Refreshing
//! the token is the caller's job: [`Session::refresh_due`] only says when.

mod clock;
mod error;
mod store;

pub use clock::{Clock, SystemClock};
pub use error::{SessionError, SessionResult};
pub use store::{MemoryStore, TokenStore};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::Role;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const EXPIRES_AT_KEY: &str = "token_expires_at";

/// Refresh this long before the token expires unless configured otherwise.
pub const DEFAULT_REFRESH_MARGIN_SECS: i64 = 60;

/// The account behind a session, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

pub struct Session<S, C> {
    store: S,
    clock: C,
    token: Option<String>,
    user: Option<SessionUser>,
    expires_at: Option<DateTime<Utc>>,
    refresh_margin: Duration,
}

impl<S: TokenStore, C: Clock> Session<S, C> {
    /// A signed-out session. Nothing is read from the store.
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            token: None,
            user: None,
            expires_at: None,
            refresh_margin: Duration::seconds(DEFAULT_REFRESH_MARGIN_SECS),
        }
    }

    /// Load a previous session from the store.
    ///
    /// The session is restored only when both token and user are present.
    /// Stored tokens may carry surrounding quotes; they are stripped.
    pub fn restore(store: S, clock: C) -> SessionResult<Self> {
        let mut session = Self::new(store, clock);

        let (Some(token), Some(user_json)) = (
            session.store.get(TOKEN_KEY),
            session.store.get(USER_KEY),
        ) else {
            debug!("No stored session");
            return Ok(session);
        };

        let user: SessionUser =
            serde_json::from_str(&user_json).map_err(|e| SessionError::CorruptUser {
                message: e.to_string(),
            })?;

        session.expires_at = match session.store.get(EXPIRES_AT_KEY) {
            Some(raw) => Some(
                DateTime::parse_from_rfc3339(&raw)
                    .map_err(|e| SessionError::CorruptExpiry {
                        value: raw.clone(),
                        message: e.to_string(),
                    })?
                    .with_timezone(&Utc),
            ),
            None => None,
        };
        session.token = Some(token.replace('"', ""));
        debug!(username = %user.username, "Restored stored session");
        session.user = Some(user);
        Ok(session)
    }

    pub fn with_refresh_margin(mut self, margin: Duration) -> Self {
        self.refresh_margin = margin;
        self
    }

    pub fn sign_in(
        &mut self,
        token: impl Into<String>,
        user: SessionUser,
        expires_at: Option<DateTime<Utc>>,
    ) -> SessionResult<()> {
        let token = token.into();
        let user_json = serde_json::to_string(&user).map_err(|e| SessionError::CorruptUser {
            message: e.to_string(),
        })?;

        self.store.set(TOKEN_KEY, &token)?;
        self.store.set(USER_KEY, &user_json)?;
        match expires_at {
            Some(at) => self.store.set(EXPIRES_AT_KEY, &at.to_rfc3339())?,
            None => self.store.remove(EXPIRES_AT_KEY),
        }

        info!(username = %user.username, role = %user.role, "Signed in");
        self.token = Some(token);
        self.user = Some(user);
        self.expires_at = expires_at;
        Ok(())
    }

    pub fn sign_out(&mut self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        self.store.remove(EXPIRES_AT_KEY);
        if let Some(user) = self.user.take() {
            info!(username = %user.username, "Signed out");
        }
        self.token = None;
        self.expires_at = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some() && !self.is_expired()
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_manager(&self) -> bool {
        self.has_role(Role::Manager)
    }

    /// Admins and managers may edit the catalogue.
    pub fn can_manage(&self) -> bool {
        self.is_admin() || self.is_manager()
    }

    fn has_role(&self, role: Role) -> bool {
        self.user.as_ref().is_some_and(|user| user.role == role)
    }

    /// `Authorization` header value for API requests.
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {}", token))
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| self.clock.now() >= expires_at)
    }

    /// Whether the token expires within the refresh margin.
    pub fn refresh_due(&self) -> bool {
        self.token.is_some()
            && self
                .expires_at
                .is_some_and(|expires_at| self.clock.now() + self.refresh_margin >= expires_at)
    }

    /// How long until a refresh is due; zero when it already is, `None` when
    /// the token never expires or there is no token.
    pub fn time_until_refresh(&self) -> Option<Duration> {
        self.token.as_ref()?;
        let due_at = self.expires_at? - self.refresh_margin;
        Some((due_at - self.clock.now()).max(Duration::zero()))
    }
}
