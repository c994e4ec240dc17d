use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    AuthResponseDto, LoginRequestDto, MeResponseDto, SignupRequestDto,
};
use crate::features::auth::model::{AuthenticatedUser, User, UserRole};
use crate::features::i18n::models::Language;
use crate::shared::constants::SESSION_TTL_HOURS;

/// Display name every responder login gets
const ADMIN_DISPLAY_NAME: &str = "Commander Admin";

#[derive(Debug, Clone)]
struct Session {
    user: User,
    language: Language,
    created_at: DateTime<Utc>,
}

impl Session {
    fn is_live(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at < ttl
    }
}

/// In-memory session store for the demo login flow.
///
/// Sessions live until logout or until they are `ttl` old; there is no
/// credential check.
pub struct SessionService {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionService {
    pub fn new() -> Self {
        Self::with_ttl(Duration::hours(SESSION_TTL_HOURS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    fn live_session<'a>(
        &self,
        sessions: &'a HashMap<String, Session>,
        token: &str,
    ) -> Result<&'a Session> {
        sessions
            .get(token)
            .filter(|session| session.is_live(Utc::now(), self.ttl))
            .ok_or_else(|| AppError::Unauthorized("Invalid or expired session".to_string()))
    }

    /// Sign in. Admins are always "Commander Admin"; citizens are named after
    /// the local part of their email.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let name = match dto.role {
            UserRole::Admin => ADMIN_DISPLAY_NAME.to_string(),
            UserRole::Citizen => dto
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
        };

        let user = User {
            id: Uuid::new_v4(),
            name,
            email: dto.email,
            role: dto.role,
        };

        Ok(self.open_session(user).await)
    }

    /// Create a citizen account and sign it in
    pub async fn signup(&self, dto: SignupRequestDto) -> Result<AuthResponseDto> {
        let user = User {
            id: Uuid::new_v4(),
            name: dto.name.trim().to_string(),
            email: dto.email,
            role: UserRole::Citizen,
        };

        Ok(self.open_session(user).await)
    }

    async fn open_session(&self, user: User) -> AuthResponseDto {
        let token = Uuid::new_v4().simple().to_string();
        let now = Utc::now();
        let session = Session {
            user: user.clone(),
            language: Language::default(),
            created_at: now,
        };

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.is_live(now, self.ttl));
        if sessions.len() < before {
            tracing::debug!("Pruned {} expired sessions", before - sessions.len());
        }
        sessions.insert(token.clone(), session);
        drop(sessions);

        tracing::info!("Session opened for user {} ({})", user.id, user.role);

        AuthResponseDto {
            access_token: token,
            token_type: "Bearer".to_string(),
            user,
            language: Language::default(),
        }
    }

    /// Destroy the caller's session. Logging out twice is not an error.
    pub async fn logout(&self, token: &str) {
        if let Some(session) = self.sessions.write().await.remove(token) {
            tracing::info!("Session closed for user {}", session.user.id);
        }
    }

    /// Resolve a bearer token. Unknown and expired tokens count as "not signed in".
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser> {
        let sessions = self.sessions.read().await;
        let session = self.live_session(&sessions, token)?;

        Ok(AuthenticatedUser {
            token: token.to_string(),
            user: session.user.clone(),
        })
    }

    pub async fn current(&self, user: &AuthenticatedUser) -> Result<MeResponseDto> {
        let sessions = self.sessions.read().await;
        let session = self.live_session(&sessions, &user.token)?;

        Ok(MeResponseDto {
            user: session.user.clone(),
            language: session.language,
            signed_in_at: session.created_at,
        })
    }

    /// Remember the display language for the caller's session
    pub async fn set_language(&self, user: &AuthenticatedUser, language: Language) -> Result<()> {
        let ttl = self.ttl;
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&user.token)
            .filter(|session| session.is_live(Utc::now(), ttl))
            .ok_or_else(|| AppError::Unauthorized("Invalid or expired session".to_string()))?;

        session.language = language;
        tracing::debug!("User {} switched language to {}", user.user.id, language);
        Ok(())
    }
}
