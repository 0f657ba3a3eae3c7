//! Records held by the identity store.

use chrono::{DateTime, TimeDelta, Utc};
use devicegate_auth::Role;
use serde::{Deserialize, Serialize};

/// A registered user. The password is only ever held as a bcrypt hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Input for [`IdentityStore::register_user`](super::IdentityStore::register_user).
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Server-side state behind an opaque refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshSession {
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl RefreshSession {
    /// A `ttl_secs` past the representable range saturates at
    /// [`DateTime::<Utc>::MAX_UTC`].
    pub fn new(username: impl Into<String>, issued_at: DateTime<Utc>, ttl_secs: i64) -> Self {
        let expires_at = TimeDelta::try_seconds(ttl_secs)
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            username: username.into(),
            issued_at,
            expires_at,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_session_expiry_boundary() {
        let issued = Utc::now();
        let session = RefreshSession::new("alice", issued, 60);

        assert!(!session.is_expired_at(issued));
        assert!(!session.is_expired_at(issued + chrono::Duration::seconds(59)));
        assert!(session.is_expired_at(issued + chrono::Duration::seconds(60)));
    }

    #[test]
    fn test_huge_ttl_saturates_instead_of_panicking() {
        let issued = Utc::now();
        let session = RefreshSession::new("alice", issued, 10_000_000_000_000);

        assert_eq!(session.expires_at, DateTime::<Utc>::MAX_UTC);
        assert!(!session.is_expired_at(issued));
    }

    #[test]
    fn test_user_record_roundtrips_role_as_snake_case() {
        let user = UserRecord {
            username: "alice".to_string(),
            email: "alice@example.local".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            role: Role::Viewer,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "viewer");
    }
}
