use std::env;

/// Upper bound for either expiry (ten years). Values outside
/// `1..=MAX_EXPIRY_SECS` fall back to the default.
pub const MAX_EXPIRY_SECS: i64 = 315_360_000;

fn expiry_from_env(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|secs| (1..=MAX_EXPIRY_SECS).contains(secs))
        .unwrap_or(default)
}

/// Access tokens default to 15 minutes, refresh sessions to 30 days.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: expiry_from_env("JWT_ACCESS_EXPIRY", 900), // 15 minutes
            refresh_token_expiry: expiry_from_env("JWT_REFRESH_EXPIRY", 2_592_000), // 30 days
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(
            ["JWT_SECRET", "JWT_ACCESS_EXPIRY", "JWT_REFRESH_EXPIRY"],
            || {
                let config = JwtConfig::from_env();
                assert_eq!(config.access_token_expiry, 900);
                assert_eq!(config.refresh_token_expiry, 2_592_000);
                assert!(!config.secret.is_empty());
            },
        );
    }

    #[test]
    fn test_unparseable_expiry_falls_back() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some("abc")),
                ("JWT_ACCESS_EXPIRY", Some("soon")),
                ("JWT_REFRESH_EXPIRY", Some("60")),
            ],
            || {
                let config = JwtConfig::from_env();
                assert_eq!(config.secret, "abc");
                assert_eq!(config.access_token_expiry, 900);
                assert_eq!(config.refresh_token_expiry, 60);
            },
        );
    }

    #[test]
    fn test_out_of_range_expiry_falls_back() {
        temp_env::with_vars(
            [
                ("JWT_ACCESS_EXPIRY", Some("-60")),
                ("JWT_REFRESH_EXPIRY", Some("10000000000000")),
            ],
            || {
                let config = JwtConfig::from_env();
                assert_eq!(config.access_token_expiry, 900);
                assert_eq!(config.refresh_token_expiry, 2_592_000);
            },
        );
    }

    #[test]
    fn test_upper_bound_is_accepted() {
        temp_env::with_var("JWT_REFRESH_EXPIRY", Some("315360000"), || {
            let config = JwtConfig::from_env();
            assert_eq!(config.refresh_token_expiry, MAX_EXPIRY_SECS);
        });
    }
}
