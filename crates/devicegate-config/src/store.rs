//! Identity store configuration.
//!
//! - `STATE_FILE`: optional path of a JSON snapshot holding users and refresh
//!   sessions. Unset means purely in-memory state.
//! - `BCRYPT_COST`: bcrypt work factor (4..=31, default [`bcrypt::DEFAULT_COST`]).

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub state_file: Option<PathBuf>,
    pub bcrypt_cost: u32,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            state_file: env::var("STATE_FILE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            bcrypt_cost: env::var("BCRYPT_COST")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|cost| (4..=31).contains(cost))
                .unwrap_or(bcrypt::DEFAULT_COST),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            state_file: None,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}
