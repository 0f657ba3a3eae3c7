use rand::RngCore;

/// Number of random bytes in a refresh token (hex encoded to twice as many chars).
pub const REFRESH_TOKEN_BYTES: usize = 24;

pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
