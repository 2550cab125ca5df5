/// Netatmo API adapter.
///
/// Two concerns, one file each:
/// - `auth`    — credentials file + OAuth2 refresh-token exchange
/// - `station` — /api/getstationsdata client: module listing and the
///               latest reading set
///
/// `fixtures` (test only) carries representative JSON payloads for both
/// endpoints so the parsers can be exercised without an account.

pub mod auth;
pub mod station;

#[cfg(test)]
pub(crate) mod fixtures;

use std::time::Duration;

/// Timeout for the API calls themselves. The connectivity probe has its
/// own much shorter one; this just keeps a stalled TLS handshake from
/// wedging the whole bar refresh.
pub const API_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the client used for the token exchange and the stations query.
pub fn api_client() -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(API_TIMEOUT)
        .build()
}
