/// Credentials storage and the OAuth2 refresh-token exchange.
///
/// Credentials live in `~/.netatmo.credentials`, a small JSON object with
/// upper-case keys (the format the Netatmo client tooling reads and
/// writes):
///
/// ```json
/// {
///   "CLIENT_ID": "...",
///   "CLIENT_SECRET": "...",
///   "REFRESH_TOKEN": "..."
/// }
/// ```
///
/// The token endpoint rotates refresh tokens: every successful exchange
/// may return a new one, and the old one stops working. The rotated token
/// is written back to the credentials file on a best-effort basis; a
/// failed write is logged but does not fail the run, since the access
/// token in hand is still good for this invocation.

use crate::model::StationError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const TOKEN_URL: &str = "https://api.netatmo.com/oauth2/token";

/// File name under the home directory.
pub const CREDENTIALS_FILE: &str = ".netatmo.credentials";

// ---------------------------------------------------------------------------
// Credentials file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    #[serde(rename = "CLIENT_ID")]
    pub client_id: String,
    #[serde(rename = "CLIENT_SECRET")]
    pub client_secret: String,
    #[serde(rename = "REFRESH_TOKEN")]
    pub refresh_token: String,
}

/// Default credentials location: `~/.netatmo.credentials`.
pub fn credentials_path() -> Result<PathBuf, StationError> {
    dirs::home_dir()
        .map(|home| home.join(CREDENTIALS_FILE))
        .ok_or_else(|| StationError::Auth("home directory not resolvable".to_string()))
}

pub fn load_credentials(path: &Path) -> Result<Credentials, StationError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        StationError::Auth(format!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        StationError::Auth(format!("malformed credentials in {}: {}", path.display(), e))
    })
}

pub fn store_credentials(path: &Path, credentials: &Credentials) -> Result<(), StationError> {
    let contents = serde_json::to_string_pretty(credentials).map_err(|e| {
        StationError::Auth(format!("cannot serialize credentials: {}", e))
    })?;
    fs::write(path, contents).map_err(|e| {
        StationError::Auth(format!("cannot write {}: {}", path.display(), e))
    })
}

// ---------------------------------------------------------------------------
// Token exchange
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
}

/// Exchanges the stored refresh token for an access token.
///
/// # Errors
/// `StationError::Auth` for a missing/malformed credentials file, a
/// transport failure, a non-success status from the token endpoint, or a
/// response without an access token.
pub fn authenticate(
    client: &reqwest::blocking::Client,
    credentials_path: &Path,
) -> Result<String, StationError> {
    let credentials = load_credentials(credentials_path)?;

    let params = [
        ("grant_type", "refresh_token"),
        ("refresh_token", credentials.refresh_token.as_str()),
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
    ];

    let response = client
        .post(TOKEN_URL)
        .form(&params)
        .send()
        .map_err(|e| StationError::Auth(format!("token request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(StationError::Auth(format!(
            "token endpoint returned {}",
            status
        )));
    }

    let token: TokenResponse = response
        .json()
        .map_err(|e| StationError::Auth(format!("malformed token response: {}", e)))?;

    // Persist the rotated refresh token so the next invocation can still
    // authenticate. Best effort only.
    if let Some(rotated) = token.refresh_token {
        if rotated != credentials.refresh_token {
            let updated = Credentials {
                refresh_token: rotated,
                ..credentials
            };
            if let Err(e) = store_credentials(credentials_path, &updated) {
                warn!("could not persist rotated refresh token: {}", e);
            }
        }
    }

    Ok(token.access_token)
}
