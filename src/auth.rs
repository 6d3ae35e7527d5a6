use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::AuthError;

/// OAuth scope needed to create and edit forms.
pub const FORMS_BODY_SCOPE: &str = "https://www.googleapis.com/auth/forms.body";

pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// An OAuth2 access token for the Forms API.
#[derive(Clone)]
pub struct Credential {
    access_token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    pub fn with_expiry(access_token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: Some(expires_at),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Tokens without a known expiry are assumed valid.
    pub fn is_expired(&self) -> bool {
        self.expires_at.map_or(false, |at| at <= Utc::now())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// Application Default Credentials file as written by `gcloud auth application-default login`
#[derive(Debug, Deserialize)]
struct CredentialFile {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

#[derive(Debug)]
struct AuthorizedUser {
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Resolves credentials for the Forms API from the environment.
pub struct GoogleAuth {
    client: Client,
    token_endpoint: String,
}

impl GoogleAuth {
    pub fn new(token_endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token_endpoint: token_endpoint.into(),
        }
    }

    /// Obtain an access token, preferring an explicit token over a credentials file.
    pub async fn authenticate(&self, settings: &Settings) -> Result<Credential, AuthError> {
        info!("Resolving credentials for scope {}", FORMS_BODY_SCOPE);

        let explicit_token = settings
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty());

        if let Some(token) = explicit_token {
            info!("Using access token from GOOGLE_OAUTH_ACCESS_TOKEN");
            return Ok(Credential::new(token));
        }

        let path = settings
            .credentials_file
            .as_deref()
            .ok_or(AuthError::NotFound)?;

        info!("Loading application default credentials from {}", path.display());
        let user = read_credential_file(path)?;
        self.exchange_refresh_token(&user).await
    }

    async fn exchange_refresh_token(&self, user: &AuthorizedUser) -> Result<Credential, AuthError> {
        let params = [
            ("grant_type", "refresh_token"),
            ("client_id", user.client_id.as_str()),
            ("client_secret", user.client_secret.as_str()),
            ("refresh_token", user.refresh_token.as_str()),
        ];

        debug!("Exchanging refresh token at {}", self.token_endpoint);

        let res = self
            .client
            .post(&self.token_endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        if !status.is_success() {
            let reason = match serde_json::from_str::<TokenErrorResponse>(&body) {
                Ok(TokenErrorResponse {
                    error,
                    error_description: Some(description),
                }) => format!("{}: {}", error, description),
                Ok(TokenErrorResponse { error, .. }) => error,
                Err(_) => body,
            };
            return Err(AuthError::TokenExchange(format!("{} ({})", reason, status)));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::TokenExchange(format!("invalid token response: {}", e)))?;

        info!("Obtained access token from refresh token");

        Ok(match token.expires_in {
            Some(seconds) => {
                Credential::with_expiry(token.access_token, Utc::now() + Duration::seconds(seconds))
            }
            None => Credential::new(token.access_token),
        })
    }
}

fn read_credential_file(path: &Path) -> Result<AuthorizedUser, AuthError> {
    let content = fs::read_to_string(path).map_err(|source| AuthError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: CredentialFile =
        serde_json::from_str(&content).map_err(|e| AuthError::InvalidCredentialFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if file.kind != "authorized_user" {
        return Err(AuthError::UnsupportedCredentialType(file.kind));
    }

    let missing = |field: &str| AuthError::InvalidCredentialFile {
        path: path.to_path_buf(),
        reason: format!("missing field '{}'", field),
    };

    Ok(AuthorizedUser {
        client_id: file.client_id.ok_or_else(|| missing("client_id"))?,
        client_secret: file.client_secret.ok_or_else(|| missing("client_secret"))?,
        refresh_token: file.refresh_token.ok_or_else(|| missing("refresh_token"))?,
    })
}
