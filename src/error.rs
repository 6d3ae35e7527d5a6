use std::fmt;
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failures while resolving a credential for the Forms API.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("no Google credentials found: set GOOGLE_OAUTH_ACCESS_TOKEN or GOOGLE_APPLICATION_CREDENTIALS, or run `gcloud auth application-default login`")]
    NotFound,

    #[error("credential file {} could not be read: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("credential file {} is not valid: {reason}", path.display())]
    InvalidCredentialFile { path: PathBuf, reason: String },

    #[error("unsupported credential type '{0}', only 'authorized_user' files are supported")]
    UnsupportedCredentialType(String),

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("access token expired at {0}")]
    Expired(DateTime<Utc>),
}

/// Any failure reported by, or while talking to, the Forms service.
///
/// Transient and permanent failures are not distinguished; none are retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("Forms API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response from Forms API: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::InvalidResponse(err.to_string())
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

/// Where in a template's provisioning a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Create,
    Populate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Create => write!(f, "create"),
            Stage::Populate => write!(f, "populate"),
        }
    }
}

/// Top-level error of a provisioning run.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("failed to build Forms API client: {0}")]
    Client(#[source] ServiceError),

    #[error("failed to {stage} form '{template}': {source}")]
    Template {
        template: &'static str,
        stage: Stage,
        #[source]
        source: ServiceError,
    },

    #[error("failed to serialize provisioning result: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
