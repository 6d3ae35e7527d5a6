use std::path::PathBuf;

use clap::Parser;

use crate::auth::DEFAULT_TOKEN_ENDPOINT;
use crate::client::DEFAULT_FORMS_ENDPOINT;

/// Creates the demo request, newsletter and SuperReturn meeting Google Forms
/// and writes their IDs and URLs to a JSON file.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File the form IDs and URLs are written to. Overwritten on every run.
    #[arg(short, long, env = "FORMS_OUTPUT_PATH", default_value = "forms_config.json")]
    pub output: PathBuf,

    /// Base URL of the Google Forms API
    #[arg(long, env = "FORMS_API_ENDPOINT", default_value = DEFAULT_FORMS_ENDPOINT)]
    pub endpoint: String,

    /// OAuth2 token endpoint used to exchange refresh tokens
    #[arg(long, env = "GOOGLE_TOKEN_ENDPOINT", default_value = DEFAULT_TOKEN_ENDPOINT)]
    pub token_endpoint: String,

    /// Per-request timeout in seconds. No timeout when omitted.
    #[arg(long, env = "FORMS_REQUEST_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Ready-made access token, e.g. from `gcloud auth print-access-token`
    #[arg(long, env = "GOOGLE_OAUTH_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Application Default Credentials file (authorized_user type)
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Turn on debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
