use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use dotenv::dotenv;

use crate::args::Args;
use crate::auth::DEFAULT_TOKEN_ENDPOINT;
use crate::client::DEFAULT_FORMS_ENDPOINT;

/// Runtime settings for one provisioning run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output_path: PathBuf,
    pub endpoint: String,
    pub token_endpoint: String,
    pub timeout: Option<Duration>,
    pub access_token: Option<String>,
    pub credentials_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("forms_config.json"),
            endpoint: DEFAULT_FORMS_ENDPOINT.to_string(),
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_string(),
            timeout: None,
            access_token: None,
            credentials_file: None,
            verbose: false,
        }
    }
}

impl Settings {
    /// Load `.env`, then parse the command line with environment fallbacks.
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Self {
        let credentials_file = args.credentials.or_else(well_known_credentials_file);

        Self {
            output_path: args.output,
            endpoint: args.endpoint,
            token_endpoint: args.token_endpoint,
            timeout: args.timeout_secs.map(Duration::from_secs),
            access_token: args.access_token,
            credentials_file,
            verbose: args.verbose,
        }
    }
}

/// The ADC file gcloud writes, if it exists.
fn well_known_credentials_file() -> Option<PathBuf> {
    let config_dir = match env::var_os("CLOUDSDK_CONFIG") {
        Some(dir) => PathBuf::from(dir),
        None if cfg!(windows) => PathBuf::from(env::var_os("APPDATA")?).join("gcloud"),
        None => PathBuf::from(env::var_os("HOME")?).join(".config").join("gcloud"),
    };

    let path = config_dir.join("application_default_credentials.json");
    path.is_file().then_some(path)
}
