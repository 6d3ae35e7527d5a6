//! Google Forms provisioning
//!
//! Creates the demo request, newsletter and SuperReturn meeting forms through
//! the Google Forms API and records their IDs and URLs in a JSON file.
//!
//! # Modules
//!
//! - `auth`: resolves an OAuth2 access token from the environment
//! - `client`: `FormsApi` trait and its reqwest implementation `GoogleFormsClient`
//! - `templates`: the built-in form definitions
//! - `services::provisioner`: `FormsProvisioner`, which creates and fills the forms
//! - `services::output`: writes the provisioning result
//!
//! # Authentication
//!
//! An access token is taken from `GOOGLE_OAUTH_ACCESS_TOKEN` when set. Otherwise
//! an `authorized_user` Application Default Credentials file is read and its
//! refresh token exchanged for an access token. The credentials must carry the
//! `forms.body` scope.

pub mod args;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod templates;

#[cfg(test)]
mod client_mock;

// Re-export the main API types for ease of use
pub use auth::{Credential, GoogleAuth};
pub use client::{FormsApi, GoogleFormsClient};
pub use config::Settings;
pub use error::{AuthError, ProvisionError, ServiceError};
pub use models::provisioned::{ProvisionedForm, ProvisioningResult};
pub use services::provisioner::{provision, FormsProvisioner};
