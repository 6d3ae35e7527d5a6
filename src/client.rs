use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, info};

use crate::auth::Credential;
use crate::error::ServiceError;
use crate::models::form::{
    BatchUpdateFormRequest, BatchUpdateFormResponse, CreateFormRequest, Form, GoogleErrorEnvelope,
};

pub const DEFAULT_FORMS_ENDPOINT: &str = "https://forms.googleapis.com";

/// The two Forms API calls provisioning needs.
#[async_trait]
pub trait FormsApi: Send + Sync {
    /// Create an empty form. Only title metadata is honoured at creation time.
    async fn create_form(&self, request: &CreateFormRequest) -> Result<Form, ServiceError>;

    /// Apply a batch of updates to an existing form.
    async fn batch_update(
        &self,
        form_id: &str,
        request: &BatchUpdateFormRequest,
    ) -> Result<(), ServiceError>;
}

/// Client for the Google Forms REST API
pub struct GoogleFormsClient {
    client: Client,
    endpoint: String,
    access_token: String,
}

impl GoogleFormsClient {
    pub fn new(
        endpoint: &str,
        credential: &Credential,
        timeout: Option<Duration>,
    ) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_token: credential.access_token().to_string(),
        })
    }

    /// Turn a non-2xx response into an API error, keeping Google's message if present.
    async fn check_status(res: Response) -> Result<Response, ServiceError> {
        let status = res.status();
        info!("Response received with status: {}", status);

        if status.is_success() {
            return Ok(res);
        }

        let body = match res.text().await {
            Ok(body) => body,
            Err(err) => {
                debug!("Failed to read error body: {}", err);
                String::new()
            }
        };
        let message = match serde_json::from_str::<GoogleErrorEnvelope>(&body) {
            Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
            _ if !body.trim().is_empty() => body,
            _ => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        Err(ServiceError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl FormsApi for GoogleFormsClient {
    async fn create_form(&self, request: &CreateFormRequest) -> Result<Form, ServiceError> {
        let url = format!("{}/v1/forms", self.endpoint);

        info!("Making request to create form");
        debug!("API URL: {}", url);

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .await?;

        let form = Self::check_status(res).await?.json::<Form>().await?;
        if form.form_id.is_empty() {
            return Err(ServiceError::InvalidResponse(
                "create response has an empty formId".to_string(),
            ));
        }

        debug!("Responder URI: {:?}", form.responder_uri);
        Ok(form)
    }

    async fn batch_update(
        &self,
        form_id: &str,
        request: &BatchUpdateFormRequest,
    ) -> Result<(), ServiceError> {
        let url = format!("{}/v1/forms/{}:batchUpdate", self.endpoint, form_id);

        info!(
            "Making batch update with {} requests for form {}",
            request.requests.len(),
            form_id
        );
        debug!("API URL: {}", url);

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .await?;

        let response = Self::check_status(res)
            .await?
            .json::<BatchUpdateFormResponse>()
            .await?;
        debug!("Batch update returned {} replies", response.replies.len());

        Ok(())
    }
}
