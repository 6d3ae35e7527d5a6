use std::path::Path;

use tracing::{error, info};

use crate::auth::GoogleAuth;
use crate::client::{FormsApi, GoogleFormsClient};
use crate::config::Settings;
use crate::error::{AuthError, ProvisionError, ServiceError, Stage};
use crate::models::form::{BatchUpdateFormRequest, CreateFormRequest, Info, Request};
use crate::models::provisioned::{ProvisionedForm, ProvisioningResult};
use crate::models::template::{FieldSpec, FormTemplate};
use crate::services::output::write_result;
use crate::templates::{DEMO_REQUEST, NEWSLETTER, SUPERRETURN_MEETING};

/// Build the batch update that sets the description and adds every field.
///
/// Field `i` is inserted at location index `i`, so the form shows the fields
/// in the order they are defined.
pub fn build_populate_request(
    description: Option<&str>,
    fields: &[FieldSpec],
) -> BatchUpdateFormRequest {
    let mut requests = Vec::with_capacity(fields.len() + 1);

    if let Some(description) = description {
        requests.push(Request::set_description(description));
    }

    requests.extend(
        fields
            .iter()
            .enumerate()
            .map(|(index, field)| Request::insert_item(index as u32, field.to_item())),
    );

    BatchUpdateFormRequest { requests }
}

/// Creates and fills the built-in forms through a [`FormsApi`].
pub struct FormsProvisioner<A: FormsApi> {
    api: A,
}

impl<A: FormsApi> FormsProvisioner<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Create an empty form and return its ID.
    pub async fn create_form(
        &self,
        title: &str,
        document_title: Option<&str>,
    ) -> Result<String, ServiceError> {
        let request = CreateFormRequest {
            info: Info {
                title: Some(title.to_string()),
                document_title: document_title.map(str::to_string),
                description: None,
            },
        };

        let form = self.api.create_form(&request).await?;
        Ok(form.form_id)
    }

    /// Set the description and add all fields in a single batch update.
    pub async fn populate_form(
        &self,
        form_id: &str,
        description: Option<&str>,
        fields: &[FieldSpec],
    ) -> Result<(), ServiceError> {
        let request = build_populate_request(description, fields);
        self.api.batch_update(form_id, &request).await
    }

    pub async fn provision_template(
        &self,
        template: &FormTemplate,
    ) -> Result<ProvisionedForm, ProvisionError> {
        let failed = |stage: Stage| {
            move |source: ServiceError| ProvisionError::Template {
                template: template.name,
                stage,
                source,
            }
        };

        let form_id = self
            .create_form(template.title, template.document_title)
            .await
            .map_err(failed(Stage::Create))?;
        info!("Created form {} for template {}", form_id, template.name);

        self.populate_form(&form_id, template.description, template.fields)
            .await
            .map_err(failed(Stage::Populate))?;
        info!(
            "Populated form {} with {} fields",
            form_id,
            template.fields.len()
        );

        let provisioned = ProvisionedForm::from_form_id(form_id);
        println!("Created {}: {}", template.title, provisioned.direct_url);

        Ok(provisioned)
    }

    /// Provision the three built-in forms in order, stopping at the first failure.
    ///
    /// Forms created before a failure are left in place.
    pub async fn provision_all(&self) -> Result<ProvisioningResult, ProvisionError> {
        let demo_request = self.provision_template(&DEMO_REQUEST).await?;
        let newsletter = self.provision_template(&NEWSLETTER).await?;
        let superreturn_meeting = self.provision_template(&SUPERRETURN_MEETING).await?;

        Ok(ProvisioningResult {
            demo_request,
            newsletter,
            superreturn_meeting,
        })
    }

    /// Provision every form, then write the result to `output_path`.
    ///
    /// Nothing is written unless all three forms were provisioned.
    pub async fn run(&self, output_path: &Path) -> Result<ProvisioningResult, ProvisionError> {
        let result = self.provision_all().await.map_err(|err| {
            error!("Provisioning aborted, {} not written: {}", output_path.display(), err);
            err
        })?;

        write_result(output_path, &result)?;
        Ok(result)
    }
}

/// Authenticate from `settings` and run a full provisioning against the Forms API.
pub async fn provision(settings: &Settings) -> Result<ProvisioningResult, ProvisionError> {
    let credential = GoogleAuth::new(&settings.token_endpoint)
        .authenticate(settings)
        .await?;
    if let Some(expires_at) = credential.expires_at() {
        if credential.is_expired() {
            return Err(AuthError::Expired(expires_at).into());
        }
    }
    info!("Authenticated, token expiry: {:?}", credential.expires_at());

    let client = GoogleFormsClient::new(&settings.endpoint, &credential, settings.timeout)
        .map_err(ProvisionError::Client)?;

    FormsProvisioner::new(client)
        .run(&settings.output_path)
        .await
}
