use tracing::{debug, info, warn};

use crate::config::{ApiKey, RegistrationSettings};
use crate::errors::RegistrationError;
use crate::types::dto::{RegistrationRequest, RegistrationResponse};
use crate::types::internal::{Identity, RegistrationInput, SubmissionResult};

const API_KEY_HEADER: &str = "x-api-key";

/// Validates registration input and forwards it to the automation endpoint
///
/// Makes exactly one request per call; there is no retry.
pub struct RegistrationProvider {
    client: reqwest::Client,
}

impl RegistrationProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Check submission preconditions in order and build the request body
    ///
    /// # Errors
    /// The first violated precondition:
    /// 1. `Configuration` when no endpoint is configured
    /// 2. `MissingIdentity` when no identity has been acquired
    /// 3. `ConsentRequired` when consent is not granted
    /// 4. `InsufficientContactInfo` when neither a 9+ digit phone nor a storage code is present
    pub fn validate(
        settings: &RegistrationSettings,
        identity: Option<&Identity>,
        input: &RegistrationInput,
    ) -> Result<RegistrationRequest, RegistrationError> {
        if settings.registration_endpoint().is_none() {
            return Err(RegistrationError::endpoint_missing());
        }

        let identity = identity.ok_or(RegistrationError::MissingIdentity)?;

        if !input.consent() {
            return Err(RegistrationError::ConsentRequired);
        }

        if !input.has_contact_info() {
            return Err(RegistrationError::InsufficientContactInfo);
        }

        Ok(RegistrationRequest::new(input, identity))
    }

    /// POST the request and map the response to a result
    ///
    /// Non-2xx bodies are never parsed; 2xx bodies must match
    /// `RegistrationResponse` exactly.
    pub async fn send(
        &self,
        endpoint: &str,
        api_key: Option<&ApiKey>,
        request: &RegistrationRequest,
    ) -> SubmissionResult {
        let mut builder = self.client.post(endpoint).json(request);
        if let Some(key) = api_key {
            builder = builder.header(API_KEY_HEADER, key.expose());
        }

        debug!(
            has_phone = request.phone.is_some(),
            has_storage_code = request.storage_code.is_some(),
            "Sending registration request"
        );

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Registration request did not complete");
                return SubmissionResult::from_error(RegistrationError::from(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Registration endpoint returned an error status");
            return SubmissionResult::from_error(RegistrationError::Server {
                status: status.as_u16(),
            });
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Failed to read registration response body");
                return SubmissionResult::from_error(RegistrationError::Network(e.to_string()));
            }
        };

        match serde_json::from_slice::<RegistrationResponse>(&body) {
            Ok(parsed) => {
                info!(
                    ok = parsed.ok,
                    has_contract_code = parsed.contract_code.is_some(),
                    "Registration endpoint responded"
                );
                SubmissionResult::from(parsed)
            }
            Err(e) => {
                warn!(error = %e, "Registration response did not match the expected shape");
                SubmissionResult::from_error(RegistrationError::MalformedResponse(e.to_string()))
            }
        }
    }
}
