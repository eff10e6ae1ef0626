use serde::{Deserialize, Serialize};

use crate::types::internal::{Identity, RegistrationInput};

/// JSON body posted to the registration endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Normalized phone digits; omitted unless the phone passes validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Trimmed storage code; omitted when blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_code: Option<String>,

    pub external_user_id: String,

    pub display_name: String,

    /// Always `true`; a request is never built without consent
    pub consent: bool,
}

impl RegistrationRequest {
    pub fn new(input: &RegistrationInput, identity: &Identity) -> Self {
        Self {
            phone: input
                .has_valid_phone()
                .then(|| input.phone_digits().to_string()),
            storage_code: input.trimmed_storage_code().map(str::to_string),
            external_user_id: identity.id.clone(),
            display_name: identity.display_name.clone(),
            consent: true,
        }
    }
}

/// Body returned by the registration endpoint on a 2xx response
///
/// Field types are checked strictly: `"ok": "true"` is a malformed response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub ok: bool,

    pub message: String,

    #[serde(default)]
    pub contract_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity() -> Identity {
        Identity::new("U1234567890abcdef", "Taro")
    }

    #[test]
    fn test_request_with_phone_only_omits_storage_code() {
        let input = RegistrationInput::new().with_phone("090-123-4567").with_consent(true);
        let body = serde_json::to_value(RegistrationRequest::new(&input, &identity())).unwrap();

        assert_eq!(
            body,
            json!({
                "phone": "0901234567",
                "externalUserId": "U1234567890abcdef",
                "displayName": "Taro",
                "consent": true
            })
        );
    }

    #[test]
    fn test_request_with_storage_code_only_omits_phone() {
        let input = RegistrationInput::new().with_storage_code(" S-001 ").with_consent(true);
        let body = serde_json::to_value(RegistrationRequest::new(&input, &identity())).unwrap();

        assert_eq!(body["storageCode"], "S-001");
        assert!(body.get("phone").is_none());
    }

    #[test]
    fn test_request_drops_short_phone_when_storage_code_present() {
        let input = RegistrationInput::new()
            .with_phone("1234")
            .with_storage_code("S-001")
            .with_consent(true);
        let body = serde_json::to_value(RegistrationRequest::new(&input, &identity())).unwrap();

        assert!(body.get("phone").is_none());
        assert_eq!(body["storageCode"], "S-001");
    }

    #[test]
    fn test_response_with_contract_code() {
        let response: RegistrationResponse =
            serde_json::from_value(json!({"ok": true, "message": "done", "contractCode": "C123"})).unwrap();

        assert!(response.ok);
        assert_eq!(response.message, "done");
        assert_eq!(response.contract_code.as_deref(), Some("C123"));
    }

    #[test]
    fn test_response_without_contract_code() {
        let response: RegistrationResponse =
            serde_json::from_value(json!({"ok": false, "message": "already registered"})).unwrap();

        assert!(!response.ok);
        assert_eq!(response.contract_code, None);
    }

    #[test]
    fn test_response_with_string_ok_is_rejected() {
        let result = serde_json::from_value::<RegistrationResponse>(json!({"ok": "true", "message": "done"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_response_without_message_is_rejected() {
        let result = serde_json::from_value::<RegistrationResponse>(json!({"ok": true}));
        assert!(result.is_err());
    }
}
