use uuid::Uuid;

use crate::types::internal::{Identity, RegistrationInput};

/// Per-attempt context carried into the submission span
///
/// Only non-identifying facts about the input are kept so the context can be
/// logged as a whole.
#[derive(Debug, Clone)]
pub struct SubmissionContext {
    /// Unique identifier for this attempt (for correlating log lines)
    pub attempt_id: Uuid,

    /// Provider-assigned user id, if an identity was available
    pub external_user_id: Option<String>,

    pub phone_digit_count: usize,

    pub has_storage_code: bool,
}

impl SubmissionContext {
    pub fn new(input: &RegistrationInput, identity: Option<&Identity>) -> Self {
        Self {
            attempt_id: Uuid::new_v4(),
            external_user_id: identity.map(|i| i.id.clone()),
            phone_digit_count: input.phone_digits().len(),
            has_storage_code: input.trimmed_storage_code().is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_records_counts_not_values() {
        let input = RegistrationInput::new().with_phone("090-123-4567").with_storage_code("S1");
        let identity = Identity::new("U1", "Taro");

        let ctx = SubmissionContext::new(&input, Some(&identity));

        assert_eq!(ctx.external_user_id.as_deref(), Some("U1"));
        assert_eq!(ctx.phone_digit_count, 10);
        assert!(ctx.has_storage_code);
        assert!(!format!("{:?}", ctx).contains("0901234567"));
    }

    #[test]
    fn test_each_context_gets_a_fresh_attempt_id() {
        let input = RegistrationInput::new();
        assert_ne!(
            SubmissionContext::new(&input, None).attempt_id,
            SubmissionContext::new(&input, None).attempt_id
        );
    }
}
