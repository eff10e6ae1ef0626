/// Minimum number of digits a normalized phone number needs to count as contact info
pub const MIN_PHONE_DIGITS: usize = 9;

/// Reduce a phone number to its ASCII digits
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Contact data entered by the user
///
/// `phone_digits` is derived from the raw phone field and recomputed on every
/// change; there is no way to set it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    raw_phone: String,
    phone_digits: String,
    storage_code: String,
    consent: bool,
}

impl RegistrationInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_phone(&mut self, raw: impl Into<String>) {
        self.raw_phone = raw.into();
        self.phone_digits = strip_non_digits(&self.raw_phone);
    }

    pub fn set_storage_code(&mut self, storage_code: impl Into<String>) {
        self.storage_code = storage_code.into();
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    pub fn with_phone(mut self, raw: impl Into<String>) -> Self {
        self.set_phone(raw);
        self
    }

    pub fn with_storage_code(mut self, storage_code: impl Into<String>) -> Self {
        self.set_storage_code(storage_code);
        self
    }

    pub fn with_consent(mut self, consent: bool) -> Self {
        self.set_consent(consent);
        self
    }

    pub fn raw_phone(&self) -> &str {
        &self.raw_phone
    }

    pub fn phone_digits(&self) -> &str {
        &self.phone_digits
    }

    pub fn storage_code(&self) -> &str {
        &self.storage_code
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    pub fn has_valid_phone(&self) -> bool {
        self.phone_digits.len() >= MIN_PHONE_DIGITS
    }

    /// Storage code with surrounding whitespace removed, `None` when blank
    pub fn trimmed_storage_code(&self) -> Option<&str> {
        Some(self.storage_code.trim()).filter(|code| !code.is_empty())
    }

    pub fn has_contact_info(&self) -> bool {
        self.has_valid_phone() || self.trimmed_storage_code().is_some()
    }
}
