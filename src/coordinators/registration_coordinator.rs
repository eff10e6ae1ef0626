use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{Instrument, debug, info, info_span};

use crate::AppData;
use crate::config::RegistrationSettings;
use crate::errors::RegistrationError;
use crate::providers::RegistrationProvider;
use crate::types::internal::{AcquisitionState, Identity, RegistrationInput, SubmissionContext, SubmissionResult};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the submitting flag when dropped, whichever way the attempt ends
struct SubmittingGuard<'a>(&'a AtomicBool);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Holds the registration form state and runs submissions
///
/// `idle → submitting → settled`, re-entered on every user-triggered submit.
/// The identity is read from the acquisition's state channel, so nothing can
/// be submitted before acquisition has produced one.
pub struct RegistrationCoordinator {
    settings: RegistrationSettings,
    registration_provider: Arc<RegistrationProvider>,
    identity: watch::Receiver<AcquisitionState>,
    input: Mutex<RegistrationInput>,
    submitting: AtomicBool,
    last_result: Mutex<Option<SubmissionResult>>,
}

impl RegistrationCoordinator {
    pub fn new(app_data: &AppData, identity: watch::Receiver<AcquisitionState>) -> Self {
        Self {
            settings: app_data.settings.clone(),
            registration_provider: Arc::clone(&app_data.registration_provider),
            identity,
            input: Mutex::new(RegistrationInput::new()),
            submitting: AtomicBool::new(false),
            last_result: Mutex::new(None),
        }
    }

    pub fn set_phone(&self, raw: impl Into<String>) {
        lock(&self.input).set_phone(raw);
    }

    pub fn set_storage_code(&self, storage_code: impl Into<String>) {
        lock(&self.input).set_storage_code(storage_code);
    }

    pub fn set_consent(&self, consent: bool) {
        lock(&self.input).set_consent(consent);
    }

    /// Snapshot of the current form input
    pub fn input(&self) -> RegistrationInput {
        lock(&self.input).clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.identity.borrow().identity.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    pub fn last_result(&self) -> Option<SubmissionResult> {
        lock(&self.last_result).clone()
    }

    /// Whether the submit action should be enabled
    pub fn can_submit(&self) -> bool {
        let input = lock(&self.input);
        self.identity.borrow().identity.is_some()
            && input.consent()
            && input.has_contact_info()
            && !self.is_submitting()
    }

    /// Run one submission attempt and record its result
    ///
    /// Never panics on failure and never leaves the submitting flag set.
    /// A submit rejected because another is in flight leaves `last_result`
    /// untouched; the in-flight attempt owns it.
    pub async fn submit(&self) -> SubmissionResult {
        let input = self.input();
        let identity = self.identity();
        let ctx = SubmissionContext::new(&input, identity.as_ref());

        let span = info_span!(
            "registration_submit",
            attempt_id = %ctx.attempt_id,
            external_user_id = ctx.external_user_id.as_deref().unwrap_or("-"),
        );

        let result = self.attempt(&ctx, &input, identity.as_ref()).instrument(span).await;

        if result.error() != Some(&RegistrationError::SubmissionInProgress) {
            *lock(&self.last_result) = Some(result.clone());
        }
        result
    }

    async fn attempt(
        &self,
        ctx: &SubmissionContext,
        input: &RegistrationInput,
        identity: Option<&Identity>,
    ) -> SubmissionResult {
        let request = match RegistrationProvider::validate(&self.settings, identity, input) {
            Ok(request) => request,
            Err(e) => {
                debug!(code = e.code(), "Submission preconditions not met");
                return SubmissionResult::from_error(e);
            }
        };

        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Submission already in flight");
            return SubmissionResult::from_error(RegistrationError::SubmissionInProgress);
        }
        let _guard = SubmittingGuard(&self.submitting);

        let Some(endpoint) = self.settings.registration_endpoint() else {
            return SubmissionResult::from_error(RegistrationError::endpoint_missing());
        };

        info!(
            phone_digits = ctx.phone_digit_count,
            has_storage_code = ctx.has_storage_code,
            "Submitting registration"
        );

        let result = self
            .registration_provider
            .send(endpoint, self.settings.api_key(), &request)
            .await;

        info!(success = result.is_success(), "Registration attempt settled");
        result
    }
}
