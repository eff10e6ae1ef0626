use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{OnceCell, watch};
use tracing::{debug, info, warn};

use crate::AppData;
use crate::errors::RegistrationError;
use crate::providers::IdentityProvider;
use crate::types::internal::{AcquisitionOutcome, AcquisitionState, Identity};

enum Flow {
    Identity(Identity),
    Redirected,
    Cancelled,
}

/// Obtains the user's identity from the login SDK and publishes view state
///
/// Every `acquire()` performs the same steps, including the `is_logged_in`
/// check, so the flow resumes correctly after a login redirect returns.
/// Once `teardown()` is called no state is published any more.
pub struct IdentityAcquisition {
    provider: Arc<dyn IdentityProvider>,
    provider_app_id: Option<String>,
    sdk_ready: Arc<OnceCell<()>>,
    state: watch::Sender<AcquisitionState>,
    torn_down: AtomicBool,
}

impl IdentityAcquisition {
    pub fn new(app_data: &AppData, provider: Arc<dyn IdentityProvider>) -> Self {
        let (state, _) = watch::channel(AcquisitionState::idle());

        Self {
            provider,
            provider_app_id: app_data.settings.provider_app_id().map(str::to_string),
            sdk_ready: Arc::clone(&app_data.sdk_ready),
            state,
            torn_down: AtomicBool::new(false),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AcquisitionState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> AcquisitionState {
        self.state.borrow().clone()
    }

    /// Mark the hosting view as gone; later results are discarded
    pub fn teardown(&self) {
        self.torn_down.store(true, Ordering::SeqCst);
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    /// Returns false, without publishing, once torn down
    fn publish(&self, state: AcquisitionState) -> bool {
        if self.is_torn_down() {
            debug!("Acquisition torn down; dropping state update");
            return false;
        }
        self.state.send_replace(state);
        true
    }

    pub async fn acquire(&self) -> AcquisitionOutcome {
        let Some(app_id) = self.provider_app_id.as_deref() else {
            let error = RegistrationError::provider_id_missing();
            warn!("Identity acquisition skipped: {}", error);
            if !self.publish(AcquisitionState::failed(error.clone())) {
                return AcquisitionOutcome::Cancelled;
            }
            return AcquisitionOutcome::Failed(error);
        };

        if !self.publish(AcquisitionState::loading()) {
            return AcquisitionOutcome::Cancelled;
        }

        match self.run(app_id).await {
            Ok(Flow::Identity(identity)) => {
                info!(user_id = %identity.id, "Identity acquired");
                if !self.publish(AcquisitionState::acquired(identity.clone())) {
                    return AcquisitionOutcome::Cancelled;
                }
                AcquisitionOutcome::Acquired(identity)
            }
            Ok(Flow::Redirected) => {
                info!("User not logged in; redirected to provider login");
                if !self.publish(AcquisitionState::idle()) {
                    return AcquisitionOutcome::Cancelled;
                }
                AcquisitionOutcome::RedirectedToLogin
            }
            Ok(Flow::Cancelled) => AcquisitionOutcome::Cancelled,
            Err(error) => {
                warn!(code = error.code(), "Identity acquisition failed: {}", error);
                if !self.publish(AcquisitionState::failed(error.clone())) {
                    return AcquisitionOutcome::Cancelled;
                }
                AcquisitionOutcome::Failed(error)
            }
        }
    }

    async fn run(&self, app_id: &str) -> Result<Flow, RegistrationError> {
        // Shared across every acquisition of the session, so the SDK loads once.
        // A failed load leaves the cell empty and the next acquisition tries again.
        self.sdk_ready
            .get_or_try_init(|| async {
                debug!("Loading identity provider SDK");
                self.provider.load().await
            })
            .await?;
        if self.is_torn_down() {
            return Ok(Flow::Cancelled);
        }

        self.provider.init(app_id).await?;
        if self.is_torn_down() {
            return Ok(Flow::Cancelled);
        }

        if !self.provider.is_logged_in() {
            self.provider.login().await?;
            return Ok(Flow::Redirected);
        }

        let profile = self.provider.get_profile().await?;
        if self.is_torn_down() {
            return Ok(Flow::Cancelled);
        }

        Ok(Flow::Identity(profile.into()))
    }
}
