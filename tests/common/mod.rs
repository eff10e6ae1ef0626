// Common test utilities for integration tests

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use contact_registration::AppData;
use contact_registration::config::{ApiKey, RegistrationSettings};
use contact_registration::errors::ProviderError;
use contact_registration::providers::{IdentityProvider, Profile};
use poem::http::StatusCode;
use poem::listener::{Acceptor, Listener, TcpListener};
use poem::web::Data;
use poem::{EndpointExt, Request, Response, Route, Server, handler, post};
use tokio::sync::Notify;

/// One request received by the mock webhook
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub body: serde_json::Value,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
}

struct WebhookState {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    requests: Mutex<Vec<CapturedRequest>>,
}

/// Registration endpoint stand-in served by poem on an ephemeral port
pub struct MockWebhook {
    pub url: String,
    state: Arc<WebhookState>,
}

impl MockWebhook {
    pub async fn start(status: u16, body: &str) -> Self {
        Self::start_with_delay(status, body, None).await
    }

    /// Replies only after `delay`, to observe in-flight state
    pub async fn start_with_delay(status: u16, body: &str, delay: Option<Duration>) -> Self {
        let state = Arc::new(WebhookState {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
            delay,
            requests: Mutex::new(Vec::new()),
        });

        let acceptor = TcpListener::bind("127.0.0.1:0")
            .into_acceptor()
            .await
            .expect("Failed to bind mock webhook");
        let addr: SocketAddr = *acceptor
            .local_addr()
            .remove(0)
            .as_socket_addr()
            .expect("mock webhook bound to a socket address");

        let app = Route::new().at("/webhook/register", post(register)).data(state.clone());
        tokio::spawn(async move {
            let _ = Server::new_with_acceptor(acceptor).run(app).await;
        });

        Self {
            url: format!("http://{}/webhook/register", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }
}

#[handler]
async fn register(req: &Request, body: String, state: Data<&Arc<WebhookState>>) -> Response {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().expect("requests lock").push(CapturedRequest {
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
        api_key: header("x-api-key"),
        content_type: header("content-type"),
    });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    Response::builder()
        .status(state.status)
        .content_type("application/json")
        .body(state.body.clone())
}

/// Settings pointing at `endpoint`, with a short timeout
pub fn settings_for(endpoint: Option<&str>, api_key: Option<&str>) -> RegistrationSettings {
    RegistrationSettings::new(
        Some("1657000000-test".to_string()),
        endpoint.map(str::to_string),
        api_key.map(ApiKey::new),
    )
    .with_request_timeout(Duration::from_secs(5))
}

pub fn app_data_for(endpoint: Option<&str>, api_key: Option<&str>) -> AppData {
    AppData::from_settings(settings_for(endpoint, api_key)).expect("Failed to build AppData")
}

pub fn test_profile() -> Profile {
    Profile {
        user_id: "U4af4980629".to_string(),
        display_name: "Taro Yamada".to_string(),
        picture_url: Some("https://profile.example.com/u4af4980629".to_string()),
    }
}

/// Scriptable identity provider that counts calls
pub struct MockIdentityProvider {
    pub load_calls: AtomicUsize,
    pub init_calls: AtomicUsize,
    pub login_calls: AtomicUsize,
    pub profile_calls: AtomicUsize,
    load_error: Option<ProviderError>,
    init_error: Option<ProviderError>,
    login_error: Option<ProviderError>,
    logged_in: bool,
    profile: Result<Profile, ProviderError>,
    profile_gate: Option<Arc<Notify>>,
    profile_requested: Arc<Notify>,
}

impl MockIdentityProvider {
    pub fn logged_in() -> Self {
        Self {
            load_calls: AtomicUsize::new(0),
            init_calls: AtomicUsize::new(0),
            login_calls: AtomicUsize::new(0),
            profile_calls: AtomicUsize::new(0),
            load_error: None,
            init_error: None,
            login_error: None,
            logged_in: true,
            profile: Ok(test_profile()),
            profile_gate: None,
            profile_requested: Arc::new(Notify::new()),
        }
    }

    pub fn logged_out() -> Self {
        Self {
            logged_in: false,
            ..Self::logged_in()
        }
    }

    pub fn with_load_error(mut self, message: &str) -> Self {
        self.load_error = Some(ProviderError::Load(message.to_string()));
        self
    }

    pub fn with_init_error(mut self, message: &str) -> Self {
        self.init_error = Some(ProviderError::Init(message.to_string()));
        self
    }

    pub fn with_login_error(mut self, message: &str) -> Self {
        self.login_error = Some(ProviderError::Login(message.to_string()));
        self
    }

    pub fn with_profile_error(mut self, message: &str) -> Self {
        self.profile = Err(ProviderError::Profile(message.to_string()));
        self
    }

    /// `get_profile` waits until the returned notify is triggered
    pub fn with_profile_gate(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.profile_gate = Some(gate.clone());
        (self, gate)
    }

    /// Notified when `get_profile` is entered
    pub fn profile_requested(&self) -> Arc<Notify> {
        self.profile_requested.clone()
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn load(&self) -> Result<(), ProviderError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        match &self.load_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    async fn init(&self, _app_id: &str) -> Result<(), ProviderError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        match &self.init_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    async fn login(&self) -> Result<(), ProviderError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        match &self.login_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    async fn get_profile(&self) -> Result<Profile, ProviderError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profile_requested.notify_one();
        if let Some(gate) = &self.profile_gate {
            gate.notified().await;
        }
        self.profile.clone()
    }
}
