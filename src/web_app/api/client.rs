// web_app/api/client.rs - HTTP client for the record service
//
// Wraps reqwest for the single `POST /record` call and keeps one shared
// client for the server functions, with an override hook for tests.

use std::sync::Mutex;
use std::sync::OnceLock;

use crate::web_app::api::config::ServiceConfig;
use crate::web_app::model::{RecordError, RecordRequest, RecordResponse};

static CLIENT: OnceLock<RecordClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<RecordClient>> = Mutex::new(None);

#[derive(Clone, Debug)]
pub struct RecordClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl RecordClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Send one description to the record service.
    ///
    /// Any non-2xx status is reported as `RecordError::Status` without
    /// looking at the body. No retry, no client-side timeout.
    pub async fn record(&self, request: &RecordRequest) -> Result<RecordResponse, RecordError> {
        let url = self.config.record_url();
        tracing::debug!("POST {} description='{}'", url, request.description);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| RecordError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Record service returned {}", status);
            return Err(RecordError::Status(status.as_u16()));
        }

        response
            .json::<RecordResponse>()
            .await
            .map_err(|e| RecordError::Decode(e.to_string()))
    }
}

/// Initialize the global record client
pub fn init_client(client: RecordClient) {
    tracing::info!("Initializing record client for {}", client.config.record_url());
    if CLIENT.set(client).is_err() {
        tracing::warn!("Record client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: RecordClient) {
    if let Ok(mut guard) = TEST_CLIENT_OVERRIDE.lock() {
        *guard = Some(client);
    }
}

/// Get the record client: test override first, then the global one, then a
/// client built from the environment.
pub fn get_client() -> RecordClient {
    if let Ok(guard) = TEST_CLIENT_OVERRIDE.lock() {
        if let Some(ref client) = *guard {
            return client.clone();
        }
    }

    CLIENT
        .get_or_init(|| {
            tracing::warn!("Record client not initialized, reading configuration from environment");
            RecordClient::new(ServiceConfig::from_env())
        })
        .clone()
}
