//! テスト用のモックアダプタ

use common::domain::{ApiKey, StateDir};
use common::error::Error;
use common::ports::outbound::env_resolver::DEFAULT_API_BASE;
use common::ports::outbound::{EnvResolver, HttpRequest, HttpResponse, HttpTransport};
use std::sync::{Arc, Mutex};

/// 固定値を返す EnvResolver
pub struct MockEnv {
    pub key: Option<&'static str>,
}

impl EnvResolver for MockEnv {
    fn api_key(&self) -> Result<ApiKey, Error> {
        self.key
            .map(ApiKey::new)
            .ok_or_else(|| Error::env("GEMINI_API_KEY environment variable not set"))
    }

    fn api_base(&self) -> String {
        DEFAULT_API_BASE.to_string()
    }

    fn resolve_state_dir(&self) -> Result<StateDir, Error> {
        Err(Error::env("no state dir in tests"))
    }
}

/// 送信内容を記録し、固定レスポンスを返す HttpTransport
pub struct RecordingTransport {
    pub sent: Mutex<Vec<HttpRequest>>,
    response: HttpResponse,
}

impl RecordingTransport {
    pub fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            response: HttpResponse {
                status,
                body: body.to_string(),
            },
        })
    }
}

impl HttpTransport for RecordingTransport {
    fn post_json(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        self.sent.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}
