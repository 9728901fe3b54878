//! reqwest (blocking) による HttpTransport 実装

use crate::error::Error;
use crate::ports::outbound::{HttpRequest, HttpResponse, HttpTransport};

/// reqwest::blocking で POST する HttpTransport
///
/// タイムアウトは reqwest の既定のまま。リトライはしない。
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let body = serde_json::to_string(&request.body)?;
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        // URL に API キーが含まれるため、reqwest のエラーからは URL を外して表示する
        let response = builder
            .body(body)
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e.without_url())))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e.without_url())))?;

        Ok(HttpResponse { status, body })
    }
}
