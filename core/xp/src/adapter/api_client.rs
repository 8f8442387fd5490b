//! 学習プラットフォーム API への共通クライアント（URL 組み立てと認証ヘッダ）

use crate::domain::{ApiSettings, Credentials};
use common::error::Error;
use common::ports::outbound::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use std::sync::Arc;

/// HttpTransport の上に base URL と認証ヘッダを載せる
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    settings: ApiSettings,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>, settings: ApiSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    /// base URL と相対パスを `/` 1 つで連結する
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn headers(&self, credentials: &Credentials) -> Vec<(String, String)> {
        vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
            (
                "Authorization".to_string(),
                format!("Bearer {}", credentials.token.expose()),
            ),
            ("User-Agent".to_string(), self.settings.user_agent.clone()),
        ]
    }

    pub fn get(&self, credentials: &Credentials, path: &str) -> Result<HttpResponse, Error> {
        let request = HttpRequest::new(HttpMethod::Get, self.url(path)).headers(self.headers(credentials));
        self.transport.send(&request)
    }

    pub fn send_json(
        &self,
        credentials: &Credentials,
        method: HttpMethod,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, Error> {
        let request = HttpRequest::new(method, self.url(path))
            .headers(self.headers(credentials))
            .json_body(body);
        self.transport.send(&request)
    }
}
