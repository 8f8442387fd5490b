//! reqwest（blocking）による HttpTransport 実装

use crate::error::Error;
use crate::ports::outbound::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use std::time::Duration;

/// 1 リクエストあたりのタイムアウト
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest::blocking::Client を使う HttpTransport 実装
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// # Returns
    /// * `Ok(Self)` - トランスポート
    /// * `Err(Error)` - クライアント生成（TLS 初期化等）に失敗した場合
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .map_err(|e| Error::http(format!("{} {} failed: {}", request.method.as_str(), request.url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| Error::io_msg(format!("Failed to read response body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
