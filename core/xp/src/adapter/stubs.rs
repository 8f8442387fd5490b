//! テスト用のスタブ実装（HTTP・待機・乱数）

use crate::domain::DelayWindow;
use crate::ports::outbound::{JitterSource, Pacer};
use common::error::Error;
use common::ports::outbound::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

struct Route {
    method: HttpMethod,
    url_contains: String,
    response: Result<HttpResponse, Error>,
}

/// 送信されたリクエストを記録し、用意したレスポンスを返す HttpTransport
///
/// キューに積んだレスポンスを先に使い、空なら method と URL の部分一致でルートを引く。
/// どれにも当たらなければ通信エラーを返す。
#[derive(Default)]
pub struct StubTransport {
    queue: Mutex<VecDeque<Result<HttpResponse, Error>>>,
    routes: Mutex<Vec<Route>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// 何度でも同じレスポンスを返すルートを登録する
    pub fn route(&self, method: HttpMethod, url_contains: &str, status: u16, body: &str) -> &Self {
        self.routes.lock().unwrap().push(Route {
            method,
            url_contains: url_contains.to_string(),
            response: Ok(HttpResponse::new(status, body)),
        });
        self
    }

    /// 通信自体が失敗するルート
    pub fn route_error(&self, method: HttpMethod, url_contains: &str, message: &str) -> &Self {
        self.routes.lock().unwrap().push(Route {
            method,
            url_contains: url_contains.to_string(),
            response: Err(Error::http(message)),
        });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// method が一致し URL に文字列を含むリクエストの数
    pub fn count(&self, method: HttpMethod, url_contains: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.url.contains(url_contains))
            .count()
    }
}

impl HttpTransport for StubTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        self.sent.lock().unwrap().push(request.clone());
        if let Some(queued) = self.queue.lock().unwrap().pop_front() {
            return queued;
        }
        let routes = self.routes.lock().unwrap();
        routes
            .iter()
            .find(|r| r.method == request.method && request.url.contains(&r.url_contains))
            .map(|r| r.response.clone())
            .unwrap_or_else(|| {
                Err(Error::http(format!(
                    "no stub for {} {}",
                    request.method.as_str(),
                    request.url
                )))
            })
    }
}

/// 待機せずに要求された時間を記録する Pacer
#[derive(Default)]
pub struct RecordingPacer {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}

/// 常に範囲の下限を返す JitterSource
pub struct LowerBoundJitter;

impl JitterSource for LowerBoundJitter {
    fn pick_ms(&self, window: &DelayWindow) -> u64 {
        window.min_ms()
    }
}
