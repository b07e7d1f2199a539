//! Stub downstream services for integration tests.
//!
//! Each stub is a real Actix server on an ephemeral port. Routes answer with
//! canned responses queued per path prefix and every request is recorded, so
//! tests can assert exactly which downstream calls the gateway made.

use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, http::StatusCode, web};
use url::Url;

/// One request observed by a stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub trace_id: Option<String>,
}

/// Canned answer for one stub route.
#[derive(Debug, Clone)]
pub struct StubResponse {
    status: u16,
    body: String,
    delay: Option<Duration>,
}

impl StubResponse {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Default)]
struct StubState {
    routes: Mutex<Vec<(String, VecDeque<StubResponse>)>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubState {
    /// Pop the next answer for `path`; the last queued answer repeats.
    fn next_response(&self, path: &str) -> Option<StubResponse> {
        let mut routes = self.routes.lock().expect("routes lock");
        let (_, queue) = routes
            .iter_mut()
            .find(|(prefix, _)| path.starts_with(prefix.as_str()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

async fn handle(req: HttpRequest, state: web::Data<StubState>) -> HttpResponse {
    let path = req.uri().path().to_owned();
    state.calls.lock().expect("calls lock").push(RecordedCall {
        method: req.method().to_string(),
        path: path.clone(),
        trace_id: req
            .headers()
            .get("trace-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
    });

    let Some(response) = state.next_response(&path) else {
        return HttpResponse::NotFound().finish();
    };
    if let Some(delay) = response.delay {
        actix_web::rt::time::sleep(delay).await;
    }
    let status = StatusCode::from_u16(response.status).expect("stub status is valid");
    HttpResponse::build(status)
        .content_type("application/json")
        .body(response.body)
}

/// Running stub server.
pub struct StubService {
    base_url: Url,
    state: web::Data<StubState>,
    handle: ServerHandle,
}

impl StubService {
    /// Start a stub mounted under `mount` (e.g. `/core/`).
    pub async fn start(mount: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let state = web::Data::new(StubState::default());
        let server_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(server_state.clone())
                .default_service(web::to(handle))
        })
        .disable_signals()
        .workers(1)
        .listen(listener)
        .expect("listen on ephemeral port")
        .run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        let base_url =
            Url::parse(&format!("http://{addr}{mount}")).expect("stub base URL parses");
        Self {
            base_url,
            state,
            handle,
        }
    }

    /// Queue answers for requests whose path starts with `prefix`.
    pub fn respond(&self, prefix: &str, responses: impl IntoIterator<Item = StubResponse>) {
        self.state
            .routes
            .lock()
            .expect("routes lock")
            .push((prefix.to_owned(), responses.into_iter().collect()));
    }

    pub fn base_url(&self) -> Url {
        self.base_url.clone()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().expect("calls lock").clone()
    }

    /// Calls whose path starts with `prefix`.
    pub fn calls_to(&self, prefix: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.path.starts_with(prefix))
            .collect()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// Base URL on which nothing is listening.
pub fn unreachable_base_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    Url::parse(&format!("http://{addr}/")).expect("URL parses")
}
