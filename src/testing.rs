//! Shared fakes for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::transport::{ApiRequest, ApiResponse, Transport, TransportError};
use crate::session::clock::FixedClock;
use crate::session::guard::SessionGuard;
use crate::session::navigation::RecordingNavigator;
use crate::session::store::{MemoryTokenStore, Session, TokenStore};
use crate::state::form::{FormHandle, FormKind, FormWorkflow};
use crate::util::schedule::Scheduler;

pub const NOW: i64 = 1_700_000_000;

/// Unsigned token whose payload is `payload`.
pub fn token_with_payload(payload: &str) -> String {
    format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
}

pub fn token_with_exp(exp: i64) -> String {
    token_with_payload(&format!(r#"{{"sub":"ada@example.com","exp":{exp}}}"#))
}

pub fn valid_session() -> Session {
    Session::from_token(token_with_exp(NOW + 3600), "ada@example.com").expect("valid token")
}

pub fn expired_session() -> Session {
    Session::from_token(token_with_exp(NOW - 1), "ada@example.com").expect("decodable token")
}

pub fn json_response(status: u16, body: &str) -> ApiResponse {
    ApiResponse {
        status,
        status_text: String::new(),
        body: body.as_bytes().to_vec(),
    }
}

/// Replays queued responses and records every request.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<ApiResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn respond(&self, response: ApiResponse) -> &Self {
        self.responses.borrow_mut().push_back(Ok(response));
        self
    }

    pub fn fail(&self, detail: &str) -> &Self {
        self.responses.borrow_mut().push_back(Err(TransportError(detail.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no response queued".to_owned())))
    }
}

/// Holds scheduled tasks until the test runs them.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    tasks: Rc<RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>>,
}

impl ManualScheduler {
    pub fn delays(&self) -> Vec<Duration> {
        self.tasks.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Run every queued task in scheduling order.
    pub fn run_all(&self) {
        let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) {
        self.tasks.borrow_mut().push((delay, task));
    }
}

impl<K: FormKind> FormHandle<K> for Rc<RefCell<FormWorkflow<K>>> {
    fn apply<R>(&self, f: impl FnOnce(&mut FormWorkflow<K>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

pub type TestGuard = SessionGuard<MemoryTokenStore, RecordingNavigator, FixedClock>;

/// Guard, client and scheduler wired to in-memory fakes.
pub struct Harness {
    pub guard: TestGuard,
    pub api: ApiClient<MockTransport>,
    pub transport: MockTransport,
    pub navigator: RecordingNavigator,
    pub store: MemoryTokenStore,
    pub scheduler: ManualScheduler,
}

impl Harness {
    pub fn new() -> Self {
        let store = MemoryTokenStore::default();
        let navigator = RecordingNavigator::default();
        let transport = MockTransport::default();
        Self {
            guard: SessionGuard::new(store.clone(), navigator.clone(), FixedClock(NOW)),
            api: ApiClient::new(ApiConfig::default(), transport.clone()),
            transport,
            navigator,
            store,
            scheduler: ManualScheduler::default(),
        }
    }

    pub fn signed_in() -> Self {
        let harness = Self::new();
        harness.store.save(&valid_session());
        harness
    }
}
