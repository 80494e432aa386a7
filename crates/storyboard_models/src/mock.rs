//! Scripted generation driver for tests.
//!
//! Responses are consumed in order; the last one repeats once the script runs
//! out. Every request is recorded.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use storyboard_core::{GenerateRequest, GenerateResponse, Output};
use storyboard_error::{GenerationError, GenerationErrorKind, StoryboardResult};
use storyboard_interface::GenerationDriver;

/// One scripted outcome.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A text part (JSON responses arrive as text)
    Text(String),
    /// An image part
    Image {
        /// MIME type
        mime: Option<String>,
        /// Raw bytes
        data: Vec<u8>,
    },
    /// A response with no parts
    Empty,
    /// A failed call
    Error(GenerationErrorKind),
}

/// Scripted [`GenerationDriver`].
#[derive(Debug)]
pub struct MockDriver {
    script: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<GenerateRequest>>,
    credential: bool,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockDriver {
    /// Driver answering with the given responses in order.
    pub fn new(responses: Vec<MockResponse>) -> Self {
        Self {
            script: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            credential: true,
            delay: None,
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// Driver always answering with the same text.
    pub fn new_text(text: impl Into<String>) -> Self {
        Self::new(vec![MockResponse::Text(text.into())])
    }

    /// Driver always failing with the given kind.
    pub fn new_error(kind: GenerationErrorKind) -> Self {
        Self::new(vec![MockResponse::Error(kind)])
    }

    /// Report no configured credential.
    pub fn without_credential(mut self) -> Self {
        self.credential = false;
        self
    }

    /// Sleep this long inside every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    /// Copies of every request received, in order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Highest number of calls that were in flight at once.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> MockResponse {
        let mut script = match self.script.lock() {
            Ok(script) => script,
            Err(poisoned) => poisoned.into_inner(),
        };
        if script.len() > 1 {
            script.pop_front().unwrap_or(MockResponse::Empty)
        } else {
            script.front().cloned().unwrap_or(MockResponse::Empty)
        }
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> StoryboardResult<GenerateResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req.clone());
        }

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.next_response() {
            MockResponse::Text(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text)],
            }),
            MockResponse::Image { mime, data } => Ok(GenerateResponse {
                outputs: vec![Output::Image { mime, data }],
            }),
            MockResponse::Empty => Ok(GenerateResponse::default()),
            MockResponse::Error(kind) => Err(GenerationError::new(kind).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn has_credential(&self) -> bool {
        self.credential
    }

    fn credential_hint(&self) -> &str {
        "MOCK_API_KEY"
    }
}
