use super::{CanComplete, CompletionRequest, GenerationError};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
enum Canned {
    Reply(String),
    Unconfigured,
}

/// Mock chat client returning a fixed response.
///
/// Counts calls and keeps the last request so tests can inspect what the
/// pipeline sent.
#[derive(Debug)]
pub struct MockChat {
    canned: Canned,
    calls: AtomicUsize,
    last: Mutex<Option<CompletionRequest>>,
}

impl MockChat {
    /// Always answers with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with(Canned::Reply(text.into()))
    }

    /// Always fails as if no API key were configured.
    pub fn unconfigured() -> Self {
        Self::with(Canned::Unconfigured)
    }

    fn with(canned: Canned) -> Self {
        Self {
            canned,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    /// Number of completions requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl Default for MockChat {
    fn default() -> Self {
        Self::unconfigured()
    }
}

#[async_trait]
impl CanComplete for MockChat {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError> {
        trace!(target: "llm", system = %request.system, user = %request.user, "MockChat prompt");
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last.lock() {
            *last = Some(request.clone());
        }
        match &self.canned {
            Canned::Reply(text) => {
                debug!(target: "llm", response = %text, "MockChat full response");
                Ok(text.clone())
            }
            Canned::Unconfigured => Err(GenerationError::MissingCredential),
        }
    }
}
