//! Debounced search dispatch
//!
//! [`SearchController`] decides *when* a catalog query is sent and with which
//! text. Keystrokes go through [`SearchController::input`], which keeps at
//! most one timer armed and only emits the text present when the settle delay
//! finally elapses. Explicit submissions (button, Enter) go through
//! [`SearchController::submit`], which disarms the timer and emits at once.
//!
//! Requests are delivered on an unbounded channel. The controller is meant
//! for a single-threaded runtime: once a timer has expired its request is
//! already on the channel, and nothing already sent is ever withdrawn.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Sent after the settle delay
    Deferred,
    /// Sent at once, bypassing the timer
    Immediate,
}

/// A query the consumer should send to the search endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Increases with every emitted request, in emission order
    pub generation: u64,
    /// Trimmed query text; empty means the whole catalog
    pub query: String,
    pub mode: SearchMode,
}

impl SearchRequest {
    pub fn is_full_catalog(&self) -> bool {
        self.query.is_empty()
    }
}

pub struct SearchController {
    delay: Duration,
    sender: UnboundedSender<SearchRequest>,
    pending: Option<JoinHandle<()>>,
    generation: Arc<AtomicU64>,
}

impl SearchController {
    /// Create a controller and the receiving end of its request channel
    pub fn new(delay: Duration) -> (Self, UnboundedReceiver<SearchRequest>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let controller = Self {
            delay,
            sender,
            pending: None,
            generation: Arc::new(AtomicU64::new(0)),
        };
        (controller, receiver)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Input-change event: re-arm the timer with the latest text.
    ///
    /// Must be called from within a tokio runtime.
    pub fn input(&mut self, text: &str) {
        self.cancel();

        let query = text.trim().to_string();
        let delay = self.delay;
        let sender = self.sender.clone();
        let generation = Arc::clone(&self.generation);

        tracing::debug!("Search armed for {:?} ({} ms)", query, delay.as_millis());
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            emit(&sender, &generation, query, SearchMode::Deferred);
        }));
    }

    /// Explicit submission: disarm any pending timer and emit now
    pub fn submit(&mut self, text: &str) {
        self.cancel();
        emit(
            &self.sender,
            &self.generation,
            text.trim().to_string(),
            SearchMode::Immediate,
        );
    }

    /// Disarm the pending timer, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                tracing::debug!("Pending search cancelled");
            }
            handle.abort();
        }
    }

    /// True while a timer is armed and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn emit(
    sender: &UnboundedSender<SearchRequest>,
    generation: &AtomicU64,
    query: String,
    mode: SearchMode,
) {
    let generation = generation.fetch_add(1, Ordering::SeqCst) + 1;
    tracing::debug!("Search #{} emitted ({:?}): {:?}", generation, mode, query);
    if sender
        .send(SearchRequest {
            generation,
            query,
            mode,
        })
        .is_err()
    {
        tracing::warn!("Search request dropped, no consumer listening");
    }
}

/// Latest-wins filter for search responses.
///
/// Responses may resolve in a different order than their requests were sent.
/// The gate accepts a response only if it is newer than the last one rendered.
#[derive(Debug, Default)]
pub struct SearchGate {
    latest: u64,
}

impl SearchGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, generation: u64) -> bool {
        if generation > self.latest {
            self.latest = generation;
            true
        } else {
            tracing::debug!("Stale search response #{} discarded", generation);
            false
        }
    }
}
