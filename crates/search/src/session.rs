//! Debounced search session.
//!
//! One session per search box. Keystrokes arrive through
//! [`SearchSession::set_input`]; the query key lags the raw input by the
//! debounce window, and a query is only issued when the debounced value
//! actually changes. Results are published through a watch channel.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use steamshelf_steam_api::GameRecord;

use crate::error::SearchError;
use crate::types::{SearchPhase, SearchState};

/// Delay the debounced query key lags the raw input by.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Abstract library lookup performed on behalf of a session.
///
/// The server implements this on top of the Steam client so the API key
/// stays behind the process boundary. Tests mock it.
pub trait LibraryProvider: Send + Sync + 'static {
    /// Resolves a username and fetches its library.
    fn lookup(
        &self,
        username: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<GameRecord>, SearchError>> + Send + '_>>;
}

/// A single user's debounced search over their input box.
///
/// Cheap to clone; all clones share the same state.
#[derive(Clone)]
pub struct SearchSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    provider: Arc<dyn LibraryProvider>,
    state_tx: watch::Sender<SearchState>,
    /// Bumped on every keystroke; a debounce task only fires if it still
    /// holds the latest sequence number once the window elapses.
    input_seq: AtomicU64,
    /// Bumped per issued query and compared again at resolution time, so a
    /// superseded in-flight result is dropped. No cancellation is sent
    /// upstream; the stale request is left to complete. Guarded together
    /// with state publication: a result may only land while it still holds
    /// the current generation.
    query_gen: Mutex<u64>,
    /// Last debounced value that issued a query.
    debounced: Mutex<Option<String>>,
    window: Duration,
}

impl SearchSession {
    /// Creates a session with the standard debounce window.
    pub fn new(provider: Arc<dyn LibraryProvider>) -> Self {
        Self::with_window(provider, DEBOUNCE_WINDOW)
    }

    /// Creates a session with a custom debounce window.
    pub fn with_window(provider: Arc<dyn LibraryProvider>, window: Duration) -> Self {
        let (state_tx, _) = watch::channel(SearchState::idle());
        Self {
            inner: Arc::new(SessionInner {
                provider,
                state_tx,
                input_seq: AtomicU64::new(0),
                query_gen: Mutex::new(0),
                debounced: Mutex::new(None),
                window,
            }),
        }
    }

    /// Subscribes to state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state_tx.subscribe()
    }

    /// Returns the latest published state.
    pub fn state(&self) -> SearchState {
        self.inner.state_tx.borrow().clone()
    }

    /// Feeds a keystroke.
    ///
    /// The raw input takes effect immediately; the query key only updates
    /// once the input has been stable for the debounce window. Must be
    /// called from within a Tokio runtime.
    pub fn set_input(&self, text: impl Into<String>) {
        let text = text.into();
        let inner = Arc::clone(&self.inner);
        let seq = inner.input_seq.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::spawn(async move {
            tokio::time::sleep(inner.window).await;
            if inner.input_seq.load(Ordering::SeqCst) != seq {
                // A newer keystroke arrived inside the window.
                return;
            }
            inner.issue_query(text).await;
        });
    }
}

impl SessionInner {
    async fn issue_query(&self, query: String) {
        {
            let mut debounced = self.debounced.lock().unwrap();
            if debounced.as_deref() == Some(query.as_str()) {
                // Debounced value unchanged, e.g. type-delete-retype.
                return;
            }
            *debounced = Some(query.clone());
        }

        let generation = {
            let mut current = self.query_gen.lock().unwrap();
            *current += 1;
            debug!(%query, generation = *current, "issuing library query");
            // send_replace: the snapshot must update even with no subscriber yet.
            let _ = self.state_tx.send_replace(SearchState {
                query: query.clone(),
                phase: SearchPhase::Pending,
            });
            *current
        };

        let result = self.provider.lookup(&query).await;

        // Bumping the generation and publishing happen under the same lock,
        // so a stale result cannot land after a newer query went pending.
        let current = self.query_gen.lock().unwrap();
        if *current != generation {
            debug!(%query, generation, "discarding superseded query result");
            return;
        }

        let phase = match result {
            Ok(games) => SearchPhase::Success { games },
            Err(e) => SearchPhase::Error {
                message: e.to_string(),
            },
        };
        let _ = self.state_tx.send_replace(SearchState { query, phase });
    }
}
