//! Fetch lifecycle for the demo chart.
//!
//! Each fetch attempt gets an [`AttemptGuard`]. Starting a newer attempt or
//! tearing the view down cancels the guard, and every state commit checks it
//! first, so a late response can never overwrite newer state.

use crate::expense::{records_from_payload, ExpenseRecord};
use crate::source::ExpenseSource;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Http(u16),
    #[error("invalid JSON in response: {0}")]
    Decode(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<ExpenseRecord>),
    Failed(String),
}

impl LoadState {
    pub fn from_result(result: Result<serde_json::Value, FetchError>) -> Self {
        match result {
            Ok(payload) => Self::Loaded(records_from_payload(&payload)),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AttemptGuard {
    id: u64,
    live: Rc<Cell<bool>>,
}

impl AttemptGuard {
    fn new(id: u64) -> Self {
        Self {
            id,
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    fn cancel(&self) {
        self.live.set(false);
    }

    /// Hands `state` to `commit` only while this attempt is still current.
    pub fn commit(&self, state: LoadState, commit: &mut impl FnMut(LoadState)) -> bool {
        if !self.is_live() {
            debug!(attempt = self.id, "discarding stale result");
            return false;
        }

        commit(state);
        true
    }
}

/// Owned by one mounted chart view.
#[derive(Debug, Clone, Default)]
pub struct AttemptTracker {
    current: Rc<RefCell<Option<AttemptGuard>>>,
    started: Rc<Cell<u64>>,
}

impl AttemptTracker {
    pub fn begin(&self) -> AttemptGuard {
        self.cancel();

        let id = self.started.get() + 1;
        self.started.set(id);

        let guard = AttemptGuard::new(id);
        *self.current.borrow_mut() = Some(guard.clone());
        guard
    }

    pub fn cancel(&self) {
        if let Some(guard) = self.current.borrow_mut().take() {
            guard.cancel();
        }
    }
}

/// Runs one fetch attempt: `Loading`, then `Loaded` or `Failed`.
///
/// Returns whether the final state was applied.
pub async fn run_attempt<S: ExpenseSource>(
    source: &S,
    guard: &AttemptGuard,
    mut commit: impl FnMut(LoadState),
) -> bool {
    debug!(attempt = guard.id(), source = %source.describe(), "fetching expenses");

    if !guard.commit(LoadState::Loading, &mut commit) {
        return false;
    }

    let result = source.fetch().await;
    if let Err(e) = &result {
        if guard.is_live() {
            warn!(attempt = guard.id(), error = %e, "expense fetch failed");
        }
    }

    guard.commit(LoadState::from_result(result), &mut commit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use serde_json::{json, Value};

    struct Canned(Result<Value, FetchError>);

    impl ExpenseSource for Canned {
        async fn fetch(&self) -> Result<Value, FetchError> {
            self.0.clone()
        }

        fn describe(&self) -> String {
            "canned".to_string()
        }
    }

    /// Resolves only once the test sends a response down the channel.
    struct Deferred(RefCell<Option<oneshot::Receiver<Result<Value, FetchError>>>>);

    impl Deferred {
        fn new() -> (Self, oneshot::Sender<Result<Value, FetchError>>) {
            let (tx, rx) = oneshot::channel();
            (Self(RefCell::new(Some(rx))), tx)
        }
    }

    impl ExpenseSource for Deferred {
        async fn fetch(&self) -> Result<Value, FetchError> {
            let rx = self.0.borrow_mut().take();
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(FetchError::Transport("dropped".into()))),
                None => Err(FetchError::Transport("already fetched".into())),
            }
        }

        fn describe(&self) -> String {
            "deferred".to_string()
        }
    }

    fn run(source: &impl ExpenseSource) -> Vec<LoadState> {
        let tracker = AttemptTracker::default();
        let guard = tracker.begin();
        let mut states = vec![];
        let applied = block_on(run_attempt(source, &guard, |s| states.push(s)));
        assert!(applied);
        states
    }

    #[test]
    fn loads_records() {
        let payload = json!([
            {"category": "Food", "amount": 124.5},
            {"category": "Transport", "amount": 48.2},
        ]);

        let states = run(&Canned(Ok(payload)));
        assert_eq!(
            states,
            vec![
                LoadState::Loading,
                LoadState::Loaded(vec![
                    ExpenseRecord::new("Food", 124.5),
                    ExpenseRecord::new("Transport", 48.2),
                ]),
            ]
        );
    }

    #[test]
    fn http_error_fails_with_status() {
        let states = run(&Canned(Err(FetchError::Http(500))));
        assert_eq!(states.len(), 2);
        match &states[1] {
            LoadState::Failed(msg) => assert!(msg.contains("500"), "{msg}"),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn transport_error_keeps_its_text() {
        let states = run(&Canned(Err(FetchError::Transport("connection refused".into()))));
        assert_eq!(states[1], LoadState::Failed("connection refused".into()));
    }

    #[test]
    fn non_array_body_loads_empty() {
        let states = run(&Canned(Ok(json!({}))));
        assert_eq!(states[1], LoadState::Loaded(vec![]));
    }

    #[test]
    fn error_messages() {
        assert_eq!(FetchError::Http(404).to_string(), "HTTP 404");
        assert_eq!(
            FetchError::Timeout(Duration::from_secs(10)).to_string(),
            "request timed out after 10s"
        );
        assert_eq!(
            FetchError::Timeout(Duration::from_millis(2500)).to_string(),
            "request timed out after 2.5s"
        );
        assert_eq!(
            FetchError::Timeout(Duration::from_millis(500)).to_string(),
            "request timed out after 500ms"
        );
    }

    #[test]
    fn response_after_teardown_is_dropped() {
        let (source, tx) = Deferred::new();
        let tracker = AttemptTracker::default();
        let guard = tracker.begin();
        let mut states = vec![];

        let (applied, _) = block_on(futures::future::join(
            run_attempt(&source, &guard, |s| states.push(s)),
            async {
                tracker.cancel();
                let _ = tx.send(Ok(json!([{"category": "Food", "amount": 1}])));
            },
        ));

        assert!(!applied);
        assert!(!guard.is_live());
        assert_eq!(states, vec![LoadState::Loading]);
    }

    #[test]
    fn newer_attempt_supersedes_older() {
        let (slow, tx) = Deferred::new();
        let fast = Canned(Ok(json!([{"category": "Fun", "amount": 52.75}])));
        let tracker = AttemptTracker::default();
        let mut states = vec![];

        let first = tracker.begin();
        let (first_applied, second_applied) = block_on(async {
            let mut log = |s: LoadState| states.push(s);

            let (first_applied, second) = {
                let older = run_attempt(&slow, &first, &mut log);
                futures::pin_mut!(older);

                // Poll the older attempt up to its network wait.
                assert!(futures::poll!(older.as_mut()).is_pending());

                let second = tracker.begin();
                let _ = tx.send(Ok(json!([{"category": "Stale", "amount": 1}])));
                (older.await, second)
            };

            assert_eq!(second.id(), 2);
            let second_applied = run_attempt(&fast, &second, &mut log).await;
            (first_applied, second_applied)
        });

        assert!(!first_applied);
        assert!(second_applied);
        assert_eq!(first.id(), 1);
        assert_eq!(
            states,
            vec![
                LoadState::Loading,
                LoadState::Loading,
                LoadState::Loaded(vec![ExpenseRecord::new("Fun", 52.75)]),
            ]
        );
    }

    #[test]
    fn cancelled_before_start_commits_nothing() {
        let tracker = AttemptTracker::default();
        let guard = tracker.begin();
        tracker.cancel();

        let mut states = vec![];
        let applied = block_on(run_attempt(&Canned(Ok(json!([]))), &guard, |s| states.push(s)));
        assert!(!applied);
        assert!(states.is_empty());
    }
}
