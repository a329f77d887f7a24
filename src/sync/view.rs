use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::errors::ApiError;

/// Shared view of one polled resource collection.
///
/// A refresh failure only records the error; the previously applied data
/// stays in place, so a view goes stale rather than blank. Each successful
/// refresh bumps `seq`, letting a consumer tell "unchanged" from "missed".
#[derive(Debug, Clone)]
pub struct PollView<T> {
    inner: Arc<Mutex<ViewSnapshot<T>>>,
}

#[derive(Debug, Clone)]
pub struct ViewSnapshot<T> {
    pub data: T,
    /// Number of successful refreshes applied so far.
    pub seq: u64,
    pub last_updated: Option<DateTime<Utc>>,
    /// Message from the most recent failed refresh; cleared on success.
    pub last_error: Option<String>,
    /// True until the first refresh attempt completes, like the initial
    /// page-load state.
    pub loading: bool,
}

impl<T: Clone + Default> PollView<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ViewSnapshot {
                data: T::default(),
                seq: 0,
                last_updated: None,
                last_error: None,
                loading: true,
            })),
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot<T> {
        self.inner.lock().expect("view lock poisoned").clone()
    }

    /// Replaces the data wholesale with a fresh server result.
    pub(crate) fn apply_ok(&self, data: T) {
        let mut state = self.inner.lock().expect("view lock poisoned");
        state.data = data;
        state.seq += 1;
        state.last_updated = Some(Utc::now());
        state.last_error = None;
        state.loading = false;
    }

    /// Records a failed refresh without touching the rendered data.
    pub(crate) fn apply_err(&self, err: &ApiError) {
        let mut state = self.inner.lock().expect("view lock poisoned");
        state.last_error = Some(err.to_string());
        state.loading = false;
    }
}

impl<T: Clone + Default> Default for PollView<T> {
    fn default() -> Self {
        Self::new()
    }
}
