//! Fetches launches in the background and publishes the result.
//!
//! State lives in a `watch` channel. Every change goes through
//! `send_modify`, so a subscriber never sees `launches` and `is_loading`
//! out of step with each other.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::external_api::spacex_api::models::launch::Launch;
use crate::external_api::spacex_api::SpacexApi;
use crate::filter::LaunchFilter;

/// What observers of a [`LaunchFetcher`] see
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchState {
    /// Result of the last successful fetch
    pub launches: Vec<Launch>,
    /// True from `fetch_launches` until its request finishes
    pub is_loading: bool,
    /// Message of the last failed fetch, cleared on success
    pub last_error: Option<String>,
}

/// Handle to the session's launch list. Clones share the same state.
#[derive(Debug, Clone)]
pub struct LaunchFetcher {
    api: Arc<SpacexApi>,
    state: Arc<watch::Sender<LaunchState>>,
}

impl LaunchFetcher {
    pub fn new(api: SpacexApi) -> Self {
        let (state, _) = watch::channel(LaunchState::default());
        Self {
            api: Arc::new(api),
            state: Arc::new(state),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<LaunchState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> LaunchState {
        self.state.borrow().clone()
    }

    /// Start a fetch and return right away.
    ///
    /// `is_loading` is set before this returns. The request runs on a tokio
    /// task; awaiting the handle is optional and dropping it does not cancel
    /// the request. Failures are logged and stored in `last_error`, the list
    /// is only replaced on success.
    ///
    /// Overlapping calls are not coordinated: the last response to arrive
    /// wins, and the first one to finish clears `is_loading`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, as `tokio::spawn` does.
    pub fn fetch_launches(&self, year_filter: Option<String>) -> JoinHandle<()> {
        self.state.send_modify(|state| state.is_loading = true);

        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let result = api.get_launches(year_filter.as_deref()).await;
            match result {
                Ok(launches) => {
                    // The API does not reliably honour `?year=`, so filter here as well
                    let launches = LaunchFilter::new(year_filter, false).apply(&launches);
                    tracing::info!(count = launches.len(), "Fetched launches");
                    state.send_modify(|current| {
                        current.launches = launches;
                        current.last_error = None;
                        current.is_loading = false;
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error fetching launches");
                    state.send_modify(|current| {
                        current.last_error = Some(e.to_string());
                        current.is_loading = false;
                    });
                }
            }
        })
    }
}
