// crates/countries-core/src/screen/list.rs
use super::lock;
use super::state::CountriesState;
use crate::error::CountriesError;
use crate::model::Country;
use crate::search::{apply, SortKey};
use crate::traits::{ConnectivityProbe, CountrySource};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Inputs the visible list is derived from.
#[derive(Default)]
struct ListData {
    /// Last successfully fetched list, unfiltered. Never handed out.
    master: Option<Vec<Arc<Country>>>,
    query: String,
    sort: Option<SortKey>,
}

struct Inner {
    source: Arc<dyn CountrySource>,
    probe: Arc<dyn ConnectivityProbe>,
    data: Mutex<ListData>,
    state: watch::Sender<CountriesState>,
    fetch_seq: AtomicU64,
    search_seq: AtomicU64,
}

/// State machine behind the country list.
///
/// ```text
/// Loading ──ok──▶ LoadedData ──search/sort──▶ LoadedData
///    │                 │
///    └──err──▶ LoadingFailed ◀──err── refresh
///                  │
///                  └──retry──▶ Loading
/// ```
///
/// Cloning is cheap and every clone drives the same screen.
#[derive(Clone)]
pub struct ListScreen {
    inner: Arc<Inner>,
}

impl ListScreen {
    /// Creates the screen in `Loading` without fetching.
    pub fn new(source: Arc<dyn CountrySource>, probe: Arc<dyn ConnectivityProbe>) -> Self {
        let (state, _) = watch::channel(CountriesState::Loading);
        Self {
            inner: Arc::new(Inner {
                source,
                probe,
                data: Mutex::new(ListData::default()),
                state,
                fetch_seq: AtomicU64::new(0),
                search_seq: AtomicU64::new(0),
            }),
        }
    }

    /// Creates the screen and immediately spawns the first fetch.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(source: Arc<dyn CountrySource>, probe: Arc<dyn ConnectivityProbe>) -> Self {
        let screen = Self::new(source, probe);
        screen.spawn_fetch_all();
        screen
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CountriesState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that wakes on every published transition.
    pub fn subscribe(&self) -> watch::Receiver<CountriesState> {
        self.inner.state.subscribe()
    }

    /// The recorded query, even when no list is shown yet.
    pub fn query(&self) -> String {
        lock(&self.inner.data).query.clone()
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        lock(&self.inner.data).sort
    }

    /// Runs one fetch sequence to completion.
    ///
    /// Checks connectivity first; when offline the source is not called at
    /// all. Errors end up as `LoadingFailed`, never as a return value.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_all(&self) {
        let seq = self.inner.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.inner.probe.check_connection() {
            tracing::warn!(seq, "no connectivity; countries not requested");
            self.publish_if_current(seq, |_| CountriesState::LoadingFailed {
                message: CountriesError::NoConnectivity.user_message(),
            });
            return;
        }

        self.publish_if_current(seq, |_| CountriesState::Loading);
        tracing::info!(seq, "fetching countries");

        let result = self.inner.source.fetch_all().await;

        self.publish_if_current(seq, move |data| match result {
            Ok(countries) => {
                tracing::info!(seq, count = countries.len(), "countries loaded");
                let visible = apply(&countries, &data.query, data.sort);
                data.master = Some(countries);
                CountriesState::LoadedData {
                    countries: visible,
                    query: data.query.clone(),
                }
            }
            Err(e) => {
                let err = CountriesError::from(e);
                tracing::warn!(seq, error = %err, "countries fetch failed");
                CountriesState::LoadingFailed {
                    message: err.user_message(),
                }
            }
        });
    }

    /// Spawns [`fetch_all`](Self::fetch_all) on the current Tokio runtime.
    pub fn spawn_fetch_all(&self) -> JoinHandle<()> {
        let screen = self.clone();
        tokio::spawn(async move { screen.fetch_all().await })
    }

    /// Re-runs the fetch sequence; meant for the `LoadingFailed` retry button.
    pub async fn retry(&self) {
        self.fetch_all().await;
    }

    /// Explicit reload from `LoadedData`. Query and sort key are kept and
    /// re-applied to the new list.
    pub async fn refresh(&self) {
        self.fetch_all().await;
    }

    /// Records `text` as the query and re-derives the visible list.
    ///
    /// Only re-renders in `LoadedData`; otherwise the query waits for the
    /// next successful fetch. Never suspends and never hits the network.
    pub fn search(&self, text: impl Into<String>) {
        self.inner.search_seq.fetch_add(1, Ordering::SeqCst);
        self.apply_search(text.into());
    }

    /// [`search`](Self::search) after `delay`, unless another search was
    /// issued meanwhile. Returns whether this call's text was applied.
    pub async fn search_debounced(&self, text: impl Into<String>, delay: Duration) -> bool {
        let text = text.into();
        let seq = self.inner.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(delay).await;
        if self.inner.search_seq.load(Ordering::SeqCst) != seq {
            tracing::trace!(seq, "debounced search superseded");
            return false;
        }
        self.apply_search(text);
        true
    }

    /// Sets the sort key (`None` = source order) and re-derives the visible
    /// list, holding the query fixed.
    pub fn sort(&self, key: Option<SortKey>) {
        let mut data = lock(&self.inner.data);
        data.sort = key;
        self.rederive(&data);
    }

    fn apply_search(&self, text: String) {
        let mut data = lock(&self.inner.data);
        data.query = text;
        self.rederive(&data);
    }

    fn rederive(&self, data: &ListData) {
        let loaded = matches!(*self.inner.state.borrow(), CountriesState::LoadedData { .. });
        let master = match (&data.master, loaded) {
            (Some(master), true) => master,
            _ => {
                tracing::debug!(query = %data.query, "no list shown; inputs recorded only");
                return;
            }
        };
        let visible = apply(master, &data.query, data.sort);
        tracing::debug!(
            query = %data.query,
            sort = ?data.sort,
            visible = visible.len(),
            "visible list re-derived"
        );
        self.inner.state.send_replace(CountriesState::LoadedData {
            countries: visible,
            query: data.query.clone(),
        });
    }

    /// Publishes the state built by `make` if `seq` is still the newest
    /// fetch. The data lock is held across the check and the send so a
    /// concurrent search cannot interleave.
    fn publish_if_current<F>(&self, seq: u64, make: F)
    where
        F: FnOnce(&mut ListData) -> CountriesState,
    {
        let mut data = lock(&self.inner.data);
        let latest = self.inner.fetch_seq.load(Ordering::SeqCst);
        if latest != seq {
            tracing::debug!(seq, latest, "stale fetch result dropped");
            return;
        }
        let next = make(&mut data);
        tracing::debug!(seq, state = state_name(&next), "list state transition");
        self.inner.state.send_replace(next);
    }
}

fn state_name(state: &CountriesState) -> &'static str {
    match state {
        CountriesState::Loading => "Loading",
        CountriesState::LoadedData { .. } => "LoadedData",
        CountriesState::LoadingFailed { .. } => "LoadingFailed",
    }
}
