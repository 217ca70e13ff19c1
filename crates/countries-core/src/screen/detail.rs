// crates/countries-core/src/screen/detail.rs
use super::lock;
use super::state::CountryState;
use crate::error::CountriesError;
use crate::traits::{ConnectivityProbe, CountrySource};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;

struct Inner {
    source: Arc<dyn CountrySource>,
    probe: Arc<dyn ConnectivityProbe>,
    code: String,
    state: watch::Sender<CountryState>,
    seq: AtomicU64,
    // Serializes the sequence check with the send.
    publish: Mutex<()>,
}

/// State machine behind a single-country view.
///
/// `Loading → Loaded | LoadingFailed`; unknown codes and source failures
/// both end in `LoadingFailed`.
#[derive(Clone)]
pub struct DetailScreen {
    inner: Arc<Inner>,
}

impl DetailScreen {
    /// `code` is the navigation key; pass `""` when the record had none.
    pub fn new(
        source: Arc<dyn CountrySource>,
        probe: Arc<dyn ConnectivityProbe>,
        code: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(CountryState::Loading);
        Self {
            inner: Arc::new(Inner {
                source,
                probe,
                code: code.into(),
                state,
                seq: AtomicU64::new(0),
                publish: Mutex::new(()),
            }),
        }
    }

    /// Creates the screen and spawns the lookup. Must run inside Tokio.
    pub fn start(
        source: Arc<dyn CountrySource>,
        probe: Arc<dyn ConnectivityProbe>,
        code: impl Into<String>,
    ) -> Self {
        let screen = Self::new(source, probe, code);
        screen.spawn_load();
        screen
    }

    pub fn code(&self) -> &str {
        &self.inner.code
    }

    pub fn state(&self) -> CountryState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CountryState> {
        self.inner.state.subscribe()
    }

    #[tracing::instrument(level = "debug", skip(self), fields(code = %self.inner.code))]
    pub async fn load(&self) {
        let seq = self.inner.seq.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.inner.probe.check_connection() {
            tracing::warn!("no connectivity; country not requested");
            self.publish_if_current(
                seq,
                CountryState::LoadingFailed {
                    message: CountriesError::NoConnectivity.user_message(),
                },
            );
            return;
        }

        self.publish_if_current(seq, CountryState::Loading);

        let next = match self.inner.source.fetch_by_code(&self.inner.code).await {
            Ok(country) => CountryState::Loaded(Arc::new(country)),
            Err(e) => {
                let err = CountriesError::from(e);
                if err.is_not_found() {
                    tracing::info!(error = %err, "country lookup found nothing");
                } else {
                    tracing::warn!(error = %err, "country lookup failed");
                }
                CountryState::LoadingFailed {
                    message: err.user_message(),
                }
            }
        };
        self.publish_if_current(seq, next);
    }

    pub fn spawn_load(&self) -> JoinHandle<()> {
        let screen = self.clone();
        tokio::spawn(async move { screen.load().await })
    }

    pub async fn retry(&self) {
        self.load().await;
    }

    fn publish_if_current(&self, seq: u64, next: CountryState) {
        let _guard = lock(&self.inner.publish);
        if self.inner.seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(seq, "stale lookup result dropped");
            return;
        }
        self.inner.state.send_replace(next);
    }
}
