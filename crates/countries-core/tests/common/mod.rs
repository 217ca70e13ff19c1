#![allow(dead_code)]

use async_trait::async_trait;
use countries_core::{Country, CountrySource, SourceError};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub fn country(code: &str, name: &str, population: i64, surface: f64) -> Country {
    Country {
        code: Some(code.to_string()),
        name: Some(name.to_string()),
        capital: None,
        population,
        surface,
        image: Some(format!("https://flagcdn.com/w320/{}.png", code.to_lowercase())),
    }
}

pub fn sample() -> Vec<Arc<Country>> {
    vec![
        Arc::new(country("FR", "France", 67_000_000, 551_695.0)),
        Arc::new(country("DE", "Germany", 83_000_000, 357_114.0)),
        Arc::new(country("GF", "French Guiana", 290_000, 83_534.0)),
        Arc::new(country("AT", "Austria", 9_000_000, 83_871.0)),
    ]
}

pub fn names(list: &[Arc<Country>]) -> Vec<String> {
    list.iter().map(|c| c.name().to_string()).collect()
}

/// Source with scripted answers that counts every call.
#[derive(Default)]
pub struct RecordingSource {
    all: Mutex<VecDeque<Result<Vec<Arc<Country>>, SourceError>>>,
    code_answers: Mutex<VecDeque<Result<Country, SourceError>>>,
    by_code: Mutex<HashMap<String, Country>>,
    all_calls: AtomicUsize,
    code_calls: AtomicUsize,
}

impl RecordingSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer for the next `fetch_all` call.
    pub fn push_all(&self, answer: Result<Vec<Arc<Country>>, SourceError>) {
        self.all.lock().unwrap().push_back(answer);
    }

    /// Queues the answer for the next `fetch_by_code` call, ahead of the
    /// known countries.
    pub fn push_code(&self, answer: Result<Country, SourceError>) {
        self.code_answers.lock().unwrap().push_back(answer);
    }

    pub fn with_country(self, c: Country) -> Self {
        let code = c.code_or_empty().to_uppercase();
        self.by_code.lock().unwrap().insert(code, c);
        self
    }

    pub fn all_calls(&self) -> usize {
        self.all_calls.load(Ordering::SeqCst)
    }

    pub fn code_calls(&self) -> usize {
        self.code_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountrySource for RecordingSource {
    async fn fetch_all(&self) -> Result<Vec<Arc<Country>>, SourceError> {
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        self.all
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SourceError::Network("no scripted answer".into())))
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Country, SourceError> {
        self.code_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(answer) = self.code_answers.lock().unwrap().pop_front() {
            return answer;
        }
        self.by_code
            .lock()
            .unwrap()
            .get(&code.to_uppercase())
            .cloned()
            .ok_or_else(|| SourceError::NotFound(code.to_string()))
    }
}

type Answer = Result<Vec<Arc<Country>>, SourceError>;
type CodeAnswer = Result<Country, SourceError>;

/// Source whose calls block until the test releases them, in call order.
#[derive(Default)]
pub struct GatedSource {
    gates: Mutex<VecDeque<oneshot::Receiver<Answer>>>,
    code_gates: Mutex<VecDeque<oneshot::Receiver<CodeAnswer>>>,
    calls: AtomicUsize,
    code_calls: AtomicUsize,
}

impl GatedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the gate the next call will wait on.
    pub fn gate(&self) -> oneshot::Sender<Answer> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    /// Reserves the gate the next `fetch_by_code` call will wait on.
    pub fn code_gate(&self) -> oneshot::Sender<CodeAnswer> {
        let (tx, rx) = oneshot::channel();
        self.code_gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn code_calls(&self) -> usize {
        self.code_calls.load(Ordering::SeqCst)
    }

    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }

    pub async fn wait_for_code_calls(&self, n: usize) {
        while self.code_calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl CountrySource for GatedSource {
    async fn fetch_all(&self) -> Result<Vec<Arc<Country>>, SourceError> {
        let gate = self.gates.lock().unwrap().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(SourceError::Network("gate dropped".into()))),
            None => Err(SourceError::Network("no gate".into())),
        }
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Country, SourceError> {
        let gate = self.code_gates.lock().unwrap().pop_front();
        self.code_calls.fetch_add(1, Ordering::SeqCst);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(SourceError::Network("gate dropped".into()))),
            None => Err(SourceError::NotFound(code.to_string())),
        }
    }
}
