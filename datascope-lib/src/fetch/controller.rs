//! Fetch controller
//!
//! Owns the fetch state for one dashboard panel and runs fetch cycles
//! against a [`FetchClient`]. Each cycle is tagged with a generation
//! number; a cycle's outcome is applied only while its generation is still
//! the latest one issued, so a slow response superseded by a newer request
//! is discarded instead of overwriting fresher state.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use crate::FetchClient;
use crate::fetch::FetchSnapshot;
use crate::fetch::FetchState;
use crate::model::Value;
use crate::request::FetchRequest;

/// Drives fetch cycles and owns the resulting state.
///
/// Cheap to clone (shared `Arc` internals), so cycles can run on spawned
/// tasks while other clones read snapshots. The state is only ever
/// replaced wholesale by the controller itself; no external component
/// mutates it.
///
/// # Example
///
/// ```ignore
/// use datascope_lib::FetchClient;
/// use datascope_lib::fetch::FetchController;
/// use datascope_lib::request::FetchRequest;
///
/// let request = FetchRequest::new("https://api.example.com/items", "data");
/// let controller = FetchController::new(FetchClient::new(), request);
/// controller.load().await;
/// let snapshot = controller.snapshot();
/// ```
#[derive(Clone)]
pub struct FetchController {
    client: FetchClient,
    request: Arc<Mutex<FetchRequest>>,
    shared: Arc<Mutex<Shared>>,
    generation: Arc<AtomicU64>,
}

struct Shared {
    state: FetchState,
    last_data: Option<Vec<Value>>,
}

impl FetchController {
    /// Creates a controller for the given request.
    ///
    /// The state starts out loading: a panel shows its spinner from the
    /// first render until the initial [`load`](Self::load) resolves.
    pub fn new(client: FetchClient, request: FetchRequest) -> Self {
        Self {
            client,
            request: Arc::new(Mutex::new(request)),
            shared: Arc::new(Mutex::new(Shared {
                state: FetchState::Loading,
                last_data: None,
            })),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Runs one fetch cycle at the current generation.
    pub async fn load(&self) {
        let generation = self.generation.load(Ordering::SeqCst);
        self.run_cycle(generation).await;
    }

    /// Forces a re-fetch of the unchanged request.
    ///
    /// Bumping the generation is the sole voluntary re-fetch signal:
    /// identical parameters still produce a fresh network call, and any
    /// cycle still in flight from an earlier generation is invalidated.
    pub async fn refetch(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.run_cycle(generation).await;
    }

    /// Replaces the request and runs a cycle for it.
    pub async fn submit(&self, request: FetchRequest) {
        {
            let mut current = self.request.lock().unwrap();
            *current = request;
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.run_cycle(generation).await;
    }

    /// Returns the current externally visible state.
    pub fn snapshot(&self) -> FetchSnapshot {
        let shared = self.shared.lock().unwrap();
        FetchSnapshot {
            data: shared.last_data.clone(),
            is_loading: shared.state.is_loading(),
            error: shared.state.error().map(str::to_string),
        }
    }

    /// Returns the current fetch state.
    pub fn state(&self) -> FetchState {
        self.shared.lock().unwrap().state.clone()
    }

    /// Returns a copy of the current request.
    pub fn request(&self) -> FetchRequest {
        self.request.lock().unwrap().clone()
    }

    async fn run_cycle(&self, generation: u64) {
        let request = self.request.lock().unwrap().clone();

        // The staleness check and the Loading publish must be atomic: a
        // cycle superseded before this point would otherwise overwrite a
        // newer cycle's terminal state with Loading that nothing in
        // flight ever clears.
        {
            let mut shared = self.shared.lock().unwrap();
            if self.generation.load(Ordering::SeqCst) != generation {
                return;
            }
            shared.state = FetchState::Loading;
        }

        let outcome = self.client.fetch(&request).await;

        let mut shared = self.shared.lock().unwrap();
        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("discarding stale response for generation {generation}");
            return;
        }
        match outcome {
            Ok(items) => {
                log::debug!("fetch resolved with {} item(s)", items.len());
                shared.last_data = Some(items.clone());
                shared.state = FetchState::Success(items);
            }
            Err(err) => {
                log::warn!("fetch failed: {err}");
                shared.state = FetchState::Failed(err.to_string());
            }
        }
    }
}
