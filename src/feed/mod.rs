use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::models::vacancy::Vacancy;
use crate::store::vacancies::VacancyCollection;
use crate::store::{Collection, RemoteStore};

/// Where a feed's rows come from. The vacancy feed has a second, filtered
/// source; everything else uses its store directly.
#[async_trait]
pub trait ContentSource<E>: Send + Sync {
    async fn fetch(&self) -> Result<Vec<E>>;
}

#[async_trait]
impl<C: Collection> ContentSource<C::Entity> for RemoteStore<C> {
    async fn fetch(&self) -> Result<Vec<C::Entity>> {
        self.fetch_all().await
    }
}

/// Open vacancies only, for the public careers page.
pub struct ActiveVacancies(pub Arc<RemoteStore<VacancyCollection>>);

#[async_trait]
impl ContentSource<Vacancy> for ActiveVacancies {
    async fn fetch(&self) -> Result<Vec<Vacancy>> {
        self.0.fetch_active().await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedMode {
    /// Marketing pages: always have something to show; empty or failed
    /// fetches fall back to seed content.
    Public,
    /// Editing UI: seed rows must never appear as if they were real,
    /// editable data.
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    /// Showing seed content (public mode only).
    Seeded,
    /// No fetch has resolved yet.
    Loading,
    /// Showing remote rows.
    Ready,
    /// Remote answered with zero rows (dashboard mode only).
    Empty,
    /// Fetch failed; seed content shown, error recorded.
    ErrorWithFallback,
    /// Fetch failed; nothing shown, error recorded.
    ErrorEmpty,
}

/// Reconciles one remote collection with its seed content.
///
/// Remote rows and seed rows are never merged: a resolution either replaces
/// the data wholesale or falls back to the full seed list.
pub struct ContentFeed<E> {
    source: Arc<dyn ContentSource<E>>,
    seed: fn() -> Vec<E>,
    mode: FeedMode,
    state: FeedState,
    data: Vec<E>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<E: Clone> ContentFeed<E> {
    pub fn new(source: Arc<dyn ContentSource<E>>, seed: fn() -> Vec<E>, mode: FeedMode) -> Self {
        match mode {
            // Public pages must never paint a spinner or a hole on first
            // render; seed content is available synchronously.
            FeedMode::Public => Self {
                source,
                seed,
                mode,
                state: FeedState::Seeded,
                data: seed(),
                loading: false,
                error: None,
                generation: 0,
            },
            FeedMode::Dashboard => Self {
                source,
                seed,
                mode,
                state: FeedState::Loading,
                data: Vec::new(),
                loading: true,
                error: None,
                generation: 0,
            },
        }
    }

    /// Construct and run the initial fetch.
    pub async fn mount(
        source: Arc<dyn ContentSource<E>>,
        seed: fn() -> Vec<E>,
        mode: FeedMode,
    ) -> Self {
        let mut feed = Self::new(source, seed, mode);
        feed.refresh().await;
        feed
    }

    pub fn mode(&self) -> FeedMode {
        self.mode
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    pub fn data(&self) -> &[E] {
        &self.data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks a fetch as in flight. The returned generation must accompany
    /// the outcome passed to [`apply`](Self::apply); outcomes carrying a
    /// stale generation are discarded.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub fn apply(&mut self, generation: u64, outcome: Result<Vec<E>>) {
        if generation != self.generation {
            // Cancelled, or superseded by a newer fetch.
            return;
        }
        self.loading = false;
        match outcome {
            Ok(items) if !items.is_empty() => {
                self.state = FeedState::Ready;
                self.data = items;
            }
            Ok(_) => match self.mode {
                FeedMode::Public => {
                    self.state = FeedState::Seeded;
                    self.data = (self.seed)();
                }
                FeedMode::Dashboard => {
                    self.state = FeedState::Empty;
                    self.data = Vec::new();
                }
            },
            Err(e) => {
                warn!(error = %e, "content fetch failed");
                match self.mode {
                    FeedMode::Public => {
                        self.state = FeedState::ErrorWithFallback;
                        self.data = (self.seed)();
                    }
                    FeedMode::Dashboard => {
                        self.state = FeedState::ErrorEmpty;
                        self.data = Vec::new();
                    }
                }
                self.error = Some(e.to_string());
            }
        }
    }

    /// One fetch, folded straight back into the feed.
    pub async fn refresh(&mut self) {
        let generation = self.begin();
        let source = Arc::clone(&self.source);
        let outcome = source.fetch().await;
        self.apply(generation, outcome);
    }

    /// Drops interest in any in-flight fetch; a late outcome will be
    /// discarded by `apply`.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.loading = false;
    }
}
