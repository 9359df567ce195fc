use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, error};

use crate::api::{ApiResult, MovieApi, MovieListItem};
use super::debounce::Debounced;
use super::filter::{FilterField, FilterState};

pub const GENRE_LOAD_ERROR: &str = "Failed to load genres";

#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Loading,
    Loaded(Vec<MovieListItem>),
    Failed(String),
}

/// Identifies one issued movie request. Only the latest ticket's
/// completion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    /// Filters of the most recently issued request.
    pub filters: FilterState,
    pub genres: Vec<String>,
    pub genre_error: Option<String>,
    pub status: ListStatus,
    latest: u64,
}

impl ListState {
    pub fn new(filters: FilterState) -> Self {
        Self {
            filters,
            genres: Vec::new(),
            genre_error: None,
            status: ListStatus::Loading,
            latest: 0,
        }
    }

    pub fn begin_request(&mut self, filters: FilterState) -> RequestTicket {
        self.latest += 1;
        self.filters = filters;
        self.status = ListStatus::Loading;
        RequestTicket(self.latest)
    }

    /// Returns false when the ticket was superseded and the result dropped.
    pub fn complete_request(
        &mut self,
        ticket: RequestTicket,
        result: ApiResult<Vec<MovieListItem>>,
    ) -> bool {
        if ticket.0 != self.latest {
            debug!(
                ticket = ticket.0,
                latest = self.latest,
                "Discarding stale movie response"
            );
            return false;
        }

        self.status = match result {
            Ok(movies) => ListStatus::Loaded(movies),
            Err(e) => {
                error!("Error fetching movies: {}", e);
                ListStatus::Failed(e.to_string())
            }
        };
        true
    }

    pub fn apply_genres(&mut self, result: ApiResult<Vec<String>>) {
        match result {
            Ok(genres) => self.genres = genres,
            Err(e) => {
                error!("Error fetching genres: {}", e);
                self.genre_error = Some(GENRE_LOAD_ERROR.to_string());
            }
        }
    }

    pub fn movies(&self) -> &[MovieListItem] {
        match &self.status {
            ListStatus::Loaded(movies) => movies,
            _ => &[],
        }
    }

    /// One fetch cycle for a server-rendered page: genres and movies are
    /// requested concurrently and applied through the same transitions.
    pub async fn load(api: &dyn MovieApi, filters: FilterState, limit: u32) -> Self {
        let mut state = Self::new(filters.clone());
        let query = filters.to_query(limit);
        let ticket = state.begin_request(filters);

        let (genres, movies) = tokio::join!(api.genres(), api.movies(&query));
        state.apply_genres(genres);
        state.complete_request(ticket, movies);
        state
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListSettings {
    pub debounce: Duration,
    pub limit: u32,
}

/// A mounted list view. Text filters are debounced; the genre applies at
/// once. Each change issues a fresh fetch and the resulting state is
/// published on a watch channel. Dropping the view stops its driver, which
/// aborts in-flight fetches, and cancels pending debounce timers.
pub struct ListView {
    search: Debounced<String>,
    keyword: Debounced<String>,
    actor: Debounced<String>,
    genre: watch::Sender<String>,
    state: watch::Receiver<ListState>,
    driver: JoinHandle<()>,
}

struct Inputs {
    search: watch::Receiver<String>,
    keyword: watch::Receiver<String>,
    actor: watch::Receiver<String>,
    genre: watch::Receiver<String>,
}

impl Inputs {
    fn current(&self) -> FilterState {
        FilterState {
            search: self.search.borrow().clone(),
            genre: self.genre.borrow().clone(),
            keyword: self.keyword.borrow().clone(),
            actor: self.actor.borrow().clone(),
        }
    }
}

enum Completion {
    Genres(ApiResult<Vec<String>>),
    Movies(RequestTicket, ApiResult<Vec<MovieListItem>>),
}

impl ListView {
    pub fn mount(api: Arc<dyn MovieApi>, initial: FilterState, settings: ListSettings) -> Self {
        let search = Debounced::new(initial.search.clone(), settings.debounce);
        let keyword = Debounced::new(initial.keyword.clone(), settings.debounce);
        let actor = Debounced::new(initial.actor.clone(), settings.debounce);
        let (genre, genre_rx) = watch::channel(initial.genre.clone());
        let (state_tx, state) = watch::channel(ListState::new(initial));

        let inputs = Inputs {
            search: search.subscribe(),
            keyword: keyword.subscribe(),
            actor: actor.subscribe(),
            genre: genre_rx,
        };
        let driver = tokio::spawn(drive(api, inputs, state_tx, settings.limit));

        Self {
            search,
            keyword,
            actor,
            genre,
            state,
            driver,
        }
    }

    pub fn set_filter(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Search => self.search.set(value),
            FilterField::Keyword => self.keyword.set(value),
            FilterField::Actor => self.actor.set(value),
            FilterField::Genre => {
                self.genre.send_if_modified(|current| {
                    if *current == value {
                        return false;
                    }
                    *current = value;
                    true
                });
            }
        }
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.clone()
    }
}

impl Drop for ListView {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

async fn drive(
    api: Arc<dyn MovieApi>,
    mut inputs: Inputs,
    state: watch::Sender<ListState>,
    limit: u32,
) {
    let mut tasks = JoinSet::new();

    let genre_api = api.clone();
    tasks.spawn(async move { Completion::Genres(genre_api.genres().await) });
    issue(&api, &mut tasks, &state, inputs.current(), limit);

    loop {
        tokio::select! {
            Ok(()) = inputs.search.changed() => {
                issue(&api, &mut tasks, &state, inputs.current(), limit);
            }
            Ok(()) = inputs.keyword.changed() => {
                issue(&api, &mut tasks, &state, inputs.current(), limit);
            }
            Ok(()) = inputs.actor.changed() => {
                issue(&api, &mut tasks, &state, inputs.current(), limit);
            }
            Ok(()) = inputs.genre.changed() => {
                issue(&api, &mut tasks, &state, inputs.current(), limit);
            }
            Some(joined) = tasks.join_next() => match joined {
                Ok(Completion::Genres(result)) => {
                    state.send_modify(|s| s.apply_genres(result));
                }
                Ok(Completion::Movies(ticket, result)) => {
                    state.send_if_modified(|s| s.complete_request(ticket, result));
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => error!("List fetch task failed: {}", e),
            },
            else => break,
        }
    }
}

fn issue(
    api: &Arc<dyn MovieApi>,
    tasks: &mut JoinSet<Completion>,
    state: &watch::Sender<ListState>,
    filters: FilterState,
    limit: u32,
) {
    let query = filters.to_query(limit);
    debug!(params = ?query.params(), "Fetching movies");

    let mut ticket = RequestTicket(0);
    state.send_modify(|s| ticket = s.begin_request(filters));

    let api = api.clone();
    tasks.spawn(async move {
        let result = api.movies(&query).await;
        Completion::Movies(ticket, result)
    });
}
