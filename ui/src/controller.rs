//! Autocomplete Controller
//!
//! The client-side interaction state machine behind the search box.
//!
//! ## Overview
//! Keystrokes are debounced (300 ms) before any request leaves the client, so
//! only the last edit in a burst reaches the suggest endpoint. Every issued
//! request carries a monotonically increasing sequence number; a response that
//! does not match the latest issued sequence is discarded, and issuing a new
//! request drops the superseded in-flight future. Without the guard, a slow
//! response to an earlier keystroke could overwrite a newer keystroke's state.
//!
//! ## Structure
//! [`AutocompleteModel`] is pure: events in, effects out, no I/O and no timers
//! inside. The [`run`] loop owns the debounce sleep and the in-flight fetch —
//! both are plain local state, cancelled by replacement — and applies effects
//! against a [`SuggestTransport`].

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep, Sleep};

use crate::client::{SuggestTransport, Suggestion};

/// Quiet period a burst of keystrokes must end with before a request is sent.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Queries shorter than this (after trimming) never leave the client,
/// mirroring the endpoint's own floor and saving the round trip.
pub const MIN_QUERY_CHARS: usize = 2;

/// Keys the search box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// Everything that can happen to the autocomplete control.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The input text changed (the full new value).
    Edited(String),
    /// The debounce timer ran out.
    DebounceElapsed,
    /// A suggestion response arrived.
    Arrived { seq: u64, suggestions: Vec<Suggestion> },
    /// A suggestion request failed (network or decode).
    FetchFailed { seq: u64 },
    /// A key was pressed while the input had focus.
    Pressed(Key),
    /// A suggestion row was clicked.
    Clicked(usize),
    /// Focus moved outside the control.
    FocusLost,
}

/// Side effects the driver must perform for the model.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Cancel any pending debounce timer and start a fresh one.
    RestartDebounce,
    /// Issue a suggestion request. Supersedes (aborts) any in-flight request.
    Fetch { seq: u64, query: String },
    /// Drop the in-flight request without issuing a new one.
    AbortFetch,
    /// Leave the search box for another view.
    Navigate(Nav),
}

/// Navigation targets the control can commit to.
#[derive(Debug, Clone, PartialEq)]
pub enum Nav {
    /// A product detail page, chosen from the dropdown.
    Product { slug: String },
    /// The full search results view for a committed query.
    SearchResults { query: String },
}

/// Pure dropdown state: query text, suggestion list, open flag, keyboard
/// selection, and the request sequence bookkeeping.
#[derive(Debug, Default)]
pub struct AutocompleteModel {
    query: String,
    suggestions: Vec<Suggestion>,
    open: bool,
    selected: Option<usize>,
    next_seq: u64,
    in_flight: Option<u64>,
}

impl AutocompleteModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Keyboard highlight; `None` means nothing highlighted.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Edited(text) => {
                self.query = text;
                self.selected = None;
                vec![Effect::RestartDebounce]
            }
            Event::DebounceElapsed => {
                if self.query.trim().chars().count() < MIN_QUERY_CHARS {
                    self.suggestions.clear();
                    self.open = false;
                    if self.in_flight.take().is_some() {
                        vec![Effect::AbortFetch]
                    } else {
                        Vec::new()
                    }
                } else {
                    let seq = self.next_seq;
                    self.next_seq += 1;
                    self.in_flight = Some(seq);
                    vec![Effect::Fetch {
                        seq,
                        query: self.query.clone(),
                    }]
                }
            }
            Event::Arrived { seq, suggestions } => {
                if self.in_flight != Some(seq) {
                    // Stale response for a superseded request.
                    return Vec::new();
                }
                self.in_flight = None;
                if self.query.is_empty() {
                    self.suggestions.clear();
                    self.open = false;
                } else {
                    self.open = !suggestions.is_empty();
                    self.suggestions = suggestions;
                    self.selected = None;
                }
                Vec::new()
            }
            Event::FetchFailed { seq } => {
                if self.in_flight != Some(seq) {
                    return Vec::new();
                }
                // Autocomplete is a non-critical enhancement: fail soft.
                self.in_flight = None;
                self.suggestions.clear();
                self.open = false;
                Vec::new()
            }
            Event::Pressed(key) => self.press(key),
            Event::Clicked(index) => self.commit(index),
            Event::FocusLost => {
                self.open = false;
                self.selected = None;
                Vec::new()
            }
        }
    }

    fn press(&mut self, key: Key) -> Vec<Effect> {
        match key {
            Key::ArrowDown => {
                if self.open && !self.suggestions.is_empty() {
                    self.selected = Some(match self.selected {
                        None => 0,
                        Some(i) => (i + 1).min(self.suggestions.len() - 1),
                    });
                }
                Vec::new()
            }
            Key::ArrowUp => {
                if self.open && !self.suggestions.is_empty() {
                    self.selected = match self.selected {
                        None | Some(0) => None,
                        Some(i) => Some(i - 1),
                    };
                }
                Vec::new()
            }
            Key::Enter => {
                if self.open {
                    if let Some(index) = self.selected {
                        return self.commit(index);
                    }
                }
                self.submit()
            }
            Key::Escape => {
                self.open = false;
                self.selected = None;
                Vec::new()
            }
        }
    }

    /// Commits the suggestion at `index`: close, clear, navigate to the
    /// product. Does not re-trigger a search.
    fn commit(&mut self, index: usize) -> Vec<Effect> {
        let Some(chosen) = self.suggestions.get(index) else {
            return Vec::new();
        };
        let slug = chosen.slug.clone();
        self.query = chosen.name.clone();
        self.open = false;
        self.selected = None;
        self.suggestions.clear();
        vec![Effect::Navigate(Nav::Product { slug })]
    }

    /// Submits the typed query to the full search view, trimmed but otherwise
    /// unmodified (case folding happens inside the matching engine).
    fn submit(&mut self) -> Vec<Effect> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let query = trimmed.to_string();
        self.open = false;
        self.selected = None;
        self.suggestions.clear();
        vec![Effect::Navigate(Nav::SearchResults { query })]
    }
}

/// Drives an [`AutocompleteModel`] until the user navigates away or the event
/// source closes.
///
/// `on_change` is invoked after every applied event so the caller can render.
/// Returns the navigation target, or `None` if the input stream ended first.
pub async fn run<T, F>(
    transport: T,
    mut events: mpsc::UnboundedReceiver<Event>,
    mut on_change: F,
) -> Option<Nav>
where
    T: SuggestTransport,
    F: FnMut(&AutocompleteModel),
{
    let transport = &transport;
    let mut model = AutocompleteModel::new();
    let mut debounce: Option<Pin<Box<Sleep>>> = None;
    let mut fetch_seq: Option<u64> = None;
    let mut fetch: Option<Pin<Box<dyn Future<Output = anyhow::Result<Vec<Suggestion>>> + '_>>> =
        None;

    loop {
        let event = tokio::select! {
            received = events.recv() => match received {
                Some(event) => event,
                None => return None,
            },
            () = async { debounce.as_mut().expect("guarded by is_some").as_mut().await },
                if debounce.is_some() =>
            {
                debounce = None;
                Event::DebounceElapsed
            }
            outcome = async { fetch.as_mut().expect("guarded by is_some").as_mut().await },
                if fetch.is_some() =>
            {
                fetch = None;
                let seq = fetch_seq.take().unwrap_or_default();
                match outcome {
                    Ok(suggestions) => Event::Arrived { seq, suggestions },
                    Err(err) => {
                        tracing::debug!("Suggestion fetch failed: {:#}", err);
                        Event::FetchFailed { seq }
                    }
                }
            }
        };

        for effect in model.handle(event) {
            match effect {
                Effect::RestartDebounce => {
                    debounce = Some(Box::pin(sleep(DEBOUNCE)));
                }
                Effect::AbortFetch => {
                    fetch = None;
                    fetch_seq = None;
                }
                Effect::Fetch { seq, query } => {
                    // Replacing the stored future drops any superseded request.
                    fetch_seq = Some(seq);
                    fetch = Some(Box::pin(async move {
                        transport.fetch_suggestions(&query).await
                    }));
                }
                Effect::Navigate(nav) => return Some(nav),
            }
        }
        on_change(&model);
    }
}
