//! Debounced location search
//!
//! Every call supersedes the previous one. A call waits out the debounce
//! before hitting the network and discards its result if a newer call has
//! started by the time it resolves.

use std::{fmt, sync::Arc, time::Duration};

use domain::{DomainError, entities::LocationSuggestion};
use tracing::{debug, instrument, warn};

use crate::{ports::WeatherPort, services::generation::RequestGeneration};

/// Default quiet period before a search request is sent
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Validate free search text, returning it trimmed
///
/// # Errors
///
/// Returns `DomainError::EmptySearchText` for blank input.
pub fn validate_search_text(text: &str) -> Result<&str, DomainError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(DomainError::EmptySearchText)
    } else {
        Ok(trimmed)
    }
}

/// Result of one suggestion request
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    /// Suggestions for the latest request, possibly empty
    Ready(Vec<LocationSuggestion>),
    /// A newer request started; this result must not be shown
    Superseded,
}

impl SuggestionOutcome {
    /// Suggestions if this outcome is current
    #[must_use]
    pub fn into_ready(self) -> Option<Vec<LocationSuggestion>> {
        match self {
            Self::Ready(list) => Some(list),
            Self::Superseded => None,
        }
    }
}

/// Location search with debounce and last-query-wins
pub struct SearchSuggester {
    weather: Arc<dyn WeatherPort>,
    debounce: Duration,
    generation: RequestGeneration,
}

impl fmt::Debug for SearchSuggester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSuggester")
            .field("debounce", &self.debounce)
            .field("generation", &self.generation.latest())
            .finish_non_exhaustive()
    }
}

impl SearchSuggester {
    /// Create a suggester with the default 300 ms debounce
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            weather,
            debounce: DEFAULT_SEARCH_DEBOUNCE,
            generation: RequestGeneration::new(),
        }
    }

    /// Set the debounce interval
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Suggest locations for free text
    ///
    /// Blank text resolves immediately to an empty list without a network
    /// call. A failed search is logged and resolves to an empty list.
    #[instrument(skip(self))]
    pub async fn suggest(&self, text: &str) -> SuggestionOutcome {
        let ticket = self.generation.begin();

        let Ok(text) = validate_search_text(text) else {
            return SuggestionOutcome::Ready(Vec::new());
        };

        tokio::time::sleep(self.debounce).await;
        if !ticket.is_current() {
            debug!(generation = ticket.id(), "Search superseded during debounce");
            return SuggestionOutcome::Superseded;
        }

        let result = self.weather.search_locations(text).await;
        if !ticket.is_current() {
            debug!(generation = ticket.id(), "Discarding stale search result");
            return SuggestionOutcome::Superseded;
        }

        match result {
            Ok(suggestions) => {
                debug!(count = suggestions.len(), "Search suggestions ready");
                SuggestionOutcome::Ready(suggestions)
            },
            Err(e) => {
                warn!(error = %e, "Location search failed");
                SuggestionOutcome::Ready(Vec::new())
            },
        }
    }

    /// Abandon any in-flight request
    pub fn cancel(&self) {
        self.generation.invalidate();
    }
}
