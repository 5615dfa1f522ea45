//! Weather session
//!
//! The stateful consumer of the orchestration core: it holds the active
//! location source, drives loads and applies results only while they are
//! still the latest request.

use std::{fmt, sync::Arc};

use domain::{
    entities::{AstronomySnapshot, ForecastSet, WeatherSnapshot},
    value_objects::{GeoCoordinates, LocationQuery, SearchSelection},
};
use parking_lot::RwLock;
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    services::{
        astronomy_loader::AstronomyLoader, forecast_service::ForecastService,
        generation::RequestGeneration, location_resolver::LocationResolver,
    },
};

/// Snapshot of what the view shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Query the shown data was loaded for
    pub query: Option<LocationQuery>,
    pub weather: Option<WeatherSnapshot>,
    pub forecast: Option<ForecastSet>,
    pub astronomy: Option<AstronomySnapshot>,
    /// User-visible error of the last load
    pub error: Option<String>,
    pub loading: bool,
}

/// How a refresh ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Results were applied to the session state
    Applied,
    /// A newer request or a teardown made the results irrelevant
    Superseded,
    /// No location source is held, nothing was fetched
    NoLocation,
}

#[derive(Debug, Default)]
struct LocationSources {
    geo: Option<GeoCoordinates>,
    selection: Option<SearchSelection>,
}

/// Location state plus the loaded weather for one consumer
pub struct WeatherSession {
    forecasts: Arc<ForecastService>,
    astronomy: AstronomyLoader,
    generation: RequestGeneration,
    sources: RwLock<LocationSources>,
    state: RwLock<SessionState>,
}

impl fmt::Debug for WeatherSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherSession")
            .field("sources", &*self.sources.read())
            .field("generation", &self.generation.latest())
            .finish_non_exhaustive()
    }
}

impl WeatherSession {
    /// Create a session with no location
    pub fn new(forecasts: Arc<ForecastService>, astronomy: AstronomyLoader) -> Self {
        Self {
            forecasts,
            astronomy,
            generation: RequestGeneration::new(),
            sources: RwLock::new(LocationSources::default()),
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Record a device geolocation fix
    ///
    /// A held search selection still takes precedence.
    pub fn set_geolocation(&self, coords: GeoCoordinates) {
        self.sources.write().geo = Some(coords);
    }

    /// Select a search result, discarding any held coordinates
    pub fn select_location(&self, selection: SearchSelection) {
        let mut sources = self.sources.write();
        sources.geo = None;
        sources.selection = Some(selection);
    }

    /// Drop the search selection so a geolocation fix can take effect
    pub fn clear_selection(&self) {
        self.sources.write().selection = None;
    }

    /// Held coordinates, if any
    pub fn geolocation(&self) -> Option<GeoCoordinates> {
        self.sources.read().geo
    }

    /// The query the next refresh would load
    pub fn location_query(&self) -> Option<LocationQuery> {
        let sources = self.sources.read();
        LocationResolver::resolve(sources.geo, sources.selection.as_ref())
    }

    /// Current view state
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Load weather for the held location and apply it if still current
    ///
    /// Astronomy follows a successful load and never fails the refresh.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Fetch`] when the primary load fails; the
    /// message is also recorded as the visible error.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<RefreshOutcome, ApplicationError> {
        let Some(query) = self.location_query() else {
            debug!("No location to load");
            return Ok(RefreshOutcome::NoLocation);
        };

        let ticket = self.generation.begin();
        self.state.write().loading = true;

        let bundle = match self.forecasts.load(&query).await {
            Ok(bundle) => bundle,
            Err(e) => {
                if !ticket.is_current() {
                    return Ok(RefreshOutcome::Superseded);
                }
                let mut state = self.state.write();
                state.error = Some(e.to_string());
                state.loading = false;
                return Err(e);
            },
        };

        if !ticket.is_current() {
            debug!(generation = ticket.id(), "Discarding superseded weather");
            return Ok(RefreshOutcome::Superseded);
        }

        {
            let mut state = self.state.write();
            state.query = Some(query.clone());
            state.weather = Some(bundle.weather.clone());
            state.forecast = Some(bundle.forecast);
            state.astronomy = None;
            state.error = None;
            state.loading = false;
        }
        info!(query = %query, "Weather applied");

        let astronomy = self.astronomy.load(&query, Some(&bundle.weather)).await;
        if ticket.is_current() {
            self.state.write().astronomy = astronomy;
        } else {
            debug!(generation = ticket.id(), "Discarding superseded astronomy");
        }

        Ok(RefreshOutcome::Applied)
    }

    /// Re-run the load for the same resolved location
    ///
    /// There is no backoff and no automatic retry.
    pub async fn retry(&self) -> Result<RefreshOutcome, ApplicationError> {
        self.refresh().await
    }

    /// Stop applying results of any request in flight
    ///
    /// Loaded data is kept; the loading flag is cleared since nothing in
    /// flight can land anymore.
    pub fn teardown(&self) {
        self.generation.invalidate();
        self.state.write().loading = false;
        debug!("Weather session torn down");
    }
}
