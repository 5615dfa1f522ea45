//! Application services
//!
//! Location resolution, the forecast orchestrator and the consumers built
//! on top of it.

pub mod astronomy_loader;
pub mod forecast_service;
pub mod generation;
pub mod image_decorator;
pub mod location_resolver;
pub mod search_suggester;
pub mod unit_preference;
pub mod view;
pub mod weather_session;

pub use astronomy_loader::AstronomyLoader;
pub use forecast_service::{
    CacheEntry, DEFAULT_FORECAST_DAYS, ForecastService, WEATHER_CACHE_PREFIX, WeatherBundle,
    weather_cache_key,
};
pub use generation::{GenerationTicket, RequestGeneration};
pub use image_decorator::{
    DEFAULT_PHOTOS_PER_PAGE, ImageDecorator, PHOTO_CACHE_PREFIX, photo_cache_key,
    weather_image_queries,
};
pub use location_resolver::LocationResolver;
pub use search_suggester::{
    DEFAULT_SEARCH_DEBOUNCE, SearchSuggester, SuggestionOutcome, validate_search_text,
};
pub use unit_preference::{UNIT_PREFERENCE_KEY, UnitPreferences};
pub use view::{
    DEFAULT_HOURLY_WINDOW, Greeting, current_greeting, greeting, hourly_window, hourly_window_at,
};
pub use weather_session::{RefreshOutcome, SessionState, WeatherSession};
