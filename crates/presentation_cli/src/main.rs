//! Clima CLI
//!
//! Text-mode weather dashboard: resolves a location, loads current weather,
//! forecast and astronomy, and prints them in the preferred unit.

#![allow(clippy::print_stdout)]

mod render;

use std::sync::Arc;

use anyhow::{Context, bail};
use application::{
    AstronomyLoader, ForecastService, ImageDecorator, PreferenceStorePort, SearchSuggester,
    SessionCachePort, SuggestionOutcome, UnitPreferences, WeatherPort, WeatherSession,
    current_greeting, hourly_window, weather_image_queries,
};
use clap::{Parser, Subcommand, ValueEnum};
use domain::value_objects::{GeoCoordinates, SearchSelection, TemperatureUnit};
use infrastructure::{
    AppConfig, JsonFilePreferenceStore, MokaSessionCache, PexelsPhotoAdapter, WeatherApiAdapter,
    init_logging,
};
use tracing::{debug, warn};

/// Clima CLI
#[derive(Parser)]
#[command(name = "clima-cli")]
#[command(author, version, about = "Clima weather dashboard", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard for a location
    ///
    /// Example: clima-cli show --lat 5.6037 --lon -0.187
    /// Example: clima-cli show --place Accra --country Ghana --photos
    Show {
        /// Latitude of a geolocation fix
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude of a geolocation fix
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Place name picked from search; overrides --lat/--lon
        #[arg(long)]
        place: Option<String>,

        /// Region qualifier for --place
        #[arg(long, requires = "place")]
        region: Option<String>,

        /// Country qualifier for --place
        #[arg(long, requires = "place")]
        country: Option<String>,

        /// Number of hourly entries (default from configuration)
        #[arg(long)]
        hours: Option<usize>,

        /// Also show illustrative photos
        #[arg(long)]
        photos: bool,
    },

    /// Search for locations
    Search {
        /// Free-text place name
        text: String,
    },

    /// Show or change the temperature unit
    Unit {
        /// New unit, or `toggle` to flip the stored one
        #[arg(value_enum)]
        action: Option<UnitAction>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UnitAction {
    /// Celsius
    C,
    /// Fahrenheit
    F,
    /// Flip the stored unit
    Toggle,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the search selection from `--place` and its qualifiers
fn selection_from_args(
    place: Option<String>,
    region: Option<String>,
    country: Option<String>,
) -> Option<SearchSelection> {
    let mut selection = SearchSelection::new(place?);
    selection.region = region;
    selection.country = country;
    Some(selection)
}

fn weather_port(config: &AppConfig) -> anyhow::Result<Arc<dyn WeatherPort>> {
    let key = config.weather_api_key()?;
    let adapter = WeatherApiAdapter::new(config.weather.to_client_config(key))?;
    Ok(Arc::new(adapter))
}

fn unit_preferences(config: &AppConfig) -> UnitPreferences {
    let store: Arc<dyn PreferenceStorePort> =
        Arc::new(JsonFilePreferenceStore::new(&config.preferences.path));
    UnitPreferences::new(store)
}

async fn show_photos(
    config: &AppConfig,
    cache: Arc<dyn SessionCachePort>,
    condition: &str,
    location: &str,
) {
    let Some(pexels) = config.pexels.to_client_config() else {
        warn!("Pexels API key is not set, skipping photos");
        println!("\n(photos unavailable: no Pexels API key configured)");
        return;
    };
    let adapter = match PexelsPhotoAdapter::new(&pexels) {
        Ok(adapter) => adapter,
        Err(e) => {
            warn!(error = %e, "Photo search unavailable");
            return;
        },
    };

    let decorator = ImageDecorator::new(Arc::new(adapter), cache);
    let photos = decorator
        .fetch_images(
            weather_image_queries(condition, location),
            config.pexels.per_page,
        )
        .await;
    println!("\n📷 Photos\n{}", render::photos(&photos));
}

async fn show(
    config: &AppConfig,
    coords: Option<GeoCoordinates>,
    selection: Option<SearchSelection>,
    hours: usize,
    with_photos: bool,
) -> anyhow::Result<()> {
    let weather = weather_port(config)?;
    let cache: Arc<dyn SessionCachePort> = Arc::new(MokaSessionCache::new());
    let forecasts = ForecastService::new(weather.clone(), cache.clone())
        .with_forecast_days(config.weather.forecast_days)?;
    let session = WeatherSession::new(Arc::new(forecasts), AstronomyLoader::new(weather));

    if let Some(coords) = coords {
        session.set_geolocation(coords);
    }
    if let Some(selection) = selection {
        session.select_location(selection);
    }

    let Some(query) = session.location_query() else {
        bail!("No location given: pass --lat and --lon, or --place");
    };
    debug!(query = %query, "Resolved location");

    session.refresh().await?;
    let state = session.state();
    let (Some(weather), Some(forecast)) = (state.weather, state.forecast) else {
        bail!("Weather for {query} was not applied");
    };

    let unit = unit_preferences(config).current().await;

    println!("{}\n", render::greeting_line(current_greeting(), &weather));
    println!("{}", render::current(&weather, unit));
    println!(
        "\n🕒 Next hours\n{}",
        render::hourly(hourly_window(&weather, &forecast, hours), unit)
    );
    println!("\n📅 Forecast\n{}", render::daily(&forecast, unit));
    if let Some(astro) = &state.astronomy {
        println!("\n🌗 Astronomy\n{}", render::astronomy(astro));
    }

    if with_photos {
        show_photos(
            config,
            cache,
            &weather.current.condition.text,
            &weather.location.name,
        )
        .await;
    }

    Ok(())
}

async fn search(config: &AppConfig, text: &str) -> anyhow::Result<()> {
    let suggester = SearchSuggester::new(weather_port(config)?)
        .with_debounce(config.dashboard.search_debounce());

    match suggester.suggest(text).await {
        SuggestionOutcome::Ready(items) => println!("{}", render::suggestions(&items)),
        SuggestionOutcome::Superseded => debug!("Search superseded"),
    }
    Ok(())
}

async fn unit(config: &AppConfig, action: Option<UnitAction>) -> anyhow::Result<()> {
    let prefs = unit_preferences(config);
    let unit = match action {
        None => prefs.current().await,
        Some(UnitAction::Toggle) => prefs.toggle().await?,
        Some(UnitAction::C) => {
            prefs.set(TemperatureUnit::Celsius).await?;
            TemperatureUnit::Celsius
        },
        Some(UnitAction::F) => {
            prefs.set(TemperatureUnit::Fahrenheit).await?;
            TemperatureUnit::Fahrenheit
        },
    };
    println!("🌡️  Temperature unit: {}", unit.symbol());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_logging(&config.telemetry)?;
    config.log_rejected_overrides();

    match cli.command {
        Commands::Show {
            lat,
            lon,
            place,
            region,
            country,
            hours,
            photos,
        } => {
            let coords = match (lat, lon) {
                (Some(lat), Some(lon)) => Some(GeoCoordinates::new(lat, lon)?),
                _ => None,
            };
            let selection = selection_from_args(place, region, country);
            let hours = hours.unwrap_or(config.dashboard.hourly_window);
            show(&config, coords, selection, hours, photos).await?;
        },

        Commands::Search { text } => search(&config, &text).await?,

        Commands::Unit { action } => unit(&config, action).await?,
    }

    Ok(())
}
