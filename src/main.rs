// ==========================================
// Jharkhand Trip Planner - main entry
// ==========================================
// Bootstraps logging, settings and application state, then
// warms the catalog for the default destination. The UI shell
// drives the APIs from here on.
// ==========================================

use jharkhand_trip_planner::app::AppState;
use jharkhand_trip_planner::config::ConfigManager;
use jharkhand_trip_planner::{i18n, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", jharkhand_trip_planner::APP_NAME);
    tracing::info!("version: {}", jharkhand_trip_planner::VERSION);
    tracing::info!("==================================================");

    let config = ConfigManager::load_default()
        .map_err(|e| anyhow::anyhow!("cannot load settings: {}", e))?;
    tracing::info!("settings file: {}", config.path().display());

    let settings = config.settings();
    i18n::set_locale(&settings.locale);
    let destination = settings.default_destination.clone();

    let app_state =
        AppState::new(config, None).map_err(|e| anyhow::anyhow!("cannot build AppState: {}", e))?;

    // Warm the catalog and the hotel markers concurrently.
    let (attractions, hotels) = futures::join!(
        app_state.catalog_api.load_attractions(&destination),
        app_state.catalog_api.list_hotels(),
    );

    let attractions = attractions?;
    match hotels {
        Ok(hotels) => {
            tracing::info!(
                "catalog ready: destination={}, attractions={}, hotels={}",
                destination,
                attractions.len(),
                hotels.len()
            );
        }
        Err(e) => {
            // Hotel markers are decorative; startup continues without them.
            tracing::warn!("hotels unavailable: {}", e);
            tracing::info!(
                "catalog ready: destination={}, attractions={}",
                destination,
                attractions.len()
            );
        }
    }

    Ok(())
}
