pub mod assembler;
pub mod config;
pub mod error;
pub mod favorites;
pub mod instructions;
pub mod model;
pub mod nutrition;
pub mod providers;
pub mod service;
pub mod video;

pub use config::AppConfig;
pub use error::Error;
pub use favorites::FavoritesStore;
pub use model::{Nutrition, Recipe, RecipeSummary, VideoCandidate};
pub use service::RecipeService;

/// Build a [`RecipeService`] from config.toml and environment variables.
///
/// Requires a Spoonacular API key (config or SPOONACULAR_API_KEY); a
/// YouTube key is optional and merely enables video lookup.
pub fn service_from_env() -> Result<RecipeService, Error> {
    let config = AppConfig::load()?;
    RecipeService::from_config(&config)
}
