use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe provider (Spoonacular-shaped API) settings
    #[serde(default)]
    pub recipes: RecipeApiConfig,
    /// Video provider (YouTube-shaped API) settings
    #[serde(default)]
    pub videos: VideoApiConfig,
}

/// Settings for the recipe data provider
#[derive(Debug, Deserialize, Clone)]
pub struct RecipeApiConfig {
    /// API key for authentication (can also be set via SPOONACULAR_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint (for proxies and tests)
    #[serde(default = "default_recipe_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// Settings for the optional video provider
///
/// A missing API key means video lookup is skipped entirely; it is
/// never a configuration error.
#[derive(Debug, Deserialize, Clone)]
pub struct VideoApiConfig {
    /// API key for authentication (can also be set via YOUTUBE_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint (for proxies and tests)
    #[serde(default = "default_video_base_url")]
    pub base_url: String,
    /// Upper bound on a video search in seconds; on expiry the recipe
    /// is assembled without a video
    #[serde(default = "default_video_timeout")]
    pub timeout: u64,
}

impl Default for RecipeApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_recipe_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for VideoApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_video_base_url(),
            timeout: default_video_timeout(),
        }
    }
}

// Default value functions
fn default_recipe_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_video_base_url() -> String {
    "https://www.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_video_timeout() -> u64 {
    5
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RELAY__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RELAY__RECIPES__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RELAY__VIDEOS__TIMEOUT
            .add_source(
                Environment::with_prefix("RELAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
