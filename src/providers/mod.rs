pub mod spoonacular;
pub mod youtube;

pub use spoonacular::SpoonacularClient;
pub use youtube::YouTubeClient;

use async_trait::async_trait;

use crate::error::Error;
use crate::model::{RecipeSummary, VideoCandidate};
use crate::providers::spoonacular::RecipeDetail;

/// Seam over the third-party recipe data source.
///
/// `search` with no query is how callers ask for "popular" recipes; the
/// provider's own relevance ordering is preserved in the result.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "spoonacular")
    fn provider_name(&self) -> &str;

    /// Search for recipe summaries, optionally filtered by a query
    async fn search(&self, query: Option<&str>, limit: u32)
        -> Result<Vec<RecipeSummary>, Error>;

    /// Fetch the full raw payload for one recipe, nutrition included
    async fn detail(&self, id: i64) -> Result<RecipeDetail, Error>;
}

/// Seam over the instructional-video search source.
///
/// Results are ordered by the provider's relevance rank; the matcher
/// downstream depends on that ordering.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Get the provider name (e.g., "youtube")
    fn provider_name(&self) -> &str;

    /// Search for candidate videos matching a query
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<VideoCandidate>, Error>;
}
