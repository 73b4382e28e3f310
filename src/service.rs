use std::time::Duration;

use log::{info, warn};
use tokio::time::timeout;

use crate::assembler::{assemble, video_query, VIDEO_CANDIDATE_LIMIT};
use crate::config::AppConfig;
use crate::error::Error;
use crate::favorites::FavoritesStore;
use crate::model::{Recipe, RecipeSummary, VideoCandidate};
use crate::providers::{RecipeProvider, SpoonacularClient, VideoProvider, YouTubeClient};

/// How many summaries a no-query "popular" search asks for.
pub const POPULAR_LIMIT: u32 = 12;
/// How many summaries a query search asks for.
pub const SEARCH_LIMIT: u32 = 20;

/// The operations the presentation layer calls.
///
/// Owns the recipe provider, the optional video provider, and the
/// favorites store. The recipe provider is required for every fetch;
/// the video provider is best-effort enrichment with its own failure
/// boundary and never affects whether a request succeeds.
pub struct RecipeService {
    recipes: Box<dyn RecipeProvider>,
    videos: Option<Box<dyn VideoProvider>>,
    video_timeout: Duration,
    favorites: FavoritesStore,
}

impl RecipeService {
    pub fn new(
        recipes: Box<dyn RecipeProvider>,
        videos: Option<Box<dyn VideoProvider>>,
        video_timeout: Duration,
    ) -> Self {
        RecipeService {
            recipes,
            videos,
            video_timeout,
            favorites: FavoritesStore::new(),
        }
    }

    /// Build a service from [`AppConfig`], wiring the Spoonacular and
    /// YouTube clients. A missing YouTube key simply disables video
    /// lookup.
    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        let recipes = SpoonacularClient::new(&config.recipes)?;
        let videos = YouTubeClient::from_config(&config.videos)?;
        if videos.is_none() {
            info!("video provider not configured, recipes will have no videos");
        }

        Ok(RecipeService::new(
            Box::new(recipes),
            videos.map(|v| Box::new(v) as Box<dyn VideoProvider>),
            Duration::from_secs(config.videos.timeout),
        ))
    }

    /// Popular recipes: a provider search with no query.
    pub async fn popular(&self) -> Result<Vec<RecipeSummary>, Error> {
        self.recipes.search(None, POPULAR_LIMIT).await
    }

    /// Search recipe summaries by free-text query.
    pub async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, Error> {
        if query.trim().is_empty() {
            return Err(Error::EmptyQuery);
        }
        self.recipes.search(Some(query), SEARCH_LIMIT).await
    }

    /// Fetch and assemble one recipe.
    ///
    /// The detail fetch is required and any failure there aborts the
    /// whole request. The video lookup that follows is bounded by the
    /// configured timeout and downgraded to "no video" on any error.
    pub async fn recipe(&self, id: i64) -> Result<Recipe, Error> {
        let detail = self.recipes.detail(id).await?;
        let candidates = self.lookup_video(&detail.title).await;
        Ok(assemble(detail, &candidates))
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// Best-effort video search. Errors and timeouts end up here as an
    /// empty candidate list, never as a caller-visible failure.
    async fn lookup_video(&self, title: &str) -> Vec<VideoCandidate> {
        let Some(videos) = &self.videos else {
            return Vec::new();
        };

        let query = video_query(title);
        match timeout(
            self.video_timeout,
            videos.search(&query, VIDEO_CANDIDATE_LIMIT as u32),
        )
        .await
        {
            Ok(Ok(candidates)) => candidates,
            Ok(Err(e)) => {
                warn!("video search failed, continuing without video: {e}");
                Vec::new()
            }
            Err(_) => {
                warn!(
                    "video search timed out after {:?}, continuing without video",
                    self.video_timeout
                );
                Vec::new()
            }
        }
    }
}
