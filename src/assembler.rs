use crate::instructions::normalize_instructions;
use crate::model::{Recipe, VideoCandidate};
use crate::nutrition::extract_nutrition;
use crate::providers::spoonacular::RecipeDetail;
use crate::video::select_video;

/// At most this many ranked candidates are considered for a video match.
pub const VIDEO_CANDIDATE_LIMIT: usize = 3;

/// Compose a raw detail payload and ranked video candidates into the
/// canonical [`Recipe`].
///
/// Pass-through fields keep per-field defaults: missing cuisines and
/// ingredients become empty lists, missing servings and readyInMinutes
/// stay absent rather than zero. Nutrition follows the two-tier policy:
/// no nutrition section in the payload means `None`, a present section
/// is extracted into a zero-filled record. Instructions come from the
/// normalizer, then are trimmed with empties dropped.
///
/// Candidates beyond [`VIDEO_CANDIDATE_LIMIT`] are ignored. An empty
/// candidate slice yields a recipe without a video, never an error.
pub fn assemble(detail: RecipeDetail, candidates: &[VideoCandidate]) -> Recipe {
    let instructions = normalize_instructions(
        &detail.analyzed_instructions,
        detail.instructions.as_deref(),
    )
    .iter()
    .map(|step| step.trim().to_string())
    .filter(|step| !step.is_empty())
    .collect();

    let nutrition = detail
        .nutrition
        .as_ref()
        .map(|section| extract_nutrition(&section.nutrients));

    let capped = &candidates[..candidates.len().min(VIDEO_CANDIDATE_LIMIT)];
    let video_id = select_video(&detail.title, capped);

    Recipe {
        id: detail.id,
        title: detail.title,
        image: detail.image,
        servings: detail.servings,
        ready_in_minutes: detail.ready_in_minutes,
        cuisines: detail.cuisines,
        ingredients: detail
            .extended_ingredients
            .into_iter()
            .map(|i| i.original)
            .collect(),
        instructions,
        nutrition,
        video_id,
    }
}

/// The literal search phrase used to find an instructional video.
pub fn video_query(title: &str) -> String {
    format!("how to make {title} recipe step by step")
}
