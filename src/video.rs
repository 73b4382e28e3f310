use crate::model::VideoCandidate;

/// Pick the best instructional video for a recipe from ranked candidates.
///
/// Candidates arrive in provider relevance order and that order is the
/// tie-break: the first candidate passing the match gate wins outright.
/// The gate accepts a candidate when at least two words of the recipe
/// title appear somewhere in its title, or when the title carries the
/// phrases "recipe" or "how to make". When nothing passes the gate the
/// top-ranked candidate is used anyway; only an empty list yields `None`.
///
/// Title words come from splitting on single spaces with no punctuation
/// handling, and matching is substring containment rather than token
/// equality ("stew" matches inside "stewart"). Both quirks are part of
/// the observable behavior and are kept as-is.
pub fn select_video(recipe_title: &str, candidates: &[VideoCandidate]) -> Option<String> {
    let recipe_title = recipe_title.to_lowercase();
    let words: Vec<&str> = recipe_title.split(' ').collect();

    for candidate in candidates {
        let title = candidate.title.to_lowercase();
        let match_count = words.iter().filter(|word| title.contains(*word)).count();

        if match_count >= 2 || title.contains("recipe") || title.contains("how to make") {
            return Some(candidate.id.clone());
        }
    }

    candidates.first().map(|c| c.id.clone())
}
