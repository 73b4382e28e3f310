use std::sync::LazyLock;

use regex::Regex;

use crate::providers::spoonacular::InstructionGroup;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static STEP_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\s+").unwrap());

/// Flatten a recipe payload's instructions into an ordered step list.
///
/// Providers expose instructions in one of two shapes: structured step
/// groups, or a single free-text blob that may contain HTML markup and
/// "1. ..." style numbering. When groups are present only the first group
/// is used and its step texts are emitted verbatim; the fallback path
/// strips tags and splits the blob on the numbering pattern.
///
/// Tag-stripping is exactly that - anything matching `<...>` is removed,
/// with no entity decoding and no HTML parsing. Callers are expected to
/// trim each entry and drop the ones left empty.
pub fn normalize_instructions(groups: &[InstructionGroup], raw: Option<&str>) -> Vec<String> {
    if let Some(first) = groups.first() {
        return first.steps.iter().map(|s| s.step.clone()).collect();
    }

    match raw {
        Some(text) => {
            let stripped = TAG_RE.replace_all(text, "");
            STEP_SPLIT_RE
                .split(&stripped)
                .filter(|piece| !piece.trim().is_empty())
                .map(|piece| piece.to_string())
                .collect()
        }
        None => Vec::new(),
    }
}
