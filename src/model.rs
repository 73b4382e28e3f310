use serde::{Deserialize, Serialize};

/// Canonical recipe record returned to callers.
///
/// Built once per detail request by the assembler and never mutated
/// afterwards. Field names on the wire are camelCase to match the
/// JSON bodies the presentation layer expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub servings: Option<u32>,
    pub ready_in_minutes: Option<u32>,
    pub cuisines: Vec<String>,
    pub ingredients: Vec<String>,
    /// Ordered preparation steps. Never contains empty or
    /// whitespace-only entries.
    pub instructions: Vec<String>,
    pub nutrition: Option<Nutrition>,
    pub video_id: Option<String>,
}

/// Fixed canonical nutrition record.
///
/// Every field defaults to 0 when the source nutrient list has no
/// matching entry. A `Recipe` carries `None` instead of a record when
/// the provider payload had no nutrition section at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub cholesterol: f64,
    pub saturated_fat: f64,
    pub vitamin_c: f64,
    pub calcium: f64,
    pub iron: f64,
    pub potassium: f64,
    pub vitamin_a: f64,
    pub vitamin_b6: f64,
    pub magnesium: f64,
}

/// Summary record from a provider search, passed through unassembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
}

/// A ranked instructional-video candidate, used only during matching.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoCandidate {
    pub id: String,
    pub title: String,
}
