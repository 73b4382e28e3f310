use crate::model::Nutrition;
use crate::providers::spoonacular::Nutrient;

/// Map a raw nutrient list onto the fixed canonical [`Nutrition`] record.
///
/// Lookup is by exact, case-sensitive label match against the provider's
/// human-readable names ("Calories", "Saturated Fat", ...). The first
/// matching entry wins when the list carries duplicates. A missing label
/// or a zero amount both yield 0 for that field.
///
/// Callers decide the outer default: a payload with no nutrition section
/// at all gets `None`, while a present-but-sparse section gets a
/// zero-filled record from this function.
pub fn extract_nutrition(nutrients: &[Nutrient]) -> Nutrition {
    Nutrition {
        calories: amount_of(nutrients, "Calories"),
        protein: amount_of(nutrients, "Protein"),
        carbs: amount_of(nutrients, "Carbohydrates"),
        fat: amount_of(nutrients, "Fat"),
        fiber: amount_of(nutrients, "Fiber"),
        sugar: amount_of(nutrients, "Sugar"),
        sodium: amount_of(nutrients, "Sodium"),
        cholesterol: amount_of(nutrients, "Cholesterol"),
        saturated_fat: amount_of(nutrients, "Saturated Fat"),
        vitamin_c: amount_of(nutrients, "Vitamin C"),
        calcium: amount_of(nutrients, "Calcium"),
        iron: amount_of(nutrients, "Iron"),
        potassium: amount_of(nutrients, "Potassium"),
        vitamin_a: amount_of(nutrients, "Vitamin A"),
        vitamin_b6: amount_of(nutrients, "Vitamin B6"),
        magnesium: amount_of(nutrients, "Magnesium"),
    }
}

fn amount_of(nutrients: &[Nutrient], name: &str) -> f64 {
    nutrients
        .iter()
        .find(|n| n.name == name)
        .map(|n| n.amount)
        .unwrap_or(0.0)
}
