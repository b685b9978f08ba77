use crate::model::Category;

/// Poids des catégories absentes de la table.
pub const NEUTRAL_WEIGHT: f64 = 1.0;

/// Poids de repos proportionnel : plus il est élevé, plus la catégorie se
/// repose souvent. Un `Car` (2.0) tend à se reposer deux fois plus qu'un `Van`.
pub fn rest_weight(category: &Category) -> f64 {
    match category {
        Category::Van => 1.0,
        Category::Truck => 1.5,
        Category::Car => 2.0,
        Category::Custom(_) => NEUTRAL_WEIGHT,
    }
}
