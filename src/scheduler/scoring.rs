use crate::model::Agent;

/// Surcoût appliqué aux agents prioritaires (repos retardé).
pub const PRIORITY_BIAS: f64 = 0.7;
/// Bonus d'un jour souhaité.
pub const PREFERENCE_BONUS: f64 = 0.15;
/// Bonus d'un jour souhaité quand la préférence est prioritaire.
pub const PREFERENCE_PRIORITY_BONUS: f64 = 0.8;

/// Score de repos du jour : plus il est bas, plus le repos est dû.
///
/// `(repos_cumulés + biais_priorité) / poids`, moins le bonus de préférence
/// si `day` fait partie des jours souhaités.
pub fn rest_score(rests_so_far: u8, agent: &Agent, weight: f64, day: usize) -> f64 {
    let bias = if agent.priority { PRIORITY_BIAS } else { 0.0 };
    let mut score = (f64::from(rests_so_far) + bias) / weight;

    if agent.prefers_rest_on(day) {
        score -= if agent.preference_priority {
            PREFERENCE_PRIORITY_BONUS
        } else {
            PREFERENCE_BONUS
        };
    }

    score
}
