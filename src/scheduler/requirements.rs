use crate::model::DAYS_PER_WEEK;

/// Besoin appliqué à un jour absent ou invalide du vecteur fourni.
pub const DEFAULT_REQUIREMENT: u32 = 8;

/// Nombre minimal d'agents actifs par jour, après résolution des défauts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRequirement([u32; DAYS_PER_WEEK]);

impl Default for DailyRequirement {
    fn default() -> Self {
        Self::uniform(DEFAULT_REQUIREMENT)
    }
}

impl DailyRequirement {
    pub fn uniform(active: u32) -> Self {
        Self([active; DAYS_PER_WEEK])
    }

    /// Résout un vecteur brut : jours manquants et valeurs négatives prennent
    /// `DEFAULT_REQUIREMENT`, les entrées au-delà du 7e jour sont ignorées.
    pub fn resolve(raw: &[i64]) -> Self {
        let mut days = [DEFAULT_REQUIREMENT; DAYS_PER_WEEK];
        for (slot, value) in days.iter_mut().zip(raw) {
            if *value >= 0 {
                *slot = u32::try_from(*value).unwrap_or(u32::MAX);
            }
        }
        Self(days)
    }

    pub fn get(&self, day: usize) -> u32 {
        self.0[day]
    }

    pub fn as_array(&self) -> &[u32; DAYS_PER_WEEK] {
        &self.0
    }

    /// `max(0, total − besoin)`.
    pub fn rests_to_assign(&self, day: usize, total_agents: usize) -> usize {
        let needed = usize::try_from(self.0[day]).unwrap_or(usize::MAX);
        total_agents.saturating_sub(needed)
    }
}

impl From<[u32; DAYS_PER_WEEK]> for DailyRequirement {
    fn from(days: [u32; DAYS_PER_WEEK]) -> Self {
        Self(days)
    }
}
