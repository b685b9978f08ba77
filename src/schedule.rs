use crate::model::{Agent, AgentId, DAYS_PER_WEEK};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semaine d'un agent : `true` au jour `d` = repos.
pub type WeekRest = [bool; DAYS_PER_WEEK];

/// Étiquettes courtes des jours (index 0 = lundi).
pub const DAY_LABELS: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Planning de repos produit par l'allocateur : une entrée par agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleResult {
    rests: BTreeMap<AgentId, WeekRest>,
}

impl ScheduleResult {
    /// Planning vide (tout le monde actif) pour les agents donnés.
    pub(crate) fn for_agents<'a, I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'a AgentId>,
    {
        Self {
            rests: ids
                .into_iter()
                .map(|id| (id.clone(), [false; DAYS_PER_WEEK]))
                .collect(),
        }
    }

    pub(crate) fn mark_rest(&mut self, id: &AgentId, day: usize) {
        if let Some(week) = self.rests.get_mut(id) {
            week[day] = true;
        }
    }

    pub fn get(&self, id: &AgentId) -> Option<&WeekRest> {
        self.rests.get(id)
    }

    pub fn is_resting(&self, id: &AgentId, day: usize) -> bool {
        self.rests.get(id).is_some_and(|week| week[day])
    }

    pub fn len(&self) -> usize {
        self.rests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rests.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AgentId, &WeekRest)> {
        self.rests.iter()
    }

    /// Nombre de repos de la semaine pour un agent (0 si inconnu).
    pub fn total_rests(&self, id: &AgentId) -> usize {
        self.rests
            .get(id)
            .map_or(0, |week| week.iter().filter(|r| **r).count())
    }

    /// Nombre d'agents au repos pour chaque jour.
    pub fn resting_per_day(&self) -> [usize; DAYS_PER_WEEK] {
        let mut counts = [0usize; DAYS_PER_WEEK];
        for week in self.rests.values() {
            for (count, rest) in counts.iter_mut().zip(week) {
                if *rest {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// Grille texte compacte, dans l'ordre de `agents`.
    ///
    /// `R` = repos, `.` = actif ; `*` marque un agent prioritaire.
    pub fn render_text(&self, agents: &[Agent]) -> String {
        let mut lines = vec!["MTWTFSS".to_string()];
        for agent in agents {
            let Some(week) = self.rests.get(&agent.id) else {
                continue;
            };
            let marks: String = week.iter().map(|r| if *r { 'R' } else { '.' }).collect();
            let prio = if agent.priority { " *" } else { "" };
            lines.push(format!(
                "{marks} {total}d  {name} ({category}){prio}",
                total = self.total_rests(&agent.id),
                name = agent.name,
                category = agent.category,
            ));
        }
        let per_day: Vec<String> = self
            .resting_per_day()
            .iter()
            .map(|c| c.to_string())
            .collect();
        lines.push(format!("per day: {}", per_day.join(" ")));
        lines.join("\n")
    }
}
