mod allocation;
mod requirements;
mod scoring;
mod state;
mod types;
mod verify;
mod weights;

pub use allocation::allocate;
pub use requirements::{DailyRequirement, DEFAULT_REQUIREMENT};
pub use scoring::{rest_score, PREFERENCE_BONUS, PREFERENCE_PRIORITY_BONUS, PRIORITY_BIAS};
pub use types::{AllocateOptions, SchedError, TieBreak, Violation, ViolationKind};
pub use weights::{rest_weight, NEUTRAL_WEIGHT};

use crate::model::{Agent, Fleet, DAYS_PER_WEEK};
use crate::schedule::ScheduleResult;

/// Scheduler : encapsule une Fleet en cours d'édition
#[derive(Debug, Default)]
pub struct Scheduler {
    fleet: Fleet,
    options: AllocateOptions,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            fleet: Fleet::default(),
            options: AllocateOptions::default(),
        }
    }

    pub fn with_fleet(fleet: Fleet) -> Self {
        Self {
            fleet,
            ..Self::new()
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }
    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    pub fn set_options(&mut self, options: AllocateOptions) {
        self.options = options;
    }

    pub fn add_agents(&mut self, agents: Vec<Agent>) {
        self.fleet.agents.extend(agents);
    }

    pub fn remove_agent(&mut self, key: &str) -> Result<Agent, SchedError> {
        let agent_id = self
            .fleet
            .find_agent(key)
            .map(|a| a.id.clone())
            .ok_or_else(|| SchedError::UnknownAgent(key.to_string()))?;
        let pos = self
            .fleet
            .agents
            .iter()
            .position(|a| a.id == agent_id)
            .ok_or_else(|| SchedError::UnknownAgent(key.to_string()))?;
        Ok(self.fleet.agents.remove(pos))
    }

    /// Bascule la priorité de travail ; renvoie le nouvel état.
    pub fn toggle_priority(&mut self, key: &str) -> Result<bool, SchedError> {
        let agent = self.agent_mut(key)?;
        agent.priority = !agent.priority;
        Ok(agent.priority)
    }

    pub fn toggle_preference_priority(&mut self, key: &str) -> Result<bool, SchedError> {
        let agent = self.agent_mut(key)?;
        agent.preference_priority = !agent.preference_priority;
        Ok(agent.preference_priority)
    }

    /// Ajoute ou retire `day` des jours de repos souhaités ; renvoie `true`
    /// si le jour est désormais souhaité.
    pub fn toggle_rest_day(&mut self, key: &str, day: u8) -> Result<bool, SchedError> {
        if usize::from(day) >= DAYS_PER_WEEK {
            return Err(SchedError::InvalidWeekday(day));
        }
        let agent = self.agent_mut(key)?;
        if agent.preferred_rest_days.remove(&day) {
            Ok(false)
        } else {
            agent.preferred_rest_days.insert(day);
            Ok(true)
        }
    }

    pub fn set_requirements(&mut self, requirements: Vec<i64>) {
        self.fleet.requirements = requirements;
    }

    pub fn requirements(&self) -> DailyRequirement {
        DailyRequirement::resolve(&self.fleet.requirements)
    }

    /// Génère un planning neuf ; chaque appel repart de zéro repos.
    pub fn generate(&self) -> Result<ScheduleResult, SchedError> {
        allocate(&self.fleet.agents, &self.requirements(), self.options)
    }

    pub fn verify(&self, schedule: &ScheduleResult) -> Vec<Violation> {
        verify::verify_schedule(&self.fleet.agents, &self.requirements(), schedule)
    }

    fn agent_mut(&mut self, key: &str) -> Result<&mut Agent, SchedError> {
        self.fleet
            .find_agent_mut(key)
            .ok_or_else(|| SchedError::UnknownAgent(key.to_string()))
    }
}
