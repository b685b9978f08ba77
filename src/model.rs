use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Nombre de jours d'un cycle (index 0 = lundi).
pub const DAYS_PER_WEEK: usize = 7;

/// Besoins par défaut d'une flotte neuve (lundi → dimanche).
pub const DEFAULT_DAILY_NEEDS: [i64; DAYS_PER_WEEK] = [8, 8, 8, 8, 8, 6, 6];

/// Identifiant fort pour Agent
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(String);

impl AgentId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catégorie de véhicule. Chaque catégorie a un poids de repos fixe
/// (voir `scheduler::weights`) ; `Custom` retombe sur le poids neutre.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Van,
    Truck,
    Car,
    Custom(String),
}

impl Category {
    pub fn label(&self) -> &str {
        match self {
            Category::Van => "Van",
            Category::Truck => "Truck",
            Category::Car => "Car",
            Category::Custom(label) => label,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        match raw.to_ascii_lowercase().as_str() {
            "" => Err("category cannot be empty".to_string()),
            "van" => Ok(Category::Van),
            "truck" | "camioneta" => Ok(Category::Truck),
            "car" | "auto" => Ok(Category::Car),
            _ => Ok(Category::Custom(raw.to_string())),
        }
    }
}

/// Agent (conducteur) à planifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub category: Category,
    /// Priorité de travail : retarde le repos de l'agent.
    #[serde(default)]
    pub priority: bool,
    /// Amplifie l'effet des jours de repos souhaités.
    #[serde(default)]
    pub preference_priority: bool,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub preferred_rest_days: BTreeSet<u8>,
}

impl Agent {
    pub fn new<N: Into<String>>(name: N, category: Category) -> Self {
        Self {
            id: AgentId::random(),
            name: name.into(),
            category,
            priority: false,
            preference_priority: false,
            preferred_rest_days: BTreeSet::new(),
        }
    }

    /// Comme `new` mais avec un identifiant choisi par l'appelant.
    pub fn with_id<N: Into<String>>(id: AgentId, name: N, category: Category) -> Self {
        Self {
            id,
            ..Self::new(name, category)
        }
    }

    pub fn prefers_rest_on(&self, day: usize) -> bool {
        u8::try_from(day).is_ok_and(|d| self.preferred_rest_days.contains(&d))
    }
}

/// Flotte persistée par l'appelant : agents + vecteur brut des besoins.
///
/// Les besoins restent bruts (`i64`) ; la résolution des valeurs manquantes
/// ou négatives se fait à l'entrée de l'allocateur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    #[serde(default)]
    pub agents: Vec<Agent>,
    #[serde(default = "default_requirements")]
    pub requirements: Vec<i64>,
}

impl Default for Fleet {
    fn default() -> Self {
        Self {
            agents: Vec::new(),
            requirements: default_requirements(),
        }
    }
}

fn default_requirements() -> Vec<i64> {
    DEFAULT_DAILY_NEEDS.to_vec()
}

impl Fleet {
    pub fn find_agent_by_id<'a>(&'a self, id: &AgentId) -> Option<&'a Agent> {
        self.agents.iter().find(|a| &a.id == id)
    }

    /// Recherche par id, puis par nom exact.
    pub fn find_agent<'a>(&'a self, key: &str) -> Option<&'a Agent> {
        self.agents
            .iter()
            .find(|a| a.id.as_str() == key)
            .or_else(|| self.agents.iter().find(|a| a.name == key))
    }

    pub fn find_agent_mut(&mut self, key: &str) -> Option<&mut Agent> {
        let pos = self
            .agents
            .iter()
            .position(|a| a.id.as_str() == key)
            .or_else(|| self.agents.iter().position(|a| a.name == key))?;
        self.agents.get_mut(pos)
    }
}
