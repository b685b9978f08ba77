use crate::model::AgentId;
use thiserror::Error;

/// Départage des agents à score égal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Ordre croissant des identifiants.
    #[default]
    AgentId,
    /// Ordre de la flotte tel que fourni.
    RosterOrder,
    /// Mélange pseudo-aléatoire reproductible à graine égale.
    Seeded(u64),
}

/// Options d'allocation
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocateOptions {
    pub tie_break: TieBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Nombre d'agents au repos différent du quota du jour.
    QuotaMismatch {
        day: usize,
        expected: usize,
        actual: usize,
    },
    /// Agent de la flotte absent du planning.
    MissingAgent,
    /// Entrée du planning sans agent correspondant.
    UnknownAgent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub agent: Option<AgentId>,
    pub kind: ViolationKind,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("duplicate agent id in roster: {0}")]
    DuplicateAgent(String),
    #[error("unknown agent: {0}")]
    UnknownAgent(String),
    #[error("invalid weekday {0}: expected 0..=6")]
    InvalidWeekday(u8),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
