#![forbid(unsafe_code)]
//! Relâche — répartition hebdomadaire des jours de repos d'une flotte (sans BD).
//!
//! - Allocation gloutonne jour par jour, pondérée par catégorie de véhicule.
//! - Priorité de travail et jours souhaités comme simples perturbations du score.
//! - Départage déterministe (id, ordre de flotte ou graine explicite).
//! - Stockage fichiers (JSON/CSV) côté appelant.

pub mod io;
pub mod model;
pub mod schedule;
pub mod scheduler;
pub mod storage;

pub use model::{Agent, AgentId, Category, Fleet, DAYS_PER_WEEK, DEFAULT_DAILY_NEEDS};
pub use schedule::{ScheduleResult, WeekRest, DAY_LABELS};
pub use scheduler::{
    allocate, AllocateOptions, DailyRequirement, SchedError, Scheduler, TieBreak, Violation,
    ViolationKind,
};
pub use storage::{JsonStorage, Storage};
