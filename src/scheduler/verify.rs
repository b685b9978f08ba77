use super::requirements::DailyRequirement;
use super::{Violation, ViolationKind};
use crate::model::{Agent, DAYS_PER_WEEK};
use crate::schedule::ScheduleResult;

/// Compare un planning (éventuellement rechargé depuis un fichier) à la
/// flotte et aux besoins courants.
pub(super) fn verify_schedule(
    agents: &[Agent],
    requirements: &DailyRequirement,
    schedule: &ScheduleResult,
) -> Vec<Violation> {
    let mut out = Vec::new();

    for agent in agents {
        if schedule.get(&agent.id).is_none() {
            out.push(Violation {
                agent: Some(agent.id.clone()),
                kind: ViolationKind::MissingAgent,
            });
        }
    }

    for (id, _) in schedule.iter() {
        if !agents.iter().any(|a| &a.id == id) {
            out.push(Violation {
                agent: Some(id.clone()),
                kind: ViolationKind::UnknownAgent,
            });
        }
    }

    let resting = schedule.resting_per_day();
    for day in 0..DAYS_PER_WEEK {
        let expected = requirements.rests_to_assign(day, agents.len());
        if resting[day] != expected {
            out.push(Violation {
                agent: None,
                kind: ViolationKind::QuotaMismatch {
                    day,
                    expected,
                    actual: resting[day],
                },
            });
        }
    }

    out
}
