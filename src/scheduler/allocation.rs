use super::requirements::DailyRequirement;
use super::state::AllocationState;
use super::{scoring, weights, AllocateOptions, SchedError, TieBreak};
use crate::model::{Agent, DAYS_PER_WEEK};
use crate::schedule::ScheduleResult;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Répartit les repos jour par jour, de façon gloutonne.
///
/// Chaque jour, `max(0, total − besoin)` agents au score le plus bas se
/// reposent ; les scores sont recalculés le lendemain à partir des compteurs
/// mis à jour.
pub fn allocate(
    agents: &[Agent],
    requirements: &DailyRequirement,
    opts: AllocateOptions,
) -> Result<ScheduleResult, SchedError> {
    ensure_unique_ids(agents)?;

    let mut schedule = ScheduleResult::for_agents(agents.iter().map(|a| &a.id));
    if agents.is_empty() {
        return Ok(schedule);
    }

    let weights: Vec<f64> = agents
        .iter()
        .map(|a| weights::rest_weight(&a.category))
        .collect();
    let mut state = AllocationState::new(agents.len());
    let mut rng = match opts.tie_break {
        TieBreak::Seeded(seed) => Some(SmallRng::seed_from_u64(seed)),
        TieBreak::AgentId | TieBreak::RosterOrder => None,
    };

    for day in 0..DAYS_PER_WEEK {
        let rests_to_assign = requirements.rests_to_assign(day, agents.len());
        if rests_to_assign == 0 {
            continue;
        }

        let mut pool: Vec<(usize, f64)> = agents
            .iter()
            .enumerate()
            .map(|(idx, agent)| {
                let score = scoring::rest_score(state.rests_so_far(idx), agent, weights[idx], day);
                (idx, score)
            })
            .collect();

        match opts.tie_break {
            TieBreak::AgentId => pool.sort_by(|a, b| {
                by_score(a, b).then_with(|| agents[a.0].id.cmp(&agents[b.0].id))
            }),
            TieBreak::RosterOrder => pool.sort_by(by_score),
            TieBreak::Seeded(_) => {
                if let Some(rng) = rng.as_mut() {
                    pool.shuffle(rng);
                }
                pool.sort_by(by_score);
            }
        }

        for &(idx, _) in pool.iter().take(rests_to_assign) {
            schedule.mark_rest(&agents[idx].id, day);
            state.record_rest(idx);
        }

        #[cfg(feature = "logging")]
        tracing::debug!(
            day,
            rests_to_assign,
            resting = ?pool
                .iter()
                .take(rests_to_assign)
                .map(|(idx, _)| agents[*idx].id.as_str())
                .collect::<Vec<_>>(),
            "rests assigned"
        );
    }

    Ok(schedule)
}

fn ensure_unique_ids(agents: &[Agent]) -> Result<(), SchedError> {
    let mut seen = HashSet::with_capacity(agents.len());
    match agents.iter().find(|a| !seen.insert(&a.id)) {
        Some(dup) => Err(SchedError::DuplicateAgent(dup.id.as_str().to_string())),
        None => Ok(()),
    }
}

// `sort_by` est stable : à score égal l'ordre courant du pool est conservé.
fn by_score(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    a.1.total_cmp(&b.1)
}
