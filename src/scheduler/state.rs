use crate::model::DAYS_PER_WEEK;

/// Compteurs de repos d'une exécution, indexés comme la flotte.
/// Créés à zéro à chaque appel, jamais partagés.
#[derive(Debug)]
pub(super) struct AllocationState {
    rests: Vec<u8>,
}

impl AllocationState {
    pub(super) fn new(agents: usize) -> Self {
        Self {
            rests: vec![0; agents],
        }
    }

    pub(super) fn rests_so_far(&self, idx: usize) -> u8 {
        self.rests[idx]
    }

    pub(super) fn record_rest(&mut self, idx: usize) {
        debug_assert!(usize::from(self.rests[idx]) < DAYS_PER_WEEK);
        self.rests[idx] += 1;
    }
}
