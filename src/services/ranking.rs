// src/services/ranking.rs

//! Selection of matching jobs under a [`Ranking`] strategy.

use crate::models::{Job, JobSlot, Ranking};

/// Pick at most `limit` jobs out of `candidates` (job, distance in km).
///
/// `FirstFound` stops scanning as soon as `limit` jobs are collected, so the
/// outcome follows the store's unspecified order. `Nearest` looks at every
/// candidate and keeps the closest, breaking distance ties by identifier.
pub(crate) fn select<'a>(
    candidates: impl Iterator<Item = (&'a Job, f64)>,
    limit: usize,
    ranking: Ranking,
) -> Vec<JobSlot> {
    match ranking {
        Ranking::FirstFound => candidates
            .take(limit)
            .map(|(job, _)| JobSlot::Found(job.clone()))
            .collect(),
        Ranking::Nearest => {
            let mut ranked: Vec<(&Job, f64)> = candidates.collect();
            ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.id.cmp(&b.0.id)));
            ranked
                .into_iter()
                .take(limit)
                .map(|(job, _)| JobSlot::Found(job.clone()))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(slots: &[JobSlot]) -> Vec<&str> {
        slots
            .iter()
            .filter_map(|s| s.job().map(|j| j.id.as_str()))
            .collect()
    }

    #[test]
    fn test_nearest_sorts_by_distance_then_id() {
        let far = Job::new("far", "Cook", 0.0, 0.0);
        let near_b = Job::new("b", "Cook", 0.0, 0.0);
        let near_a = Job::new("a", "Cook", 0.0, 0.0);
        let candidates = vec![(&far, 4.0), (&near_b, 1.0), (&near_a, 1.0)];

        let slots = select(candidates.into_iter(), 2, Ranking::Nearest);
        assert_eq!(ids(&slots), vec!["a", "b"]);
    }

    #[test]
    fn test_first_found_keeps_scan_order() {
        let first = Job::new("x", "Cook", 0.0, 0.0);
        let second = Job::new("y", "Cook", 0.0, 0.0);
        let third = Job::new("z", "Cook", 0.0, 0.0);
        let candidates = vec![(&first, 3.0), (&second, 2.0), (&third, 1.0)];

        let slots = select(candidates.into_iter(), 2, Ranking::FirstFound);
        assert_eq!(ids(&slots), vec!["x", "y"]);
    }

    #[test]
    fn test_limit_larger_than_candidates() {
        let job = Job::new("only", "Cook", 0.0, 0.0);
        let slots = select(vec![(&job, 0.5)].into_iter(), 5, Ranking::Nearest);
        assert_eq!(slots.len(), 1);
    }
}
