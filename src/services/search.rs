// src/services/search.rs

//! Title and proximity search over the job store.

use crate::models::{Coordinates, JobSlot, SearchParams};
use crate::services::padding::{pad_to, placeholders};
use crate::services::ranking::select;
use crate::storage::JobStore;
use crate::utils::geo::within_radius;
use crate::utils::text::{normalize_whitespace, title_case};

/// Number of entries in a search result list.
pub const SEARCH_DISPLAY_SIZE: usize = SearchParams::MAX_RESULTS;

/// Find jobs whose title contains `title` and that lie within the radius.
///
/// The filter is whitespace-normalized and title-cased before the substring
/// check, which is otherwise case-sensitive. The result always holds exactly
/// [`SEARCH_DISPLAY_SIZE`] entries: missing matches are placeholders. A blank
/// filter matches nothing.
pub fn search(
    store: &JobStore,
    title: &str,
    center: Coordinates,
    params: &SearchParams,
) -> Vec<JobSlot> {
    let filter = title_case(&normalize_whitespace(title));
    if filter.is_empty() {
        return placeholders(SEARCH_DISPLAY_SIZE);
    }

    let candidates = store
        .iter()
        .filter(|job| job.title.contains(&filter))
        .filter_map(|job| {
            let distance = job.distance_from(center);
            within_radius(distance, params.radius_km()).then_some((job, distance))
        });

    let mut slots = select(candidates, params.max_results(), params.ranking());
    log::debug!(
        "Search '{}' matched {} job(s) within {} km",
        filter,
        slots.len(),
        params.radius_km()
    );

    pad_to(&mut slots, SEARCH_DISPLAY_SIZE);
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, Ranking};
    use crate::utils::geo::distance_km;

    fn center(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    fn params(max_results: usize, radius_km: f64, ranking: Ranking) -> SearchParams {
        SearchParams::new(max_results, radius_km, ranking).unwrap()
    }

    fn sample_store() -> JobStore {
        JobStore::from_jobs(vec![
            Job::new("1", "Senior Baker", 10.0, 10.0),
            Job::new("2", "Baker", 10.01, 10.0),
            Job::new("3", "Pastry Baker", 10.02, 10.0),
            Job::new("4", "Baker", 12.0, 12.0),
            Job::new("5", "Line Cook", 10.0, 10.0),
            Job::new("6", "Baker Assistant", 10.03, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_single_baker_padded_to_five() {
        let store = JobStore::from_jobs(vec![Job::new("b", "Baker", 10.0, 10.0)]).unwrap();

        for ranking in [Ranking::Nearest, Ranking::FirstFound] {
            let result = search(&store, "Baker", center(10.0, 10.0), &params(5, 5.0, ranking));

            assert_eq!(result.len(), 5);
            assert_eq!(result[0].job().map(|j| j.id.as_str()), Some("b"));
            assert!(result[1..].iter().all(JobSlot::is_placeholder));
        }
    }

    #[test]
    fn test_results_satisfy_title_and_radius() {
        let store = sample_store();
        let here = center(10.0, 10.0);

        for ranking in [Ranking::Nearest, Ranking::FirstFound] {
            let result = search(&store, "baker", here, &params(5, 5.0, ranking));

            assert_eq!(result.len(), SEARCH_DISPLAY_SIZE);
            let found: Vec<_> = result.iter().filter_map(JobSlot::job).collect();
            assert_eq!(found.len(), 4);
            for job in found {
                assert!(job.title.contains("Baker"));
                assert!(distance_km(10.0, 10.0, job.latitude, job.longitude) <= 5.0);
            }
        }
    }

    #[test]
    fn test_nearest_ranking_orders_by_distance() {
        let store = sample_store();
        let result = search(
            &store,
            "Baker",
            center(10.0, 10.0),
            &params(2, 5.0, Ranking::Nearest),
        );

        let ids: Vec<_> = result
            .iter()
            .filter_map(|s| s.job().map(|j| j.id.as_str()))
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(result.len(), SEARCH_DISPLAY_SIZE);
    }

    #[test]
    fn test_max_results_caps_genuine_matches() {
        let store = sample_store();
        let result = search(
            &store,
            "Baker",
            center(10.0, 10.0),
            &params(1, 5.0, Ranking::FirstFound),
        );

        assert_eq!(result.iter().filter(|s| !s.is_placeholder()).count(), 1);
        assert_eq!(result.len(), SEARCH_DISPLAY_SIZE);
    }

    #[test]
    fn test_many_matches_never_exceed_display_size() {
        let jobs =
            (0..8).map(|i| Job::new(format!("b{i}"), "Baker", 10.0 + 0.001 * i as f64, 10.0));
        let store = JobStore::from_jobs(jobs).unwrap();

        assert!(SearchParams::new(8, 5.0, Ranking::Nearest).is_err());

        for ranking in [Ranking::Nearest, Ranking::FirstFound] {
            let result = search(
                &store,
                "Baker",
                center(10.0, 10.0),
                &params(SearchParams::MAX_RESULTS, 5.0, ranking),
            );
            assert_eq!(result.len(), SEARCH_DISPLAY_SIZE);
            assert!(result.iter().all(|s| !s.is_placeholder()));
        }
    }

    #[test]
    fn test_no_match_is_all_placeholders() {
        let store = sample_store();
        let result = search(&store, "Welder", center(10.0, 10.0), &SearchParams::default());

        assert_eq!(result.len(), SEARCH_DISPLAY_SIZE);
        assert!(result.iter().all(JobSlot::is_placeholder));
    }

    #[test]
    fn test_blank_filter_is_all_placeholders() {
        let store = sample_store();
        let result = search(&store, "   ", center(10.0, 10.0), &SearchParams::default());

        assert_eq!(result.len(), SEARCH_DISPLAY_SIZE);
        assert!(result.iter().all(JobSlot::is_placeholder));
    }

    #[test]
    fn test_out_of_radius_excluded() {
        let store = sample_store();
        let result = search(&store, "Baker", center(12.0, 12.0), &SearchParams::default());

        let found: Vec<_> = result.iter().filter_map(JobSlot::job).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "4");
    }

    #[test]
    fn test_filter_is_title_cased_not_case_insensitive() {
        let store = JobStore::from_jobs(vec![Job::new("x", "Senior BAKER", 10.0, 10.0)]).unwrap();
        let result = search(&store, "baker", center(10.0, 10.0), &SearchParams::default());

        assert!(result.iter().all(JobSlot::is_placeholder));
    }

    #[test]
    fn test_empty_store() {
        let result = search(
            &JobStore::default(),
            "Baker",
            center(0.0, 0.0),
            &SearchParams::default(),
        );
        assert_eq!(result.len(), SEARCH_DISPLAY_SIZE);
        assert!(result.iter().all(JobSlot::is_placeholder));
    }
}
