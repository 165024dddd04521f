use std::collections::HashSet;

use crate::domain::types::DomainName;
use crate::repository::{ObservationReader, PostReader};

use super::{ServiceError, ServiceResult};

/// The category universe: every distinct category across all clips, name
/// ascending. Empty catalog yields an empty list.
pub fn all_categories<R: PostReader>(repo: &R) -> ServiceResult<Vec<String>> {
    match repo.distinct_categories() {
        Ok(categories) => Ok(categories.into_iter().map(Into::into).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// The category universe, ordered by how often `domain` has historically
/// posted into each category.
///
/// Without a domain the universe is returned unranked. For a domain with
/// observations, categories sort by descending count (ties by name) and the
/// never-used categories follow, so the result always spans the whole
/// universe. For a never-seen domain an empty-string entry is prepended: the
/// client pre-fills the first entry as the default category selector, and an
/// unknown origin has no sensible default.
pub fn categories_ranked_for_origin<R>(domain: Option<&str>, repo: &R) -> ServiceResult<Vec<String>>
where
    R: PostReader + ObservationReader,
{
    let universe = all_categories(repo)?;

    let Some(domain) = domain.map(str::trim).filter(|d| !d.is_empty()) else {
        return Ok(universe);
    };
    let domain = DomainName::new(domain).map_err(|e| ServiceError::Form(e.to_string()))?;

    let counts = match repo.count_observations_by_category(&domain) {
        Ok(counts) => counts,
        Err(e) => {
            log::error!("Failed to count observations for {domain}: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if counts.is_empty() {
        let mut result = Vec::with_capacity(universe.len() + 1);
        result.push(String::new());
        result.extend(universe);
        return Ok(result);
    }

    let mut result: Vec<String> = counts
        .into_iter()
        .map(|(category, _count)| category.into())
        .collect();
    let ranked: HashSet<String> = result.iter().cloned().collect();
    result.extend(universe.into_iter().filter(|c| !ranked.contains(c)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::observation::DomainObservation;
    use crate::domain::post::Post;
    use crate::domain::types::{CategoryName, PostId, PostTitle, PostUrl};
    use crate::repository::test::TestRepository;
    use chrono::Utc;

    fn sample_post(id: i32, category: &str) -> Post {
        Post {
            id: PostId::new(id).unwrap(),
            title: PostTitle::new(format!("post {id}")).unwrap(),
            url: PostUrl::new(format!("https://example.com/{id}")).unwrap(),
            category: CategoryName::new(category).unwrap(),
            description: None,
            comment: None,
            image: None,
            tags: vec![],
            added_at: Utc::now().naive_utc(),
        }
    }

    fn observation(domain: &str, category: &str) -> DomainObservation {
        DomainObservation {
            domain: DomainName::new(domain).unwrap(),
            category: CategoryName::new(category).unwrap(),
            added_at: Utc::now().naive_utc(),
        }
    }

    fn observations(domain: &str, counts: &[(&str, usize)]) -> Vec<DomainObservation> {
        counts
            .iter()
            .flat_map(|(category, count)| {
                (0..*count).map(|_| observation(domain, category)).collect::<Vec<_>>()
            })
            .collect()
    }

    #[test]
    fn empty_catalog_yields_empty_universe() {
        let repo = TestRepository::default();
        assert_eq!(all_categories(&repo).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn universe_is_distinct() {
        let repo = TestRepository::new(
            vec![
                sample_post(1, "tech"),
                sample_post(2, "tech"),
                sample_post(3, "news"),
            ],
            vec![],
        );
        assert_eq!(all_categories(&repo).unwrap(), vec!["news", "tech"]);
    }

    #[test]
    fn no_domain_returns_unranked_universe() {
        let repo = TestRepository::new(
            vec![sample_post(1, "tech"), sample_post(2, "news")],
            observations("ignored.example", &[("tech", 5)]),
        );
        assert_eq!(
            categories_ranked_for_origin(None, &repo).unwrap(),
            vec!["news", "tech"]
        );
    }

    #[test]
    fn empty_domain_returns_unranked_universe() {
        let repo = TestRepository::new(
            vec![sample_post(1, "tech"), sample_post(2, "news")],
            vec![],
        );
        assert_eq!(
            categories_ranked_for_origin(Some(""), &repo).unwrap(),
            vec!["news", "tech"]
        );
    }

    #[test]
    fn unseen_domain_gets_empty_sentinel_first() {
        let repo = TestRepository::new(
            vec![
                sample_post(1, "tech"),
                sample_post(2, "news"),
                sample_post(3, "sports"),
            ],
            vec![],
        );

        let result = categories_ranked_for_origin(Some("newdomain.com"), &repo).unwrap();
        assert_eq!(result[0], "");
        assert_eq!(result.len(), 1 + 3);
    }

    #[test]
    fn known_domain_ranks_by_descending_frequency() {
        let repo = TestRepository::new(
            vec![
                sample_post(1, "tech"),
                sample_post(2, "tech"),
                sample_post(3, "news"),
                sample_post(4, "sports"),
            ],
            observations("d.example", &[("tech", 2), ("news", 1)]),
        );

        assert_eq!(
            categories_ranked_for_origin(Some("d.example"), &repo).unwrap(),
            vec!["tech", "news", "sports"]
        );
    }

    #[test]
    fn unranked_categories_append_after_ranked_ones() {
        let repo = TestRepository::new(
            vec![
                sample_post(1, "alpha"),
                sample_post(2, "beta"),
                sample_post(3, "gamma"),
                sample_post(4, "delta"),
            ],
            observations("d.example", &[("alpha", 3), ("beta", 2), ("gamma", 1)]),
        );

        let result = categories_ranked_for_origin(Some("d.example"), &repo).unwrap();
        assert_eq!(result, vec!["alpha", "beta", "gamma", "delta"]);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn equal_counts_tie_break_by_name() {
        let repo = TestRepository::new(
            vec![sample_post(1, "zeta"), sample_post(2, "alpha")],
            observations("d.example", &[("zeta", 1), ("alpha", 1)]),
        );

        assert_eq!(
            categories_ranked_for_origin(Some("d.example"), &repo).unwrap(),
            vec!["alpha", "zeta"]
        );
    }

    #[test]
    fn ranking_is_idempotent() {
        let repo = TestRepository::new(
            vec![sample_post(1, "tech"), sample_post(2, "news")],
            observations("d.example", &[("tech", 2)]),
        );

        let first = categories_ranked_for_origin(Some("d.example"), &repo).unwrap();
        let second = categories_ranked_for_origin(Some("d.example"), &repo).unwrap();
        assert_eq!(first, second);
    }
}
