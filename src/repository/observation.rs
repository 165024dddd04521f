use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::domain::types::{CategoryName, DomainName};
use crate::repository::{DieselRepository, ObservationReader, RepositoryResult};

impl ObservationReader for DieselRepository {
    fn count_observations_by_category(
        &self,
        domain: &DomainName,
    ) -> RepositoryResult<Vec<(CategoryName, i64)>> {
        use crate::schema::domain_observations;

        let mut conn = self.conn()?;

        let mut rows: Vec<(String, i64)> = domain_observations::table
            .filter(domain_observations::domain.eq(domain.as_str()))
            .group_by(domain_observations::category)
            .select((domain_observations::category, count_star()))
            .load(&mut conn)?;

        // Descending by count; equal counts order by category name ascending
        // so the ranking is deterministic.
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        rows.into_iter()
            .map(|(category, count)| Ok((CategoryName::new(category)?, count)))
            .collect()
    }
}
