use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::observation::{
    DomainObservation as DomainObservationEntity, NewDomainObservation as NewDomainObservationEntity,
};
use crate::domain::types::{CategoryName, DomainName, TypeConstraintError};

/// Diesel model representing the `domain_observations` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::domain_observations)]
pub struct DomainObservation {
    pub id: i32,
    pub domain: String,
    pub category: String,
    pub added_at: NaiveDateTime,
}

/// Insertable form of [`DomainObservation`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::domain_observations)]
pub struct NewDomainObservation {
    pub domain: String,
    pub category: String,
    pub added_at: NaiveDateTime,
}

impl TryFrom<DomainObservation> for DomainObservationEntity {
    type Error = TypeConstraintError;

    fn try_from(observation: DomainObservation) -> Result<Self, Self::Error> {
        Ok(Self {
            domain: DomainName::new(observation.domain)?,
            category: CategoryName::new(observation.category)?,
            added_at: observation.added_at,
        })
    }
}

impl From<NewDomainObservationEntity> for NewDomainObservation {
    fn from(observation: NewDomainObservationEntity) -> Self {
        Self {
            domain: observation.domain.into_inner(),
            category: observation.category.into_inner(),
            added_at: observation.added_at,
        }
    }
}
