use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, DomainName};

/// One row of the append-only provenance log.
///
/// A record is written every time a clip is saved, keyed by the host portion
/// of the clip URL. Domains are deliberately not unique: the row count per
/// (domain, category) pair is the ranking signal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainObservation {
    pub domain: DomainName,
    pub category: CategoryName,
    pub added_at: NaiveDateTime,
}

/// Data required to append a new [`DomainObservation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDomainObservation {
    pub domain: DomainName,
    pub category: CategoryName,
    pub added_at: NaiveDateTime,
}
