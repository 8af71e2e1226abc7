use crate::{Rsin, timestamp};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated client application that owns the issues it creates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicatie {
    pub id: Uuid,
    pub naam: String,
    /// RSIN of the organization the application acts for
    pub organisatie: Rsin,
    pub registratiedatum: DateTime<Utc>,
}

impl Applicatie {
    pub fn new(id: Uuid, naam: String, organisatie: Rsin) -> Self {
        Self {
            id,
            naam,
            organisatie,
            registratiedatum: timestamp::now(),
        }
    }
}
