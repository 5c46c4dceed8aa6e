use uuid::Uuid;

use chrono::{DateTime, Utc};

use serde::Serialize;

use crate::domain::{Destination, EmailAddress, PersonName, TripDates};
use crate::error::Result;

/// New Trip request, already validated
#[derive(Debug)]
pub struct NewTrip {
    pub destination: Destination,
    pub dates: TripDates,
    pub owner_name: PersonName,
    pub owner_email: EmailAddress,
    pub emails_to_invite: Vec<EmailAddress>,
}

/// Stored Trip record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_confirmed: bool,
    /// NOTE: Auto-set by the database
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

impl Trip {
    pub fn dates(&self) -> Result<TripDates> {
        TripDates::stored(self.starts_at, self.ends_at)
    }
}
