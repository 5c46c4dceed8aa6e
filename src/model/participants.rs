use uuid::Uuid;

use serde::Serialize;

use crate::domain::{EmailAddress, PersonName};

/// New Participant of a trip
#[derive(Debug)]
pub struct NewParticipant {
    pub name: Option<PersonName>,
    pub email: EmailAddress,
    pub is_owner: bool,
    pub is_confirmed: bool,
}

impl NewParticipant {
    /// The owner of a trip, confirmed from the start
    pub fn owner(name: PersonName, email: EmailAddress) -> Self {
        Self {
            name: Some(name),
            email,
            is_owner: true,
            is_confirmed: true,
        }
    }

    /// An invited participant, pending confirmation
    pub fn invitee(email: EmailAddress) -> Self {
        Self {
            name: None,
            email,
            is_owner: false,
            is_confirmed: false,
        }
    }
}

/// Stored Participant record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Participant {
    pub id: Uuid,
    #[serde(skip)]
    pub trip_id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub is_owner: bool,
    pub is_confirmed: bool,
}
