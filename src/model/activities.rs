use uuid::Uuid;

use chrono::{DateTime, Utc};

use serde::Serialize;

use crate::domain::Title;

#[derive(Debug)]
pub struct NewActivity {
    pub title: Title,
    pub occurs_at: DateTime<Utc>,
}

/// Stored Activity record
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Activity {
    pub id: Uuid,
    #[serde(skip)]
    pub trip_id: Uuid,
    pub title: String,
    pub occurs_at: DateTime<Utc>,
}
