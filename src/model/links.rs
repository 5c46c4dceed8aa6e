use uuid::Uuid;

use serde::Serialize;

use crate::domain::{ResourceUrl, Title};

#[derive(Debug)]
pub struct NewLink {
    pub title: Title,
    pub url: ResourceUrl,
}

/// Stored Link record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Link {
    pub id: Uuid,
    #[serde(skip)]
    pub trip_id: Uuid,
    pub title: String,
    pub url: String,
}
