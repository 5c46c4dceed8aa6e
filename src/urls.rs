use url::Url;

use uuid::Uuid;

/// Builds the public links handed out in redirects and emails
#[derive(Debug, Clone)]
pub struct PublicUrls {
    base: String,
}

impl PublicUrls {
    pub fn new(base_url: &Url) -> Self {
        let base = base_url.as_str().trim_end_matches('/').to_string();
        Self { base }
    }

    /// Canonical page of a trip
    pub fn trip(&self, trip_id: Uuid) -> String {
        format!("{}/trips/{}", self.base, trip_id)
    }

    /// Link the owner follows to confirm a trip
    pub fn trip_confirmation(&self, trip_id: Uuid) -> String {
        format!("{}/trips/{}/confirm", self.base, trip_id)
    }

    /// Link an invited participant follows to confirm their attendance
    pub fn participant_confirmation(&self, participant_id: Uuid) -> String {
        format!("{}/participants/{}/confirm", self.base, participant_id)
    }
}
