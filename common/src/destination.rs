//! Shared destination record model.

use serde::{Deserialize, Serialize};


/// One travel package as stored in the remote `destinations` table.
///
/// The record is read-only on the client: every page works on an immutable
/// snapshot fetched wholesale from the records service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,

    /// Price per person. `original_price`, when present, is the reference
    /// price shown struck through next to it.
    pub price: f64,
    pub original_price: Option<f64>,

    /// Trip length in days.
    pub duration: u32,
    pub min_people: u32,
    pub max_people: u32,

    /// Average rating in [0, 5].
    pub rating: f64,
    pub review_count: u32,

    pub highlights: Vec<String>,
    pub included_items: Vec<String>,

    pub image_url: Option<String>,

    pub created_at: String,
    pub updated_at: String,
}

impl Destination {
    /// Baseline validity gate: records missing any of the three display
    /// fields are dropped from every list before user filters run.
    pub fn has_display_fields(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && !self.location.is_empty()
    }

    /// Region token: the text before " - " in the location, or the whole
    /// location when there is no separator ("Jericoacoara - CE" -> "Jericoacoara").
    pub fn region(&self) -> &str {
        self.location.split(" - ").next().unwrap_or(&self.location)
    }
}
