//! Raw row shape returned by the records service.

use common::destination::Destination;
use serde::{Deserialize, Serialize};


/// The hosted table allows NULL in most columns, so everything optional is
/// normalized here before the record crosses into the shared model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationRow {
    pub id: String,
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub duration: Option<u32>,
    pub min_people: Option<u32>,
    pub max_people: Option<u32>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub highlights: Option<Vec<String>>,
    pub included_items: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<DestinationRow> for Destination {
    fn from(row: DestinationRow) -> Self {
        Destination {
            id: row.id,
            name: row.name.unwrap_or_default(),
            location: row.location.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            price: row.price.unwrap_or(0.0),
            original_price: row.original_price,
            duration: row.duration.unwrap_or(0),
            min_people: row.min_people.unwrap_or(0),
            max_people: row.max_people.unwrap_or(0),
            rating: row.rating.unwrap_or(0.0),
            review_count: row.review_count.unwrap_or(0),
            highlights: row.highlights.unwrap_or_default(),
            included_items: row.included_items.unwrap_or_default(),
            image_url: row.image_url,
            created_at: row.created_at.unwrap_or_default(),
            updated_at: row.updated_at.unwrap_or_default(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_service_row() {
        let row: DestinationRow = serde_json::from_str(
            r#"{
                "id": "d1",
                "name": "Porto de Galinhas",
                "location": "Porto de Galinhas - PE",
                "description": "Natural pools",
                "price": 1890.5,
                "original_price": 2290.0,
                "duration": 5,
                "min_people": 2,
                "max_people": 8,
                "rating": 4.9,
                "review_count": 214,
                "highlights": ["Natural pools"],
                "included_items": ["Breakfast", "Transfer"],
                "image_url": null,
                "created_at": "2024-05-01T10:00:00Z",
                "updated_at": "2024-05-02T10:00:00Z"
            }"#,
        )
        .unwrap();

        let dest = Destination::from(row);
        assert_eq!(dest.id, "d1");
        assert_eq!(dest.original_price, Some(2290.0));
        assert_eq!(dest.included_items.len(), 2);
        assert_eq!(dest.image_url, None);
        assert!(dest.has_display_fields());
    }

    #[test]
    fn null_columns_normalize_to_defaults() {
        let row: DestinationRow = serde_json::from_str(
            r#"{
                "id": "d2",
                "name": null,
                "location": null,
                "description": null,
                "price": null,
                "original_price": null,
                "duration": null,
                "min_people": null,
                "max_people": null,
                "rating": null,
                "review_count": null,
                "highlights": null,
                "included_items": null,
                "image_url": null,
                "created_at": null,
                "updated_at": null
            }"#,
        )
        .unwrap();

        let dest = Destination::from(row);
        assert_eq!(dest.name, "");
        assert_eq!(dest.price, 0.0);
        assert!(dest.included_items.is_empty());
        // the empty name fails the display gate, so this row never renders
        assert!(!dest.has_display_fields());
    }
}
