use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Item category stored on the `items` row
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetable,
    Fruit,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Vegetable => "Vegetable",
            Category::Fruit => "Fruit",
        }
    }

    /// Column value as stored remotely.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetable => "vegetable",
            Category::Fruit => "fruit",
        }
    }

    pub const ALL: [Category; 2] = [Category::Vegetable, Category::Fruit];
}

/// Row of the `items` table: a tradable commodity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert/update payload for `items`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemPayload {
    pub name: String,
    pub category: Category,
}

/// Row of the `prices` table: one (item, date, value) observation.
///
/// Multiple observations per item and date are permitted; nothing here is
/// unique besides the row id. The `items` field carries the embedded item row
/// when the query selects `items(*)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    pub id: Uuid,
    pub item_id: Uuid,
    pub price: f64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Item>,
}

/// Insert/update payload for `prices`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePayload {
    pub item_id: Uuid,
    pub price: f64,
    pub date: NaiveDate,
}

/// Projection row for `select=date, price` history queries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Vegetable).unwrap(),
            "\"vegetable\""
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"fruit\"").unwrap(),
            Category::Fruit
        );
    }

    #[test]
    fn price_row_parses_without_embed() {
        let json = r#"{
            "id": "11111111-1111-1111-1111-111111111111",
            "item_id": "22222222-2222-2222-2222-222222222222",
            "price": 152.5,
            "date": "2025-07-30",
            "created_at": "2025-07-30T08:00:00Z"
        }"#;
        let price: Price = serde_json::from_str(json).unwrap();
        assert!(price.items.is_none());
        assert_eq!(price.date, NaiveDate::from_ymd_opt(2025, 7, 30).unwrap());
    }

    #[test]
    fn price_payload_uses_plain_date() {
        let payload = PricePayload {
            item_id: Uuid::nil(),
            price: 99.0,
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"date\":\"2025-01-05\""));
    }
}
