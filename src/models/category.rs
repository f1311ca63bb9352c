// src/models/category.rs

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: i64,

    /// Label such as "Science" or "Art".
    /// Mapped from the column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

/// Category id -> type. Serializes as a JSON object keyed by the id.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn to_category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}

/// Response for `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_map_serializes_with_id_keys() {
        let map = to_category_map(vec![
            Category {
                id: 2,
                category_type: "Art".into(),
            },
            Category {
                id: 1,
                category_type: "Science".into(),
            },
        ]);

        assert_eq!(
            serde_json::to_value(CategoriesResponse { categories: map }).unwrap(),
            json!({"categories": {"1": "Science", "2": "Art"}})
        );
    }
}
