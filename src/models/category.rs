// src/models/category.rs

use std::collections::BTreeMap;

use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,

    /// Display label, e.g. "Science".
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// The `{id: type}` mapping returned by the category and question listings.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
