//! Diesel row models for project persistence.

use super::schema::projects;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Project name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Light palette colour.
    pub color: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for project records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Project name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Light palette colour.
    pub color: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Update model for project records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = projects)]
pub struct ProjectChangeset {
    /// Project name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Light palette colour.
    pub color: String,
}
