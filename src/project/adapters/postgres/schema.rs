//! Diesel schema for project persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Light palette colour.
        #[max_length = 7]
        color -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
