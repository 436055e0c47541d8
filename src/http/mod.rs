//! REST API over the project and task stores.
//!
//! Handlers translate JSON bodies into drafts and patches, call the
//! services held in [`AppState`], and map failures through [`ApiError`].

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::configure;
pub use state::AppState;
