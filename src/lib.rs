//! Article domain core: the `Article` entity, its lifecycle states, and the
//! application services that create, edit, transition and query articles.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
