//! Common types and traits for all aggregates

pub mod activo;
pub mod catalog;
pub mod entity;
pub mod lenient;

// Re-exports
pub use activo::ActivoChange;
pub use catalog::{pending_suggestions, sorted_by_id, validate_catalog_nombre, CatalogDto, CatalogEntry, SuggestionSource};
pub use entity::{collection_path, only_activos, Entity};
