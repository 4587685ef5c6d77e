//! Small admin-managed catalogs (tipos de lente, laboratorios, estados).
//! All three share the `{ id, nombre, activo }` shape and the same screen.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::shared::suggestions::missing_suggestions;

/// Where the "add" dropdown of a catalog gets its candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    /// Path under the backup origin, e.g. `/back/tipos/lentes`
    Backup(&'static str),
    Fixed(&'static [&'static str]),
}

pub trait CatalogEntry: Entity + Clone + PartialEq + 'static {
    fn nombre(&self) -> &str;

    fn suggestion_source() -> SuggestionSource;
}

/// Body of `POST /api/<catalog>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDto {
    pub nombre: String,
}

/// Catalog screens list entries by ascending id
pub fn sorted_by_id<T: Entity>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by_key(|item| item.id());
    items
}

/// Candidates not yet present in the catalog
pub fn pending_suggestions<T: CatalogEntry>(candidates: &[String], entries: &[T]) -> Vec<String> {
    missing_suggestions(candidates, entries.iter().map(|e| e.nombre()))
}

/// New catalog name: more than two non-space characters and not already
/// present. Returns the trimmed name.
pub fn validate_catalog_nombre<T: CatalogEntry>(nombre: &str, entries: &[T]) -> Result<String, String> {
    let trimmed = nombre.trim();
    if trimmed.chars().filter(|c| !c.is_whitespace()).count() <= 2 {
        return Err("Minimo 3 caracteres".to_string());
    }
    if entries.iter().any(|e| e.nombre() == trimmed) {
        return Err("No se permiten nombres repetidos".to_string());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        nombre: String,
    }

    impl Entity for Item {
        fn id(&self) -> i64 {
            self.id
        }
        fn is_activo(&self) -> bool {
            true
        }
        fn caption(&self) -> String {
            self.nombre.clone()
        }
        fn aggregate_index() -> &'static str {
            "t000"
        }
        fn collection_name() -> &'static str {
            "items"
        }
        fn element_name() -> &'static str {
            "Item"
        }
        fn list_name() -> &'static str {
            "Items"
        }
    }

    impl CatalogEntry for Item {
        fn nombre(&self) -> &str {
            &self.nombre
        }
        fn suggestion_source() -> SuggestionSource {
            SuggestionSource::Fixed(&["A"])
        }
    }

    fn item(id: i64, nombre: &str) -> Item {
        Item {
            id,
            nombre: nombre.into(),
        }
    }

    #[test]
    fn test_sorted_by_id() {
        let ids: Vec<i64> = sorted_by_id(vec![item(3, "c"), item(1, "a"), item(2, "b")])
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_validate_catalog_nombre() {
        let entries = vec![item(1, "Monofocal")];
        assert_eq!(validate_catalog_nombre("  Bifocal ", &entries), Ok("Bifocal".to_string()));
        assert_eq!(validate_catalog_nombre("a b", &entries), Err("Minimo 3 caracteres".to_string()));
        assert_eq!(
            validate_catalog_nombre("Monofocal", &entries),
            Err("No se permiten nombres repetidos".to_string())
        );
    }
}
