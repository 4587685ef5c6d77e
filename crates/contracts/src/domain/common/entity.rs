/// Trait implemented by every resource the REST backend exposes.
///
/// Instance data plus the static metadata needed to build endpoint paths and
/// UI captions, so list/detail code can stay generic over the resource.
pub trait Entity {
    /// Record identifier
    fn id(&self) -> i64;

    /// Soft-delete flag (`activo` on the wire)
    fn is_activo(&self) -> bool;

    /// Short human caption for selects and confirmations
    fn caption(&self) -> String;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Path segment under `/api/` (e.g. "armazones", "tipos/lentes")
    fn collection_name() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Plural UI name
    fn list_name() -> &'static str;

    /// Name of the id field expected by the delete/restore endpoints
    fn id_field() -> &'static str {
        "id"
    }
}

/// `/api/<collection>` for an entity type
pub fn collection_path<T: Entity>() -> String {
    format!("/api/{}", T::collection_name())
}

/// Keeps only active records, preserving order
pub fn only_activos<T: Entity>(items: Vec<T>) -> Vec<T> {
    items.into_iter().filter(|item| item.is_activo()).collect()
}
