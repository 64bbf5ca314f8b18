/// Трейт для корня агрегата
///
/// Static metadata shared by every entity the admin panel manages, plus
/// access to the backend identifier of a concrete record.
pub trait AggregateRoot {
    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Backend identifier (`_id`), absent on records that were never saved
    fn id(&self) -> Option<&str>;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Short entity key used in tab keys and DOM ids (e.g. "employee")
    fn entity_key() -> &'static str;

    /// REST collection path segment (e.g. "employees")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Employee")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Employees")
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата для системы (например, "a001_employee")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::entity_key())
    }

    /// Collection endpoint relative to the API base (e.g. "/employees")
    fn collection_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Single record endpoint relative to the API base (e.g. "/employees/42")
    fn record_path(id: &str) -> String {
        format!("/{}/{}", Self::collection_name(), id)
    }
}
