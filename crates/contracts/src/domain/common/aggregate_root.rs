use super::EntityMetadata;

/// Трейт для корня агрегата
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    fn id(&self) -> Self::Id;

    /// Бизнес-код записи (например, "CMP-1A2B3C4D")
    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "campaign")
    fn collection_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Полное имя агрегата (например, "a001_campaign")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
