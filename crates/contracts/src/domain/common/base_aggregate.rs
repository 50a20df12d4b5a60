use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AggregateId, EntityMetadata};

/// Базовый агрегат с обязательными полями для всех агрегатов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Уникальный идентификатор записи
    pub id: Id,
    /// Бизнес-код записи (например, "CMP-1A2B3C4D")
    pub code: String,
    /// Наименование записи
    pub description: String,
    /// Комментарий
    pub comment: Option<String>,
    /// Метаданные жизненного цикла
    pub metadata: EntityMetadata,
}

impl<Id: AggregateId> BaseAggregate<Id> {
    /// Новый агрегат со сгенерированным ID и кодом `<prefix>-XXXXXXXX`
    pub fn generate(
        prefix: &str,
        description: String,
        comment: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let id = Id::new_v4();
        Self {
            code: id.short_code(prefix),
            id,
            description,
            comment: comment.filter(|c| !c.trim().is_empty()),
            metadata: EntityMetadata::created_at(created_at),
        }
    }
}
