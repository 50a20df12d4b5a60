use contracts::domain::common::{AggregateId, AggregateRoot};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Список агрегатов в памяти процесса (без персистентности)
pub struct MemoryStore<T> {
    items: RwLock<Vec<T>>,
}

impl<T: AggregateRoot + Clone> MemoryStore<T>
where
    T::Id: AggregateId,
{
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Все записи, новые сверху
    pub async fn list(&self) -> Vec<T> {
        let mut items = self.items.read().await.clone();
        items.sort_by(|a, b| b.metadata().created_at.cmp(&a.metadata().created_at));
        items
    }

    pub async fn get(&self, id: Uuid) -> Option<T> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id().value() == id)
            .cloned()
    }

    pub async fn insert(&self, item: T) -> Uuid {
        let id = item.id().value();
        self.items.write().await.push(item);
        id
    }

    /// Удалить запись; false, если её не было
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id().value() != id);
        items.len() != before
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

impl<T: AggregateRoot + Clone> Default for MemoryStore<T>
where
    T::Id: AggregateId,
{
    fn default() -> Self {
        Self::new()
    }
}
