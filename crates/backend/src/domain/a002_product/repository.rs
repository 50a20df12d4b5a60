use contracts::domain::a002_product::Product;
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::shared::data::store::MemoryStore;

static STORE: Lazy<MemoryStore<Product>> = Lazy::new(MemoryStore::new);

pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    Ok(STORE.list().await)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    Ok(STORE.get(id).await)
}

pub async fn insert(aggregate: &Product) -> anyhow::Result<Uuid> {
    if STORE.get(aggregate.base.id.0).await.is_some() {
        anyhow::bail!("Product {} already exists", aggregate.base.id.0);
    }
    Ok(STORE.insert(aggregate.clone()).await)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    Ok(STORE.remove(id).await)
}

pub async fn count() -> usize {
    STORE.len().await
}
