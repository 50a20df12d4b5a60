use contracts::domain::a001_campaign::Campaign;
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::shared::data::store::MemoryStore;

static STORE: Lazy<MemoryStore<Campaign>> = Lazy::new(MemoryStore::new);

pub async fn list_all() -> anyhow::Result<Vec<Campaign>> {
    Ok(STORE.list().await)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Campaign>> {
    Ok(STORE.get(id).await)
}

pub async fn insert(aggregate: &Campaign) -> anyhow::Result<Uuid> {
    if STORE.get(aggregate.base.id.0).await.is_some() {
        anyhow::bail!("Campaign {} already exists", aggregate.base.id.0);
    }
    Ok(STORE.insert(aggregate.clone()).await)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    Ok(STORE.remove(id).await)
}

pub async fn count() -> usize {
    STORE.len().await
}
