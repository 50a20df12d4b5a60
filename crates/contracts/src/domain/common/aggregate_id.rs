use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;
use uuid::Uuid;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn value(&self) -> Uuid;

    fn from_uuid(value: Uuid) -> Self;

    fn new_v4() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Короткий бизнес-код: префикс + первые 8 символов UUID ("CMP-1A2B3C4D")
    fn short_code(&self, prefix: &str) -> String {
        let simple = self.value().simple().to_string().to_uppercase();
        format!("{}-{}", prefix, &simple[..8])
    }
}
