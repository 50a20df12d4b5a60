//! Общие типы консоли MSCP: агрегаты, движок мастеров, правила полей.
//! Используется и бэкендом (axum), и фронтендом (Leptos CSR).

pub mod domain;
pub mod shared;
