use std::time::Duration;

use super::config;

/// Имитация сетевой задержки перед ответом со списком.
/// Одна пауза без отмены; 0 отключает задержку.
pub async fn simulate_latency() {
    let latency_ms = config::get().mock.latency_ms;
    if latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(latency_ms)).await;
    }
}
