//! Route handlers.

pub mod analysis;

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}
