//! Simulated network latency for the local-only form submissions.
//!
//! In the browser this is a real timer. Everywhere else it resolves
//! immediately, which lets tests await a whole submission deterministically.

#[cfg(test)]
#[path = "latency_test.rs"]
mod latency_test;

use std::time::Duration;

/// Wait for `duration` (browser) or not at all (SSR and native tests).
pub async fn simulate(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
