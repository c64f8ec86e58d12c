//! Simulated network latency

use rand::Rng;
use std::time::Duration;

/// Artificial delay awaited at the top of every service operation.
///
/// Suspends the calling task without blocking others; pending operations
/// interleave cooperatively on the runtime.
#[derive(Debug, Clone)]
pub struct Latency {
    min: Duration,
    max: Duration,
}

impl Latency {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min: Duration::from_millis(min_ms.min(max_ms)),
            max: Duration::from_millis(min_ms.max(max_ms)),
        }
    }

    pub fn none() -> Self {
        Self::new(0, 0)
    }

    pub async fn simulate(&self) {
        if self.max.is_zero() {
            return;
        }
        let delay = if self.min == self.max {
            self.min
        } else {
            let ms = rand::thread_rng()
                .gen_range(self.min.as_millis() as u64..=self.max.as_millis() as u64);
            Duration::from_millis(ms)
        };
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_latency_returns_immediately() {
        let start = std::time::Instant::now();
        Latency::none().simulate().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_bounded_delay() {
        let start = std::time::Instant::now();
        Latency::new(5, 10).simulate().await;
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
