//! Cross-target timers.
//!
//! Every scripted sequence runs on a virtual timeline: the model reports its next
//! deadline and the driver sleeps until then. Only the sleep itself differs between
//! the browser and native shells.

use std::time::Duration;

/// Roughly one display frame at 60 Hz.
pub const FRAME: Duration = Duration::from_millis(16);

/// Suspends the current task for `duration`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Suspends the current task for `duration`.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

/// Sleeps until the virtual clock reaches `deadline`, then returns the new clock value.
///
/// Deadlines already in the past resolve immediately.
pub async fn sleep_until(now: Duration, deadline: Duration) -> Duration {
    if let Some(wait) = deadline.checked_sub(now).filter(|w| !w.is_zero()) {
        sleep(wait).await;
    }
    deadline.max(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_until_advances_virtual_clock() {
        let start = tokio::time::Instant::now();
        let now = sleep_until(Duration::from_millis(200), Duration::from_millis(1_500)).await;

        assert_eq!(now, Duration::from_millis(1_500));
        assert_eq!(start.elapsed(), Duration::from_millis(1_300));
    }

    #[tokio::test(start_paused = true)]
    async fn past_deadline_does_not_sleep() {
        let start = tokio::time::Instant::now();
        let now = sleep_until(Duration::from_secs(2), Duration::from_secs(1)).await;

        assert_eq!(now, Duration::from_secs(2));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
