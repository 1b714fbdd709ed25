//! Cancellable expiry timers.
//!
//! Every visible notification owns one [`ExpiryTimer`]. The timer is a
//! tokio task sleeping until the notification's deadline; dropping the
//! timer aborts the task. The ticket ties the timer to exactly the entry
//! that scheduled it, so a late wake-up can never remove anything else.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Stand-in deadline for lifetimes too long to represent, about 30 years out.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

pub(crate) struct ExpiryTimer {
    ticket: u64,
    deadline: Instant,
    abort: AbortHandle,
}

impl ExpiryTimer {
    /// Spawn a task on `runtime` that runs `on_expire` once `delay` has
    /// elapsed, measured from `start`.
    pub(crate) fn schedule<F>(
        runtime: &Handle,
        ticket: u64,
        start: Instant,
        delay: Duration,
        on_expire: F,
    ) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let deadline = deadline_after(start, delay);
        let task = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_expire();
        });

        Self {
            ticket,
            deadline,
            abort: task.abort_handle(),
        }
    }

    pub(crate) fn ticket(&self) -> u64 {
        self.ticket
    }

    pub(crate) fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// `start + delay`, clamped to [`FAR_FUTURE`] when the sum overflows.
pub(crate) fn deadline_after(start: Instant, delay: Duration) -> Instant {
    start
        .checked_add(delay)
        .unwrap_or_else(|| start + FAR_FUTURE)
}

impl Drop for ExpiryTimer {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

impl std::fmt::Debug for ExpiryTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiryTimer")
            .field("ticket", &self.ticket)
            .field("deadline", &self.deadline)
            .finish()
    }
}
