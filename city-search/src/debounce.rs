//! Cancel-and-replace debouncing for search-as-you-type input.
//!
//! Each call to [`Debouncer::schedule`] cancels the pending timer and
//! starts a fresh one, so only the last action in a burst runs, `delay`
//! after the burst ends. Only the timer is cancellable: once it fires, the
//! action is handed to its own task and runs to completion.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delays an action until input pauses.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// The quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending action with `action`, run after the quiet period.
    ///
    /// An action whose timer already fired is not affected.
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detach so aborting this handle can't interrupt the action.
            tokio::spawn(action);
        });

        let previous = self.lock_pending().replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Cancel the pending timer, if any. A running action is left alone.
    pub fn cancel(&self) {
        if let Some(handle) = self.lock_pending().take() {
            handle.abort();
        }
    }

    /// Whether a timer is scheduled and hasn't fired yet.
    pub fn is_pending(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        // A panic while holding this lock can't leave the Option torn.
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::Mutex as StdMutex;

    const DELAY: Duration = Duration::from_millis(300);

    fn recorder() -> (Arc<StdMutex<Vec<&'static str>>>, impl Fn(&'static str) -> BoxedAction) {
        let log = Arc::new(StdMutex::new(Vec::new()));
        let log2 = log.clone();
        let make = move |label: &'static str| -> BoxedAction {
            let log = log2.clone();
            Box::pin(async move {
                log.lock().unwrap().push(label);
            })
        };
        (log, make)
    }

    type BoxedAction = std::pin::Pin<Box<dyn Future<Output = ()> + Send>>;

    #[tokio::test(start_paused = true)]
    async fn runs_after_delay() {
        let (log, action) = recorder();
        let debouncer = Debouncer::new(DELAY);

        debouncer.schedule(action("a"));
        assert!(debouncer.is_pending());

        tokio::time::sleep(DELAY / 2).await;
        assert!(log.lock().unwrap().is_empty());

        tokio::time::sleep(DELAY).await;
        assert_eq!(*log.lock().unwrap(), vec!["a"]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn only_last_in_burst_runs() {
        let (log, action) = recorder();
        let debouncer = Debouncer::new(DELAY);

        debouncer.schedule(action("p"));
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule(action("pa"));
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule(action("par"));

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(*log.lock().unwrap(), vec!["par"]);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_each_run() {
        let (log, action) = recorder();
        let debouncer = Debouncer::new(DELAY);

        debouncer.schedule(action("first"));
        tokio::time::sleep(DELAY * 2).await;
        debouncer.schedule(action("second"));
        tokio::time::sleep(DELAY * 2).await;

        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_action() {
        let (log, action) = recorder();
        let debouncer = Debouncer::new(DELAY);

        debouncer.schedule(action("x"));
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::sleep(DELAY * 2).await;
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn reschedule_does_not_interrupt_running_action() {
        let done = Arc::new(StdMutex::new(false));
        let debouncer = Debouncer::new(DELAY);

        let flag = done.clone();
        debouncer.schedule(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            *flag.lock().unwrap() = true;
        });

        // Timer fired at 300ms; the action is mid-sleep.
        tokio::time::sleep(Duration::from_millis(350)).await;
        assert!(!debouncer.is_pending());
        debouncer.schedule(async {});

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(*done.lock().unwrap(), "running action was interrupted");
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_does_not_interrupt_running_action() {
        let done = Arc::new(StdMutex::new(false));
        let debouncer = Debouncer::new(DELAY);

        let flag = done.clone();
        debouncer.schedule(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            *flag.lock().unwrap() = true;
        });

        tokio::time::sleep(Duration::from_millis(350)).await;
        debouncer.cancel();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(*done.lock().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels() {
        let (log, action) = recorder();
        {
            let debouncer = Debouncer::new(DELAY);
            debouncer.schedule(action("x"));
        }

        tokio::time::sleep(DELAY * 2).await;
        assert!(log.lock().unwrap().is_empty());
    }
}
