use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;

/// A single re-armable timeout. Re-arming cancels the pending one.
///
/// Each arm gets a generation. A firing timer calls [`PollTimer::release`] with
/// its generation to detach itself, so work it starts can re-arm the timer
/// without aborting itself.
#[derive(Debug, Default)]
pub struct PollTimer {
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl PollTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rearm<F, Fut>(&mut self, delay: Duration, on_fire: F) -> u64
    where
        F: FnOnce(u64) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        self.generation += 1;
        let generation = self.generation;

        self.handle = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            on_fire(generation).await;
        }));

        generation
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Detaches a fired timer. Returns false if it was superseded.
    pub fn release(&mut self, generation: u64) -> bool {
        if self.generation != generation {
            return false;
        }

        // Dropping the handle detaches the task instead of aborting it
        self.handle.take();
        true
    }

    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
