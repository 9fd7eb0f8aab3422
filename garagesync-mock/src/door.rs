use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use garagesync_api::models::DoorPosition;
use tokio::time;

/// A door that reports its old position until it has finished travelling.
pub struct SimulatedDoor {
    position: Mutex<DoorPosition>,
    travel: Duration,
    toggles: AtomicUsize,
}

impl SimulatedDoor {
    pub fn new(initial: DoorPosition, travel: Duration) -> Arc<Self> {
        Arc::new(Self {
            position: Mutex::new(initial),
            travel,
            toggles: AtomicUsize::new(0),
        })
    }

    pub fn position(&self) -> DoorPosition {
        *self.position.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_position(&self, position: DoorPosition) {
        *self.position.lock().unwrap_or_else(PoisonError::into_inner) = position;
    }

    pub fn toggle_count(&self) -> usize {
        self.toggles.load(Ordering::SeqCst)
    }

    pub fn toggle(self: &Arc<Self>) {
        self.toggles.fetch_add(1, Ordering::SeqCst);

        if self.travel.is_zero() {
            self.flip();
            return;
        }

        let door = self.clone();
        tokio::spawn(async move {
            time::sleep(door.travel).await;
            door.flip();
        });
    }

    fn flip(&self) {
        let mut position = self.position.lock().unwrap_or_else(PoisonError::into_inner);
        *position = position.toggled();

        tracing::info!(position = position.as_payload(), "door finished travelling");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_position_changes_after_travel() {
        let door = SimulatedDoor::new(DoorPosition::Closed, Duration::from_secs(12));

        door.toggle();
        time::sleep(Duration::from_secs(11)).await;
        assert_eq!(door.position(), DoorPosition::Closed);

        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(door.position(), DoorPosition::Open);
        assert_eq!(door.toggle_count(), 1);
    }

    #[test]
    fn test_zero_travel_flips_immediately() {
        let door = SimulatedDoor::new(DoorPosition::Open, Duration::ZERO);

        door.toggle();
        assert_eq!(door.position(), DoorPosition::Closed);
    }
}
