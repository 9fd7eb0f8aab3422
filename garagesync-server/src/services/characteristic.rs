use std::sync::{PoisonError, RwLock};

use garagesync_api::models::{CharacteristicEvent, CharacteristicKind, DoorState, Origin};
use time::OffsetDateTime;
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 64;

/// A single host-facing cell. Every write is published to observers.
pub struct Characteristic {
    accessory: String,
    kind: CharacteristicKind,
    value: RwLock<DoorState>,
    events: broadcast::Sender<CharacteristicEvent>,
}

impl Characteristic {
    fn new(
        accessory: &str,
        kind: CharacteristicKind,
        initial: DoorState,
        events: broadcast::Sender<CharacteristicEvent>,
    ) -> Self {
        Self {
            accessory: accessory.to_string(),
            kind,
            value: RwLock::new(initial),
            events,
        }
    }

    pub fn value(&self) -> DoorState {
        *self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores the value and notifies observers, even when it is unchanged.
    pub fn write(&self, value: DoorState, origin: Option<Origin>) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value;

        tracing::trace!(
            accessory = %self.accessory,
            characteristic = ?self.kind,
            ?value,
            ?origin,
            "characteristic written"
        );

        // No subscribers is fine
        let _ = self.events.send(CharacteristicEvent {
            accessory: self.accessory.clone(),
            characteristic: self.kind,
            value,
            origin,
            time: OffsetDateTime::now_utc(),
        });
    }
}

/// The garage door opener service: current and target door state.
pub struct GarageDoorService {
    pub current: Characteristic,
    pub target: Characteristic,
    events: broadcast::Sender<CharacteristicEvent>,
}

impl GarageDoorService {
    pub fn new(accessory: &str) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            current: Characteristic::new(
                accessory,
                CharacteristicKind::CurrentDoorState,
                DoorState::Closed,
                events.clone(),
            ),
            target: Characteristic::new(
                accessory,
                CharacteristicKind::TargetDoorState,
                DoorState::Closed,
                events.clone(),
            ),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CharacteristicEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values_are_closed() {
        let service = GarageDoorService::new("garage");

        assert_eq!(service.current.value(), DoorState::Closed);
        assert_eq!(service.target.value(), DoorState::Closed);
    }

    #[test]
    fn test_every_write_is_published() {
        let service = GarageDoorService::new("garage");
        let mut events = service.subscribe();

        service.target.write(DoorState::Open, Some(Origin::UserCommand));
        service.current.write(DoorState::Opening, None);
        service.current.write(DoorState::Opening, None);

        let first = events.try_recv().unwrap();
        assert_eq!(first.accessory, "garage");
        assert_eq!(first.characteristic, CharacteristicKind::TargetDoorState);
        assert_eq!(first.value, DoorState::Open);
        assert_eq!(first.origin, Some(Origin::UserCommand));

        let second = events.try_recv().unwrap();
        assert_eq!(second.characteristic, CharacteristicKind::CurrentDoorState);
        assert_eq!(second.origin, None);

        assert_eq!(events.try_recv().unwrap().value, DoorState::Opening);
        assert!(events.try_recv().is_err());
        assert_eq!(service.current.value(), DoorState::Opening);
    }
}
