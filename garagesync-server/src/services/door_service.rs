use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use garagesync_api::models::{
    AccessoryInformation, AccessoryResponse, CharacteristicEvent, DoorState, GarageDoorResponse,
    Origin,
};
use tokio::sync::broadcast;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::configs::Timing;
use crate::errors::DoorError;

use super::characteristic::GarageDoorService;
use super::controller_service::DoorController;
use super::poll_timer::PollTimer;

const MANUFACTURER: &str = "Custom";
const MODEL: &str = "Custom";

/// Reconciles a binary remote door with the host's current/target door state.
///
/// Reads go to the remote status source and re-arm a debounced poll. Target
/// writes carrying [`Origin::UserCommand`] toggle the remote door and drive the
/// current state through the transitional value to the terminal one after the
/// settle delay. Nothing confirms the door actually moved.
pub struct DoorAccessory {
    id: String,
    information: AccessoryInformation,
    service: GarageDoorService,
    controller: Arc<dyn DoorController>,
    timing: Timing,
    poll_timer: Mutex<PollTimer>,
    /// Held for the whole of a poll cycle.
    poll_cycle: tokio::sync::Mutex<()>,
    this: Weak<DoorAccessory>,
}

impl DoorAccessory {
    pub fn new(id: &str, name: &str, controller: Arc<dyn DoorController>, timing: Timing) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            id: id.to_string(),
            information: AccessoryInformation {
                name: name.to_string(),
                manufacturer: MANUFACTURER.to_string(),
                model: MODEL.to_string(),
            },
            service: GarageDoorService::new(id),
            controller,
            timing,
            poll_timer: Mutex::new(PollTimer::new()),
            poll_cycle: tokio::sync::Mutex::new(()),
            this: this.clone(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn information(&self) -> &AccessoryInformation {
        &self.information
    }

    pub fn current_state(&self) -> DoorState {
        self.service.current.value()
    }

    pub fn target_state(&self) -> DoorState {
        self.service.target.value()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CharacteristicEvent> {
        self.service.subscribe()
    }

    pub fn is_poll_armed(&self) -> bool {
        self.poll_timer().is_armed()
    }

    pub fn to_response(&self) -> AccessoryResponse {
        AccessoryResponse {
            id: self.id.clone(),
            information: self.information.clone(),
            garage_door: GarageDoorResponse {
                current_door_state: self.current_state(),
                target_door_state: self.target_state(),
            },
        }
    }

    /// Queries the remote door and maps its position.
    ///
    /// Re-arms the poll whether or not the query succeeds. Cell values are left
    /// alone; the caller decides what to do with the result.
    pub async fn read_current_state(&self) -> Result<DoorState, DoorError> {
        debug!(accessory = %self.id, "reading door state");

        self.schedule_poll();

        let position = self.controller.status().await?;

        Ok(position.into())
    }

    /// Records a target write and, for user commands, toggles the remote door.
    ///
    /// Returns as soon as the write is recorded; the command runs in the
    /// background.
    pub fn set_target_state(&self, value: DoorState, origin: Origin) -> Result<(), DoorError> {
        if !value.is_terminal() {
            return Err(DoorError::InvalidTarget(value));
        }

        self.service.target.write(value, Some(origin));

        if !origin.triggers_command() {
            debug!(accessory = %self.id, ?value, "target synced from poll");
            return Ok(());
        }

        info!(accessory = %self.id, ?value, "target set by user, toggling door");

        if let Some(accessory) = self.this.upgrade() {
            tokio::spawn(async move { accessory.run_command(value).await });
        }

        Ok(())
    }

    fn schedule_poll(&self) {
        let this = self.this.clone();
        let delay = self.timing.poll_interval();

        self.poll_timer().rearm(delay, move |generation| async move {
            let Some(accessory) = this.upgrade() else {
                return;
            };

            let released = accessory.poll_timer().release(generation);
            if !released {
                return;
            }

            // A slow status call can outlive the interval; wait for the next one
            let Ok(_cycle) = accessory.poll_cycle.try_lock() else {
                debug!(accessory = %accessory.id, "previous poll still running, skipping");
                accessory.schedule_poll();
                return;
            };

            accessory.poll().await;
        });
    }

    async fn poll(&self) {
        match self.read_current_state().await {
            Ok(state) => {
                debug!(accessory = %self.id, ?state, "poll observed door state");

                if let Err(e) = self.set_target_state(state, Origin::PollSync) {
                    warn!(accessory = %self.id, "Failed to sync target state: {}", e);
                }
                self.service.current.write(state, None);
            }
            Err(e) => {
                warn!(accessory = %self.id, "Poll failed, retrying after next interval: {}", e);
            }
        }
    }

    async fn run_command(&self, value: DoorState) {
        if let Err(e) = self.controller.toggle().await {
            error!(accessory = %self.id, ?value, "Toggle command failed: {}", e);

            if let Some(known) = self.current_state().destination() {
                let _ = self.set_target_state(known, Origin::PollSync);
            }

            return;
        }

        if let Some(transitional) = value.transitional() {
            self.service.current.write(transitional, None);
        }

        // Settle timers are not tracked and may overlap with later commands or polls
        time::sleep(self.timing.settle_delay()).await;

        debug!(accessory = %self.id, ?value, "door assumed settled");
        self.service.current.write(value, None);
    }

    fn poll_timer(&self) -> MutexGuard<'_, PollTimer> {
        self.poll_timer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
