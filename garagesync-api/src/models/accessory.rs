use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{DoorState, Origin};

/// Protocol status reported when the remote door controller cannot be reached.
pub const STATUS_COMMUNICATION_FAILURE: i32 = -70402;
/// Protocol status reported for writes to a read-only characteristic.
pub const STATUS_READ_ONLY_CHARACTERISTIC: i32 = -70404;
/// Protocol status reported for unknown accessories.
pub const STATUS_RESOURCE_DOES_NOT_EXIST: i32 = -70409;
/// Protocol status reported for values a characteristic does not accept.
pub const STATUS_INVALID_VALUE: i32 = -70410;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharacteristicKind {
    /// What the door is doing now, read-only to the host
    CurrentDoorState,
    /// What the user or the bridge wants the door to be
    TargetDoorState,
}

impl CharacteristicKind {
    pub fn is_writable(&self) -> bool {
        matches!(self, CharacteristicKind::TargetDoorState)
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacteristicEvent {
    /// Accessory identifier
    pub accessory: String,
    /// Characteristic that was written
    pub characteristic: CharacteristicKind,
    /// Newly written value
    pub value: DoorState,
    /// Provenance of a target write, absent for current state writes
    pub origin: Option<Origin>,
    /// Write time
    pub time: OffsetDateTime,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacteristicResponse {
    /// Characteristic that was read
    pub characteristic: CharacteristicKind,
    /// Door state
    pub value: DoorState,
    /// Protocol numeric code of the door state
    pub code: u8,
}

impl CharacteristicResponse {
    pub fn new(characteristic: CharacteristicKind, value: DoorState) -> Self {
        Self {
            characteristic,
            value,
            code: value.code(),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTargetStateRequest {
    /// Requested door state, open or closed
    pub value: DoorState,
    /// Provenance of the write, defaults to a user command
    #[serde(default)]
    pub origin: Origin,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryInformation {
    /// Display name
    pub name: String,
    /// Manufacturer label
    pub manufacturer: String,
    /// Model label
    pub model: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageDoorResponse {
    /// Cached current door state
    pub current_door_state: DoorState,
    /// Cached target door state
    pub target_door_state: DoorState,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryResponse {
    /// Accessory identifier
    pub id: String,
    /// Accessory information service
    pub information: AccessoryInformation,
    /// Garage door opener service
    pub garage_door: GarageDoorResponse,
}
