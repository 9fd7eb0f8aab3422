use serde::{Deserialize, Serialize};

/// Physical position as reported by the remote door controller.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorPosition {
    Open,
    Closed,
}

impl DoorPosition {
    pub const OPEN_PAYLOAD: &'static str = "open";
    pub const CLOSED_PAYLOAD: &'static str = "closed";

    /// Maps a raw status body to a position.
    ///
    /// Only the exact, case-sensitive literal `open` is open. Everything else,
    /// including empty or garbled bodies, reads as closed.
    pub fn from_payload(payload: &str) -> Self {
        if payload == Self::OPEN_PAYLOAD {
            DoorPosition::Open
        } else {
            DoorPosition::Closed
        }
    }

    /// Whether the payload is one of the two literals the controller is expected to send.
    pub fn is_recognized(payload: &str) -> bool {
        payload == Self::OPEN_PAYLOAD || payload == Self::CLOSED_PAYLOAD
    }

    pub fn as_payload(&self) -> &'static str {
        match self {
            DoorPosition::Open => Self::OPEN_PAYLOAD,
            DoorPosition::Closed => Self::CLOSED_PAYLOAD,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DoorPosition::Open => DoorPosition::Closed,
            DoorPosition::Closed => DoorPosition::Open,
        }
    }
}

/// Door state as modelled by the accessory protocol.
///
/// The discriminants are the protocol's numeric codes for both the current and
/// the target door state characteristic.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorState {
    Open = 0,
    Closed = 1,
    Opening = 2,
    Closing = 3,
    Stopped = 4,
}

impl DoorState {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Open and closed are the only values a target may hold.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DoorState::Open | DoorState::Closed)
    }

    /// The in-flight value shown while travelling toward this terminal state.
    pub fn transitional(&self) -> Option<Self> {
        match self {
            DoorState::Open => Some(DoorState::Opening),
            DoorState::Closed => Some(DoorState::Closing),
            _ => None,
        }
    }

    /// The terminal state this value is at or heading toward.
    pub fn destination(&self) -> Option<Self> {
        match self {
            DoorState::Open | DoorState::Opening => Some(DoorState::Open),
            DoorState::Closed | DoorState::Closing => Some(DoorState::Closed),
            DoorState::Stopped => None,
        }
    }
}

impl From<DoorPosition> for DoorState {
    fn from(position: DoorPosition) -> Self {
        match position {
            DoorPosition::Open => DoorState::Open,
            DoorPosition::Closed => DoorState::Closed,
        }
    }
}

/// Provenance of a target door state write.
///
/// Only [`Origin::UserCommand`] reaches the remote command path. Writes made to
/// keep the cached target in line with a poll carry [`Origin::PollSync`].
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    #[default]
    UserCommand,
    PollSync,
}

impl Origin {
    pub fn triggers_command(&self) -> bool {
        matches!(self, Origin::UserCommand)
    }
}
