//! Events Mario can run into

use core::fmt;
use core::str::FromStr;

use cfsm_core::EventId;

/// Game events, numbered as on the console menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MarioEvent {
    /// Leave the game (handled by the driver, never signaled)
    Quit,
    /// Got a mushroom
    Mushroom,
    /// Got a fire flower
    FireFlower,
    /// Got a feather
    Feather,
    /// Hit a monster
    Monster,
    /// Skip signaling, just run a process cycle
    Nop,
}

// Event ids
const ID_QUIT: EventId = 0;
const ID_MUSHROOM: EventId = 1;
const ID_FIRE_FLOWER: EventId = 2;
const ID_FEATHER: EventId = 3;
const ID_MONSTER: EventId = 4;
const ID_NOP: EventId = 5;

impl MarioEvent {
    /// Map a kernel event id back to the event
    pub fn from_id(id: EventId) -> Option<Self> {
        match id {
            ID_QUIT => Some(MarioEvent::Quit),
            ID_MUSHROOM => Some(MarioEvent::Mushroom),
            ID_FIRE_FLOWER => Some(MarioEvent::FireFlower),
            ID_FEATHER => Some(MarioEvent::Feather),
            ID_MONSTER => Some(MarioEvent::Monster),
            ID_NOP => Some(MarioEvent::Nop),
            _ => None,
        }
    }

    /// Kernel event id
    pub fn id(self) -> EventId {
        match self {
            MarioEvent::Quit => ID_QUIT,
            MarioEvent::Mushroom => ID_MUSHROOM,
            MarioEvent::FireFlower => ID_FIRE_FLOWER,
            MarioEvent::Feather => ID_FEATHER,
            MarioEvent::Monster => ID_MONSTER,
            MarioEvent::Nop => ID_NOP,
        }
    }
}

/// Event id outside the known range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownEvent(pub EventId);

impl fmt::Display for UnknownEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event id {}", self.0)
    }
}

impl TryFrom<EventId> for MarioEvent {
    type Error = UnknownEvent;

    fn try_from(id: EventId) -> Result<Self, Self::Error> {
        MarioEvent::from_id(id).ok_or(UnknownEvent(id))
    }
}

/// Errors when reading a menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OptionError {
    /// Input is not a number
    NotANumber,
    /// Number is not a menu entry
    Unknown(UnknownEvent),
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::NotANumber => f.write_str("not a number"),
            OptionError::Unknown(unknown) => fmt::Display::fmt(unknown, f),
        }
    }
}

impl FromStr for MarioEvent {
    type Err = OptionError;

    /// Parse a console menu option like `" 3\n"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: EventId = s.trim().parse().map_err(|_| OptionError::NotANumber)?;
        MarioEvent::try_from(id).map_err(OptionError::Unknown)
    }
}
