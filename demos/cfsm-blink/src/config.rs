//! Blink timing configuration

use cfsm_core::EventId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Event id that switches the LED back on
pub const BLINK_EVENT_ON: EventId = 42;

/// Blink timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlinkConfig {
    /// How long the LED stays lit (ms)
    pub on_time_ms: u64,
    /// Time between two turn-on events, measured from the last turn-on (ms)
    pub period_ms: u64,
    /// Event id the OFF state reacts to
    pub turn_on_event: EventId,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            on_time_ms: 1000,
            period_ms: 2000,
            turn_on_event: BLINK_EVENT_ON,
        }
    }
}
