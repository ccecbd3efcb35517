//! Blinking LED on top of the cfsm kernel
//!
//! Two states share one [`Blink`] instance:
//!
//! - ON: LED high, leaves for OFF once `on_time_ms` has passed
//! - OFF: LED low, returns to ON on the turn-on event
//!
//! The driving loop calls [`cycle`] as often as it likes. Each cycle runs
//! the active state's process handler and signals the turn-on event once
//! `period_ms` has passed since the last turn-on. While ON that event is
//! simply dropped by the kernel.

#![no_std]
#![deny(unsafe_code)]

pub mod blink;
pub mod clock;
pub mod config;
mod states;

pub use blink::Blink;
pub use clock::Clock;
pub use config::{BlinkConfig, BLINK_EVENT_ON};

use cfsm_core::Fsm;
use embedded_hal::digital::OutputPin;

/// Start blinking: enter the ON state
pub fn start<P: OutputPin, C: Clock>(fsm: &mut Fsm<Blink<P, C>>) {
    fsm.enter(Blink::<P, C>::on_enter);
}

/// One iteration of the control loop
pub fn cycle<P: OutputPin, C: Clock>(fsm: &mut Fsm<Blink<P, C>>) {
    fsm.process();

    let blink = fsm.data();
    if blink.since_turn_on() >= blink.config().period_ms {
        let id = blink.config().turn_on_event;

        #[cfg(feature = "defmt")]
        defmt::debug!("blink: turn on time reached, signal {=i32}", id);

        fsm.event(id);
    }
}
