//! ON and OFF states
//!
//! ON lights the LED and polls the clock until the on-time expired.
//! OFF darkens the LED and waits for the turn-on event.

use cfsm_core::{EventId, Fsm};
use embedded_hal::digital::OutputPin;

use crate::blink::Blink;
use crate::clock::Clock;

impl<P: OutputPin, C: Clock> Blink<P, C> {
    /// Enter function of the ON state
    pub fn on_enter(fsm: &mut Fsm<Self>) {
        #[cfg(feature = "defmt")]
        defmt::debug!("blink: ON enter");

        let blink = fsm.data_mut();
        blink.drive_led(true);
        blink.arm();

        fsm.set_process(Self::on_process);
        fsm.set_leave(Self::on_leave);
    }

    fn on_process(fsm: &mut Fsm<Self>) {
        let blink = fsm.data();
        if blink.since_turn_on() >= blink.config.on_time_ms {
            #[cfg(feature = "defmt")]
            defmt::info!("blink: LED on time has expired");

            fsm.enter(Self::off_enter);
        }
    }

    fn on_leave(_fsm: &mut Fsm<Self>) {
        #[cfg(feature = "defmt")]
        defmt::debug!("blink: ON leave");
    }

    /// Enter function of the OFF state
    pub fn off_enter(fsm: &mut Fsm<Self>) {
        #[cfg(feature = "defmt")]
        defmt::debug!("blink: OFF enter");

        fsm.data_mut().drive_led(false);

        fsm.set_event(Self::off_event);
        fsm.set_leave(Self::off_leave);
    }

    fn off_event(fsm: &mut Fsm<Self>, id: EventId) {
        #[cfg(feature = "defmt")]
        defmt::debug!("blink: OFF event {=i32}", id);

        if id == fsm.data().config.turn_on_event {
            fsm.enter(Self::on_enter);
        }
    }

    fn off_leave(_fsm: &mut Fsm<Self>) {
        #[cfg(feature = "defmt")]
        defmt::debug!("blink: OFF leave");
    }
}
