//! One state per Mario variant
//!
//! Every living variant installs leave, process and event handlers.
//! Items and monsters move Mario between variants; every event is paid
//! in coins first. Dead Mario only installs a process handler, so the
//! kernel drops all further events and the game is over.

use cfsm_core::{EventId, Fsm, Handlers};

use crate::events::MarioEvent;
use crate::mario::{Mario, Variant};

/// Pay for the event and decode it; unknown ids are ignored
fn receive(fsm: &mut Fsm<Mario>, id: EventId) -> Option<MarioEvent> {
    let event = MarioEvent::from_id(id)?;
    fsm.data_mut().update_coins(event);
    Some(event)
}

fn install_variant(fsm: &mut Fsm<Mario>, variant: Variant) {
    #[cfg(feature = "defmt")]
    defmt::debug!("mario: enter {}", variant);

    fsm.data_mut().set_variant(variant);
}

// Small

/// Enter function of small Mario
pub fn small_enter(fsm: &mut Fsm<Mario>) {
    install_variant(fsm, Variant::Small);
    fsm.data_mut().announce("SmallMario: enter");

    fsm.set_process(small_process);
    fsm.set_event(small_event);
    fsm.set_leave(small_leave);
}

fn small_event(fsm: &mut Fsm<Mario>, id: EventId) {
    match receive(fsm, id) {
        Some(MarioEvent::Mushroom) => fsm.enter(super_enter),
        Some(MarioEvent::FireFlower) => fsm.enter(fire_enter),
        Some(MarioEvent::Feather) => fsm.enter(cape_enter),
        Some(MarioEvent::Monster) => {
            if fsm.data_mut().take_life() == 0 {
                fsm.enter(dead_enter);
            }
        }
        _ => {}
    }
}

fn small_process(fsm: &mut Fsm<Mario>) {
    fsm.data_mut().announce("SmallMario: It's me, Mario!");
}

fn small_leave(fsm: &mut Fsm<Mario>) {
    fsm.data_mut().announce("SmallMario: leave");
}

// Super

/// Enter function of super Mario
pub fn super_enter(fsm: &mut Fsm<Mario>) {
    install_variant(fsm, Variant::Super);
    fsm.data_mut().announce("SuperMario: enter");

    fsm.set_process(super_process);
    fsm.set_event(super_event);
    fsm.set_leave(super_leave);
}

fn super_event(fsm: &mut Fsm<Mario>, id: EventId) {
    match receive(fsm, id) {
        // there is no super super Mario
        Some(MarioEvent::Mushroom) => {}
        Some(MarioEvent::FireFlower) => fsm.enter(fire_enter),
        Some(MarioEvent::Feather) => fsm.enter(cape_enter),
        Some(MarioEvent::Monster) => fsm.enter(small_enter),
        _ => {}
    }
}

fn super_process(fsm: &mut Fsm<Mario>) {
    fsm.data_mut().announce("SuperMario: It's me, SUPER Mario!");
}

fn super_leave(fsm: &mut Fsm<Mario>) {
    fsm.data_mut().announce("SuperMario: leave");
}

// Fire

/// Enter function of fire Mario
pub fn fire_enter(fsm: &mut Fsm<Mario>) {
    install_variant(fsm, Variant::Fire);
    fsm.data_mut().announce("FireMario: enter");

    fsm.set_process(fire_process);
    fsm.set_event(fire_event);
    fsm.set_leave(fire_leave);
}

fn fire_event(fsm: &mut Fsm<Mario>, id: EventId) {
    match receive(fsm, id) {
        Some(MarioEvent::Feather) => fsm.enter(cape_enter),
        Some(MarioEvent::Monster) => fsm.enter(small_enter),
        _ => {}
    }
}

fn fire_process(fsm: &mut Fsm<Mario>) {
    fsm.data_mut().announce("FireMario: I throw fire balls!");
}

fn fire_leave(fsm: &mut Fsm<Mario>) {
    fsm.data_mut().announce("FireMario: leave");
}

// Cape

/// Enter function of cape Mario
pub fn cape_enter(fsm: &mut Fsm<Mario>) {
    install_variant(fsm, Variant::Cape);
    fsm.data_mut().announce("CapeMario: enter");

    fsm.set_process(cape_process);
    fsm.set_event(cape_event);
    fsm.set_leave(cape_leave);
}

fn cape_event(fsm: &mut Fsm<Mario>, id: EventId) {
    match receive(fsm, id) {
        Some(MarioEvent::FireFlower) => fsm.enter(fire_enter),
        Some(MarioEvent::Monster) => fsm.enter(small_enter),
        _ => {}
    }
}

fn cape_process(fsm: &mut Fsm<Mario>) {
    fsm.data_mut().announce("CapeMario: Look, I can fly!");
}

fn cape_leave(fsm: &mut Fsm<Mario>) {
    fsm.data_mut().announce("CapeMario: leave");
}

// Dead

/// Enter function of dead Mario (terminal)
pub fn dead_enter(fsm: &mut Fsm<Mario>) {
    install_variant(fsm, Variant::Dead);
    fsm.data_mut().announce("DeadMario: enter");

    #[cfg(feature = "defmt")]
    defmt::info!("mario: game over");

    fsm.install(Handlers::none().with_process(dead_process));
}

fn dead_process(fsm: &mut Fsm<Mario>) {
    fsm.data_mut().announce("DeadMario: He's dead, Jim!");
}
