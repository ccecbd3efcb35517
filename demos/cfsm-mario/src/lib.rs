//! Mario power-up game on top of the cfsm kernel
//!
//! Each Mario variant (small, super, fire, cape, dead) is one state. Items
//! and monsters arrive as kernel events, pay coins and move Mario between
//! variants. States talk through a bounded journal instead of printing,
//! so the game runs the same on a host console and on a target without
//! `std`.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod events;
pub mod mario;
pub mod states;

pub use config::MarioConfig;
pub use events::{MarioEvent, OptionError, UnknownEvent};
pub use mario::{Mario, Variant};

use cfsm_core::Fsm;

/// Fresh game context, not yet started
pub fn new_game(config: MarioConfig) -> Fsm<Mario> {
    Fsm::new(Mario::new(config))
}

/// Start (or restart) the game as small Mario
pub fn start(fsm: &mut Fsm<Mario>) {
    fsm.enter(states::small_enter);
}

/// Check if the game has ended
pub fn is_over(fsm: &Fsm<Mario>) -> bool {
    fsm.data().variant().is_terminal()
}
