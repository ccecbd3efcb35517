//! Callback finite state machine kernel
//!
//! A state is not an object here. It is the set of callbacks its enter
//! function installs into a shared [`Fsm`] context:
//!
//! - leave: runs once when the state is left
//! - process: cyclic work, driven by the caller's loop
//! - event: reaction to an application defined [`EventId`]
//!
//! The kernel owns nothing but these three slots. It has no timers, no
//! queue, no threads and never allocates. Instance data of type `D` is
//! bound when the context is created and handed to every callback.
//!
//! # Example
//!
//! ```rust
//! use cfsm_core::Fsm;
//!
//! struct Lamp {
//!     lit: bool,
//!     ticks: u32,
//! }
//!
//! fn lit_enter(fsm: &mut Fsm<Lamp>) {
//!     fsm.data_mut().lit = true;
//!     fsm.set_process(lit_process);
//!     fsm.set_leave(lit_leave);
//! }
//!
//! fn lit_process(fsm: &mut Fsm<Lamp>) {
//!     fsm.data_mut().ticks += 1;
//!     if fsm.data().ticks >= 3 {
//!         fsm.halt();
//!     }
//! }
//!
//! fn lit_leave(fsm: &mut Fsm<Lamp>) {
//!     fsm.data_mut().lit = false;
//! }
//!
//! let mut fsm = Fsm::new(Lamp { lit: false, ticks: 0 });
//! fsm.enter(lit_enter);
//! for _ in 0..5 {
//!     fsm.process();
//! }
//!
//! assert!(!fsm.data().lit);
//! assert_eq!(fsm.data().ticks, 3);
//! assert!(fsm.is_idle());
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod fsm;
pub mod handlers;

pub use fsm::Fsm;
pub use handlers::{EnterFn, EventFn, EventId, Handlers, LeaveFn, ProcessFn};

/// Semantic version, major part
pub const VERSION_MAJOR: u32 = 0;
/// Semantic version, minor part
pub const VERSION_MINOR: u32 = 3;
/// Semantic version, patch part
pub const VERSION_PATCH: u32 = 0;
