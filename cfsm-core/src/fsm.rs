//! The FSM context and its four operations
//!
//! Transition protocol, in this order:
//! 1. leave handler of the outgoing state (if any)
//! 2. all slots cleared
//! 3. enter function of the incoming state (if any)
//!
//! Any callback may call [`Fsm::transition`] again. There is no depth
//! guard: a chain of enter functions that never settles recurses until
//! the stack is exhausted.

use crate::handlers::{EnterFn, EventFn, EventId, Handlers, LeaveFn, ProcessFn};

/// FSM context
///
/// Pairs the caller's instance data with the handlers installed by the
/// active state. The kernel never looks at `data`; it is handed to every
/// callback through the context.
#[derive(Debug)]
pub struct Fsm<D> {
    data: D,
    handlers: Handlers<D>,
}

impl<D: Default> Default for Fsm<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D> Fsm<D> {
    /// Create an initialized context with no active state
    pub const fn new(data: D) -> Self {
        Self {
            data,
            handlers: Handlers::none(),
        }
    }

    /// Re-initialize the context
    ///
    /// Overwrites the instance data and clears all slots. The leave
    /// handler of a still active state is NOT called.
    pub fn init(&mut self, data: D) {
        self.data = data;
        self.handlers = Handlers::none();
    }

    /// Leave the active state and enter the one given by `enter`
    ///
    /// With `None` the context ends up idle: every later `process` and
    /// `event` call is a no-op until the next transition.
    pub fn transition(&mut self, enter: Option<EnterFn<D>>) {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "cfsm: transition from {} (enter={=bool})",
            self.handlers,
            enter.is_some()
        );

        if let Some(leave) = self.handlers.leave {
            leave(self);
        }

        self.handlers = Handlers::none();

        if let Some(enter) = enter {
            enter(self);
        }
    }

    /// Transition into the state entered by `f`
    pub fn enter(&mut self, f: EnterFn<D>) {
        self.transition(Some(f));
    }

    /// Leave the active state without entering a new one
    pub fn halt(&mut self) {
        self.transition(None);
    }

    /// Run one process cycle of the active state
    pub fn process(&mut self) {
        if let Some(process) = self.handlers.process {
            process(self);
        }
    }

    /// Deliver an event to the active state
    ///
    /// Dropped silently if the active state has no event handler.
    pub fn event(&mut self, id: EventId) {
        match self.handlers.event {
            Some(on_event) => on_event(self, id),
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("cfsm: event {=i32} dropped", id);
            }
        }
    }

    /// Bind the leave slot (meant for enter functions)
    pub fn set_leave(&mut self, f: LeaveFn<D>) {
        self.handlers.leave = Some(f);
    }

    /// Bind the process slot (meant for enter functions)
    pub fn set_process(&mut self, f: ProcessFn<D>) {
        self.handlers.process = Some(f);
    }

    /// Bind the event slot (meant for enter functions)
    pub fn set_event(&mut self, f: EventFn<D>) {
        self.handlers.event = Some(f);
    }

    /// Replace all three slots at once
    pub fn install(&mut self, handlers: Handlers<D>) {
        self.handlers = handlers;
    }

    /// Currently installed handlers
    pub fn handlers(&self) -> Handlers<D> {
        self.handlers
    }

    /// Check if no state is active
    pub fn is_idle(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Shared access to the instance data
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Exclusive access to the instance data
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Tear the context down and hand the instance data back
    pub fn into_data(self) -> D {
        self.data
    }
}
