//! Callback slots installed by the active state
//!
//! A state has no stored identity. It is exactly the set of handlers its
//! enter function put into these slots.

use core::fmt;

use crate::fsm::Fsm;

/// Application defined event identifier. Has no meaning to the kernel.
pub type EventId = i32;

/// Enter function of a state. Installs the state's handlers.
pub type EnterFn<D> = fn(&mut Fsm<D>);

/// Runs once when the active state is left.
pub type LeaveFn<D> = fn(&mut Fsm<D>);

/// Cyclic work of the active state.
pub type ProcessFn<D> = fn(&mut Fsm<D>);

/// Event reaction of the active state.
pub type EventFn<D> = fn(&mut Fsm<D>, EventId);

/// The three callback slots of a context
///
/// Every slot is optional. An empty slot turns the matching kernel
/// operation into a no-op.
pub struct Handlers<D> {
    /// Called by the next transition before the slots are cleared
    pub leave: Option<LeaveFn<D>>,
    /// Called by [`Fsm::process`]
    pub process: Option<ProcessFn<D>>,
    /// Called by [`Fsm::event`]
    pub event: Option<EventFn<D>>,
}

impl<D> Handlers<D> {
    /// All slots unset
    pub const fn none() -> Self {
        Self {
            leave: None,
            process: None,
            event: None,
        }
    }

    /// Same handlers with the leave slot bound to `f`
    pub const fn with_leave(self, f: LeaveFn<D>) -> Self {
        Self {
            leave: Some(f),
            ..self
        }
    }

    /// Same handlers with the process slot bound to `f`
    pub const fn with_process(self, f: ProcessFn<D>) -> Self {
        Self {
            process: Some(f),
            ..self
        }
    }

    /// Same handlers with the event slot bound to `f`
    pub const fn with_event(self, f: EventFn<D>) -> Self {
        Self {
            event: Some(f),
            ..self
        }
    }

    /// Check if no slot is bound
    pub const fn is_empty(&self) -> bool {
        self.leave.is_none() && self.process.is_none() && self.event.is_none()
    }
}

// Manual impls: derives would demand `D: Clone` etc. although only
// function pointers are stored.
impl<D> Clone for Handlers<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Handlers<D> {}

impl<D> Default for Handlers<D> {
    fn default() -> Self {
        Self::none()
    }
}

impl<D> fmt::Debug for Handlers<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("leave", &self.leave.is_some())
            .field("process", &self.process.is_some())
            .field("event", &self.event.is_some())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl<D> defmt::Format for Handlers<D> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Handlers[leave={=bool}, process={=bool}, event={=bool}]",
            self.leave.is_some(),
            self.process.is_some(),
            self.event.is_some()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave(_: &mut Fsm<u8>) {}
    fn process(_: &mut Fsm<u8>) {}
    fn event(_: &mut Fsm<u8>, _: EventId) {}

    #[test]
    fn test_none_is_empty() {
        let handlers: Handlers<u8> = Handlers::none();
        assert!(handlers.is_empty());
        assert!(Handlers::<u8>::default().is_empty());
    }

    #[test]
    fn test_builders_bind_single_slot() {
        let only_leave = Handlers::<u8>::none().with_leave(leave);
        assert!(only_leave.leave.is_some());
        assert!(only_leave.process.is_none());
        assert!(only_leave.event.is_none());

        let only_event = Handlers::<u8>::none().with_event(event);
        assert!(only_event.leave.is_none());
        assert!(only_event.process.is_none());
        assert!(only_event.event.is_some());
    }

    #[test]
    fn test_builders_chain() {
        let all = Handlers::<u8>::none()
            .with_leave(leave)
            .with_process(process)
            .with_event(event);
        assert!(!all.is_empty());
        assert!(all.leave.is_some());
        assert!(all.process.is_some());
        assert!(all.event.is_some());

        // Copy semantics: the original stays usable
        let copy = all;
        assert!(all.process.is_some());
        assert!(copy.process.is_some());
    }
}
