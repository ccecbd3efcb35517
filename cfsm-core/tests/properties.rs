//! Property-based tests for the FSM kernel.
//!
//! A tiny model tracks which slots should be installed and how often each
//! callback should have run; random operation sequences are replayed
//! against both the model and a real context.

use cfsm_core::{EnterFn, EventId, Fsm};
use proptest::prelude::*;

const LEAVE: u8 = 0b001;
const PROCESS: u8 = 0b010;
const EVENT: u8 = 0b100;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Recorder {
    enters: u32,
    leaves: u32,
    processes: u32,
    events: u32,
    last_event: Option<EventId>,
}

fn on_leave(fsm: &mut Fsm<Recorder>) {
    fsm.data_mut().leaves += 1;
}

fn on_process(fsm: &mut Fsm<Recorder>) {
    fsm.data_mut().processes += 1;
}

fn on_event(fsm: &mut Fsm<Recorder>, id: EventId) {
    let rec = fsm.data_mut();
    rec.events += 1;
    rec.last_event = Some(id);
}

fn install_mask(fsm: &mut Fsm<Recorder>, mask: u8) {
    fsm.data_mut().enters += 1;
    if mask & LEAVE != 0 {
        fsm.set_leave(on_leave);
    }
    if mask & PROCESS != 0 {
        fsm.set_process(on_process);
    }
    if mask & EVENT != 0 {
        fsm.set_event(on_event);
    }
}

fn enter_0(fsm: &mut Fsm<Recorder>) {
    install_mask(fsm, 0);
}
fn enter_1(fsm: &mut Fsm<Recorder>) {
    install_mask(fsm, 1);
}
fn enter_2(fsm: &mut Fsm<Recorder>) {
    install_mask(fsm, 2);
}
fn enter_3(fsm: &mut Fsm<Recorder>) {
    install_mask(fsm, 3);
}
fn enter_4(fsm: &mut Fsm<Recorder>) {
    install_mask(fsm, 4);
}
fn enter_5(fsm: &mut Fsm<Recorder>) {
    install_mask(fsm, 5);
}
fn enter_6(fsm: &mut Fsm<Recorder>) {
    install_mask(fsm, 6);
}
fn enter_7(fsm: &mut Fsm<Recorder>) {
    install_mask(fsm, 7);
}

const ENTERS: [EnterFn<Recorder>; 8] = [
    enter_0, enter_1, enter_2, enter_3, enter_4, enter_5, enter_6, enter_7,
];

fn installed_mask(fsm: &Fsm<Recorder>) -> u8 {
    let h = fsm.handlers();
    let mut mask = 0;
    if h.leave.is_some() {
        mask |= LEAVE;
    }
    if h.process.is_some() {
        mask |= PROCESS;
    }
    if h.event.is_some() {
        mask |= EVENT;
    }
    mask
}

#[derive(Debug, Clone)]
enum Op {
    Transition(Option<u8>),
    Process,
    Event(EventId),
    Init,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => proptest::option::of(0u8..8).prop_map(Op::Transition),
        3 => Just(Op::Process),
        3 => any::<EventId>().prop_map(Op::Event),
        1 => Just(Op::Init),
    ]
}

/// Reference model of what the kernel should do
#[derive(Debug, Default)]
struct Model {
    mask: u8,
    expected: Recorder,
}

impl Model {
    fn apply(&mut self, op: &Op) {
        match *op {
            Op::Transition(next) => {
                if self.mask & LEAVE != 0 {
                    self.expected.leaves += 1;
                }
                self.mask = 0;
                if let Some(mask) = next {
                    self.expected.enters += 1;
                    self.mask = mask;
                }
            }
            Op::Process => {
                if self.mask & PROCESS != 0 {
                    self.expected.processes += 1;
                }
            }
            Op::Event(id) => {
                if self.mask & EVENT != 0 {
                    self.expected.events += 1;
                    self.expected.last_event = Some(id);
                }
            }
            Op::Init => {
                self.mask = 0;
                self.expected = Recorder::default();
            }
        }
    }
}

fn run(fsm: &mut Fsm<Recorder>, op: &Op) {
    match *op {
        Op::Transition(next) => fsm.transition(next.map(|m| ENTERS[m as usize])),
        Op::Process => fsm.process(),
        Op::Event(id) => fsm.event(id),
        Op::Init => fsm.init(Recorder::default()),
    }
}

proptest! {
    #[test]
    fn kernel_matches_model(ops in proptest::collection::vec(arbitrary_op(), 0..64)) {
        let mut fsm = Fsm::new(Recorder::default());
        let mut model = Model::default();

        for op in &ops {
            run(&mut fsm, op);
            model.apply(op);

            prop_assert_eq!(installed_mask(&fsm), model.mask);
            prop_assert_eq!(fsm.data(), &model.expected);
        }
    }

    #[test]
    fn init_resets_any_prior_context(
        ops in proptest::collection::vec(arbitrary_op(), 0..32),
        marker in any::<EventId>(),
    ) {
        let mut fsm = Fsm::new(Recorder::default());
        for op in &ops {
            run(&mut fsm, op);
        }

        let fresh = Recorder { last_event: Some(marker), ..Recorder::default() };
        fsm.init(fresh.clone());

        prop_assert!(fsm.is_idle());
        prop_assert_eq!(fsm.data(), &fresh);
    }

    #[test]
    fn transition_leaves_at_most_once(prior in proptest::option::of(0u8..8), next in proptest::option::of(0u8..8)) {
        let mut fsm = Fsm::new(Recorder::default());
        fsm.transition(prior.map(|m| ENTERS[m as usize]));
        let before = fsm.data().leaves;

        fsm.transition(next.map(|m| ENTERS[m as usize]));
        let left = fsm.data().leaves - before;

        let had_leave = prior.is_some_and(|m| m & LEAVE != 0);
        prop_assert_eq!(left, u32::from(had_leave));
        prop_assert_eq!(installed_mask(&fsm), next.unwrap_or(0));
    }

    #[test]
    fn unset_slots_are_repeatable_noops(mask in 0u8..8, ids in proptest::collection::vec(any::<EventId>(), 1..16)) {
        let mut fsm = Fsm::new(Recorder::default());
        fsm.enter(ENTERS[mask as usize]);
        let snapshot = fsm.data().clone();

        for &id in &ids {
            if mask & PROCESS == 0 {
                fsm.process();
            }
            if mask & EVENT == 0 {
                fsm.event(id);
            }
        }

        prop_assert_eq!(fsm.data(), &snapshot);
        prop_assert_eq!(installed_mask(&fsm), mask);
    }
}
