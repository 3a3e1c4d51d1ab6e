//! Guard patrol behavior with explicitly wired states.
//!
//! The explicit construction path: each state is built by hand with exactly
//! the callbacks it needs, then handed to the machine as a complete set.
//!
//! Run with: cargo run --example patrol

use std::cell::Cell;
use std::rc::Rc;

use machinist::{state_id, State, StateMachine};

state_id! {
    enum GuardState {
        Patrolling,
        Chasing,
        Searching,
    }
}

fn main() {
    env_logger::init();

    // Distance covered while patrolling, shared with the update callback.
    let walked = Rc::new(Cell::new(0.0f32));
    let pace = Rc::clone(&walked);

    let states = vec![
        State::new(GuardState::Patrolling)
            .on_enter(|| println!("back on the route"))
            .on_update(move |dt| pace.set(pace.get() + dt * 1.5)),
        State::new(GuardState::Chasing)
            .on_enter(|| println!("intruder spotted, giving chase"))
            .on_exit(|| println!("lost them")),
        State::new(GuardState::Searching)
            .on_enter(|| println!("searching the area"))
            .on_update(|dt| println!("  peeking behind crates for {dt}s")),
    ];

    let mut machine = StateMachine::new(states, GuardState::Patrolling)
        .expect("one state per GuardState variant");

    let dt = 0.5;
    for second in 0..8 {
        machine.update(dt);

        match second {
            2 => machine.change_state(GuardState::Chasing),
            4 => machine.change_state(GuardState::Searching),
            6 => machine.change_state(GuardState::Patrolling),
            _ => {}
        }
    }

    println!("patrolled {:.2} meters in total", walked.get());
}
