//! On/off switch driven through the registry.
//!
//! The lamp's behavior lives in callbacks registered under formatted keys;
//! a simulated update loop flips the switch every twenty frames. Note that
//! no exit keys are registered: leaving either state is silent.
//!
//! Run with: cargo run --example on_off

use std::cell::RefCell;
use std::rc::Rc;

use machinist::{state_id, StateMachine, StateRegistry};

state_id! {
    enum SwitchState {
        Off,
        On,
    }
}

struct Lamp {
    lit_for: f32,
}

fn main() {
    env_logger::init();

    let lamp = Rc::new(RefCell::new(Lamp { lit_for: 0.0 }));

    let burn = Rc::clone(&lamp);
    let registry = StateRegistry::new()
        .on_enter("enter_On", || println!("  -> light on"))
        .on_enter("enter_Off", || println!("  -> light off"))
        .on_update("update_On", move |dt| burn.borrow_mut().lit_for += dt);

    // Enters Off immediately and prints "light off".
    let mut machine = StateMachine::from_registry(registry, SwitchState::Off).unwrap();

    let dt = 0.016;
    for frame in 1..=60 {
        machine.update(dt);

        if frame % 20 == 0 {
            println!("frame {frame}: flipping the switch");
            let next = match machine.current() {
                SwitchState::Off => SwitchState::On,
                SwitchState::On => SwitchState::Off,
            };
            machine.change_state(next);
        }
    }

    println!("lamp was lit for {:.2}s", lamp.borrow().lit_for);
}
