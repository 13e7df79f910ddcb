use super::*;

#[test]
fn arming_invalidates_the_previous_timer() {
    let gate = TimerGate::default();
    let first = gate.arm();
    assert!(gate.is_current(first));
    let second = gate.arm();
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));
}

#[test]
fn disarm_invalidates_the_running_timer() {
    let gate = TimerGate::default();
    let generation = gate.arm();
    gate.disarm();
    assert!(!gate.is_current(generation));
}

#[test]
fn tick_is_skipped_while_a_request_is_out() {
    let slot = InFlight::default();
    assert!(slot.try_begin_tick());
    assert!(!slot.try_begin_tick());
    slot.finish();
    assert!(slot.is_idle());
    assert!(slot.try_begin_tick());
}

#[test]
fn user_fetch_goes_out_even_when_busy() {
    let slot = InFlight::default();
    slot.begin();
    slot.begin();
    assert!(!slot.try_begin_tick());
    slot.finish();
    assert!(!slot.try_begin_tick());
    slot.finish();
    assert!(slot.try_begin_tick());
    slot.finish();
    slot.finish();
    assert!(slot.is_idle());
}
