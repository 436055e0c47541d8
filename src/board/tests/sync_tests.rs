//! Stale response gate tests.

use crate::board::sync::ResponseGate;
use crate::task::domain::TaskId;
use rstest::rstest;

#[rstest]
fn latest_response_is_accepted() {
    let mut gate = ResponseGate::new();
    let ticket = gate.begin(TaskId::new());

    assert!(gate.is_current(&ticket));
    assert!(gate.complete(&ticket));
    assert_eq!(gate.in_flight(), 0);
}

#[rstest]
fn superseded_response_is_discarded() {
    let mut gate = ResponseGate::new();
    let id = TaskId::new();
    let older = gate.begin(id);
    let newer = gate.begin(id);

    assert!(!gate.complete(&older));
    assert!(gate.complete(&newer));
}

#[rstest]
fn late_arrival_after_newer_completion_is_discarded() {
    let mut gate = ResponseGate::new();
    let id = TaskId::new();
    let older = gate.begin(id);
    let newer = gate.begin(id);

    assert!(gate.complete(&newer));
    assert!(!gate.complete(&older));
}

#[rstest]
fn entities_are_tracked_independently() {
    let mut gate = ResponseGate::new();
    let first = gate.begin(TaskId::new());
    let second = gate.begin(TaskId::new());

    assert_eq!(gate.in_flight(), 2);
    assert!(gate.complete(&first));
    assert!(gate.complete(&second));
    assert!(second.sequence() > first.sequence());
}
