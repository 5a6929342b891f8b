use super::build_integration_test;
use passive_view::{Error, Phase};

#[test]
fn given_view_ready_should_render_initial_value_once() {
    let mut test = build_integration_test().expecting_renders(&["0"]).build();

    test.host.signals().view_ready();

    assert_eq!(test.host.process_events(), Ok(true));
    assert_eq!(test.host.coordinator().phase(), Phase::Bound);
}

#[test]
fn given_no_view_ready_a_press_should_not_render() {
    let mut test = build_integration_test().build();

    assert_eq!(test.host.process_events(), Ok(true));
    assert!(!test.button.press());
}

#[test]
fn given_a_full_lifecycle_run_should_return_after_view_destroyed() {
    let mut test = build_integration_test().expecting_renders(&["0"]).build();
    let signals = test.host.signals();

    signals.view_ready();
    signals.view_destroyed();

    assert_eq!(test.host.run_blocking(), Ok(()));
    assert!(!test.host.coordinator().is_subscribed());
}

#[test]
fn given_view_destroyed_later_presses_should_not_render() {
    let mut test = build_integration_test()
        .given_bounds(2, 2)
        .expecting_renders(&["0", "2"])
        .build();
    let signals = test.host.signals();

    signals.view_ready();
    test.host.process_events().unwrap();
    test.button.press();

    signals.view_destroyed();
    assert_eq!(test.host.process_events(), Ok(false));

    // The data holder still regenerates, but nobody renders it.
    assert!(test.button.press());
    assert_eq!(test.host.coordinator().data_holder().unwrap().value(), 2);
}

#[test]
fn given_view_ready_twice_run_should_report_already_started() {
    let mut test = build_integration_test().expecting_renders(&["0"]).build();
    let signals = test.host.signals();

    signals.view_ready();
    signals.view_ready();

    assert_eq!(test.host.run_blocking(), Err(Error::AlreadyStarted));
}
