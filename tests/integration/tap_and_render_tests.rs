use super::build_integration_test;

#[test]
fn given_a_press_should_render_the_regenerated_value() {
    let mut test = build_integration_test()
        .given_bounds(7, 7)
        .expecting_renders(&["0", "7"])
        .build();

    test.host.signals().view_ready();
    test.host.process_events().unwrap();

    assert!(test.button.press());
    assert_eq!(test.host.coordinator().data_holder().unwrap().value(), 7);
}

#[test]
fn given_explicit_bounds_should_render_each_regeneration_in_order() {
    let mut test = build_integration_test()
        .expecting_renders(&["0", "5", "-1", "5"])
        .build();

    test.host.signals().view_ready();
    test.host.process_events().unwrap();

    let holder = test.host.coordinator().data_holder().unwrap();
    holder.regenerate_in(5, 5).unwrap();
    holder.regenerate_in(-1, -1).unwrap();
    holder.regenerate_in(5, 5).unwrap();
}

#[test]
fn given_an_inverted_range_should_not_render() {
    let mut test = build_integration_test().expecting_renders(&["0"]).build();

    test.host.signals().view_ready();
    test.host.process_events().unwrap();

    let holder = test.host.coordinator().data_holder().unwrap();
    assert!(holder.regenerate_in(10, 1).is_err());
    assert_eq!(holder.value(), 0);
}

#[test]
fn given_an_extra_subscriber_both_should_observe_the_press() {
    let mut test = build_integration_test()
        .given_bounds(3, 3)
        .expecting_renders(&["0", "3"])
        .build();

    test.host.signals().view_ready();
    test.host.process_events().unwrap();

    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = seen.clone();
    let holder = test.host.coordinator().data_holder().unwrap();
    holder.subscribe(move |value| sink.lock().unwrap().push(value));

    test.button.press();

    assert_eq!(*seen.lock().unwrap(), vec![3]);
}
