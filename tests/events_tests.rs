use std::cell::Cell;
use std::rc::Rc;

use contact_page::dom::element::Element;
use contact_page::events::bus::{Event, EventBus};

#[test]
fn click_reaches_only_the_bound_element() {
    let bus = EventBus::new();
    let button_a = Element::new("button").into_ref();
    let button_b = Element::new("button").into_ref();

    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let _sub = bus.on_click(&button_a, move |_| counter.set(counter.get() + 1));

    bus.dispatch(&Event::click(&button_b));
    assert_eq!(hits.get(), 0, "Unrelated target ignored");

    bus.dispatch(&Event::click(&button_a));
    assert_eq!(hits.get(), 1);
}

#[test]
fn keydown_listeners_are_document_wide() {
    let bus = EventBus::new();

    let seen = Rc::new(Cell::new(false));
    let flag = Rc::clone(&seen);
    let _sub = bus.on_keydown(move |event| {
        if event.key.as_deref() == Some("Escape") {
            flag.set(true);
        }
    });

    bus.dispatch(&Event::keydown("Escape"));
    assert!(seen.get());
}

#[test]
fn detach_stops_delivery() {
    let bus = EventBus::new();
    let button = Element::new("button").into_ref();

    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let sub = bus.on_click(&button, move |_| counter.set(counter.get() + 1));

    bus.dispatch(&Event::click(&button));
    sub.detach();
    bus.dispatch(&Event::click(&button));

    assert_eq!(hits.get(), 1, "Nothing delivered after detach");
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn listeners_fire_in_attach_order() {
    let bus = EventBus::new();
    let button = Element::new("button").into_ref();

    let log = Rc::new(std::cell::RefCell::new(Vec::new()));
    let first = Rc::clone(&log);
    let second = Rc::clone(&log);
    let _a = bus.on_click(&button, move |_| first.borrow_mut().push("first"));
    let _b = bus.on_click(&button, move |_| second.borrow_mut().push("second"));

    bus.dispatch(&Event::click(&button));
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn prevent_default_is_visible_to_the_dispatcher() {
    let bus = EventBus::new();
    let form = Element::new("form").into_ref();
    let _sub = bus.on_submit(&form, |event| event.prevent_default());

    let event = Event::submit(&form);
    assert!(!event.default_prevented());
    bus.dispatch(&event);
    assert!(event.default_prevented());
}

#[test]
fn handlers_may_detach_other_listeners_mid_dispatch() {
    let bus = EventBus::new();
    let button = Element::new("button").into_ref();

    let hits = Rc::new(Cell::new(0));

    let sub_slot: Rc<std::cell::RefCell<Option<contact_page::events::bus::Subscription>>> =
        Rc::new(std::cell::RefCell::new(None));

    let slot = Rc::clone(&sub_slot);
    let _first = bus.on_click(&button, move |_| {
        if let Some(sub) = slot.borrow_mut().take() {
            sub.detach();
        }
    });

    let counter = Rc::clone(&hits);
    let second = bus.on_click(&button, move |_| counter.set(counter.get() + 1));
    *sub_slot.borrow_mut() = Some(second);

    // The matching set is snapshotted, so the second listener still fires
    // this dispatch and is gone for the next one.
    bus.dispatch(&Event::click(&button));
    assert_eq!(hits.get(), 1);

    bus.dispatch(&Event::click(&button));
    assert_eq!(hits.get(), 1);
}
