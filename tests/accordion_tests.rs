use std::rc::Rc;

use contact_page::accordion::group::bind_accordion;
use contact_page::dom::document::Document;
use contact_page::dom::element::{Element, descendant_with_class};
use contact_page::dom::selectors::{ACCORDION_HEAD_CLASS, ACCORDION_ITEM_CLASS};
use contact_page::events::bus::{Event, EventBus};

fn accordion_doc(items: usize) -> Rc<Document> {
    let document = Document::new();
    for i in 0..items {
        document.append(
            Element::new("div")
                .class(ACCORDION_ITEM_CLASS)
                .child(
                    Element::new("button")
                        .class(ACCORDION_HEAD_CLASS)
                        .text(&format!("Question {}", i))
                        .into_ref(),
                )
                .child(Element::new("div").class("acc__body").into_ref())
                .into_ref(),
        );
    }
    document
}

#[test]
fn clicking_a_head_toggles_only_its_own_item() {
    let document = accordion_doc(3);
    let bus = EventBus::new();
    let subs = bind_accordion(&document, &bus);
    assert_eq!(subs.len(), 3, "One listener per item");

    let items = document.elements_with_class(ACCORDION_ITEM_CLASS);
    let head = descendant_with_class(&items[1], ACCORDION_HEAD_CLASS).unwrap();

    bus.dispatch(&Event::click(&head));

    assert!(!items[0].borrow().has_class("is-open"), "Neighbor unaffected");
    assert!(items[1].borrow().has_class("is-open"), "Clicked item opened");
    assert!(!items[2].borrow().has_class("is-open"), "Neighbor unaffected");
}

#[test]
fn second_click_closes_the_item_again() {
    let document = accordion_doc(1);
    let bus = EventBus::new();
    let _subs = bind_accordion(&document, &bus);

    let item = &document.elements_with_class(ACCORDION_ITEM_CLASS)[0];
    let head = descendant_with_class(item, ACCORDION_HEAD_CLASS).unwrap();

    bus.dispatch(&Event::click(&head));
    bus.dispatch(&Event::click(&head));
    assert!(!item.borrow().has_class("is-open"), "Toggle is symmetric");
}

#[test]
fn items_keep_independent_state_across_clicks() {
    let document = accordion_doc(2);
    let bus = EventBus::new();
    let _subs = bind_accordion(&document, &bus);

    let items = document.elements_with_class(ACCORDION_ITEM_CLASS);
    let head_a = descendant_with_class(&items[0], ACCORDION_HEAD_CLASS).unwrap();
    let head_b = descendant_with_class(&items[1], ACCORDION_HEAD_CLASS).unwrap();

    bus.dispatch(&Event::click(&head_a));
    bus.dispatch(&Event::click(&head_b));
    bus.dispatch(&Event::click(&head_a));

    assert!(!items[0].borrow().has_class("is-open"), "A toggled twice, closed");
    assert!(items[1].borrow().has_class("is-open"), "B toggled once, open");
}

#[test]
fn item_without_a_head_is_skipped() {
    let document = Document::new();
    document.append(
        Element::new("div")
            .class(ACCORDION_ITEM_CLASS)
            .child(Element::new("div").class("acc__body").into_ref())
            .into_ref(),
    );

    let bus = EventBus::new();
    let subs = bind_accordion(&document, &bus);
    assert!(subs.is_empty(), "Headless item gets no listener");
}
