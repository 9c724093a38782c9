use std::rc::Rc;

use crate::dialog::controller::OPEN_CLASS;
use crate::dom::document::Document;
use crate::dom::element::{ElementRef, descendant_with_class};
use crate::dom::selectors::{ACCORDION_HEAD_CLASS, ACCORDION_ITEM_CLASS};
use crate::events::bus::{EventBus, Subscription};

/// One collapsible FAQ block: the item element plus its clickable header.
pub struct AccordionItem {
    item: ElementRef,
    head: ElementRef,
}

impl AccordionItem {
    /// Toggle this item's open state. Items are independent; no
    /// "only one open" constraint.
    pub fn toggle(&self) -> bool {
        self.item.borrow_mut().toggle_class(OPEN_CLASS)
    }

    pub fn is_open(&self) -> bool {
        self.item.borrow().has_class(OPEN_CLASS)
    }
}

/// Collect every `.acc` item that has an `.acc__head` descendant and bind a
/// click-to-toggle on each head. Items without a head are skipped, matching
/// the markup contract.
pub fn bind_accordion(document: &Document, bus: &EventBus) -> Vec<Subscription> {
    let mut subscriptions = Vec::new();

    for item in document.elements_with_class(ACCORDION_ITEM_CLASS) {
        let Some(head) = descendant_with_class(&item, ACCORDION_HEAD_CLASS) else {
            continue;
        };

        let entry = Rc::new(AccordionItem {
            item: Rc::clone(&item),
            head: Rc::clone(&head),
        });

        let toggled = Rc::clone(&entry);
        subscriptions.push(bus.on_click(&entry.head, move |_event| {
            toggled.toggle();
        }));
    }

    subscriptions
}
