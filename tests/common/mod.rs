#![allow(dead_code)]

use std::rc::Rc;

use contact_page::dom::document::Document;
use contact_page::dom::element::{ElementRef, named_fields};
use contact_page::dom::selectors::{CONTACT_FORM_ID, CONTACT_HINT_ID};
use contact_page::events::bus::EventBus;
use contact_page::net::transport::MockTransport;
use contact_page::page::bindings::{PageBindings, bind_page};
use contact_page::page::contact::contact_page;
use contact_page::runtime::scheduler::Scheduler;

pub const TEST_ENDPOINT: &str = "https://example.com/contacts/send";

/// A fully wired contact page over a scripted transport and virtual clock.
pub struct Harness {
    pub document: Rc<Document>,
    pub bus: EventBus,
    pub scheduler: Rc<Scheduler>,
    pub transport: Rc<MockTransport>,
    pub bindings: PageBindings,
}

pub fn bind_contact_harness() -> Harness {
    let document = contact_page(TEST_ENDPOINT);
    let bus = EventBus::new();
    let scheduler = Scheduler::new();
    let transport = Rc::new(MockTransport::new());

    let bindings = bind_page(
        &document,
        &bus,
        &scheduler,
        Rc::clone(&transport) as Rc<dyn contact_page::net::transport::Transport>,
    )
    .expect("contact page binds");

    Harness {
        document,
        bus,
        scheduler,
        transport,
        bindings,
    }
}

pub fn contact_form(document: &Document) -> ElementRef {
    document
        .element_by_id(CONTACT_FORM_ID)
        .expect("contact form present")
}

pub fn hint_text(document: &Document) -> String {
    document
        .element_by_id(CONTACT_HINT_ID)
        .expect("hint present")
        .borrow()
        .text_content()
        .to_string()
}

pub fn fill_field(form: &ElementRef, name: &str, value: &str) {
    let field = named_fields(form)
        .into_iter()
        .find(|f| f.borrow().field_name() == Some(name))
        .unwrap_or_else(|| panic!("field '{}' present", name));
    field.borrow_mut().set_value(value);
}

pub fn field_value(form: &ElementRef, name: &str) -> String {
    named_fields(form)
        .into_iter()
        .find(|f| f.borrow().field_name() == Some(name))
        .unwrap_or_else(|| panic!("field '{}' present", name))
        .borrow()
        .value()
        .to_string()
}
