use std::rc::Rc;

use crate::dialog::controller::OPEN_CLASS;
use crate::dom::element::{descendant_with_class, named_fields};
use crate::dom::selectors::{
    ACCORDION_HEAD_CLASS, ACCORDION_ITEM_CLASS, CONTACT_FORM_ID, CONTACT_HINT_ID,
    CONTACT_MODAL_NAME, MODAL_OPEN_ATTR, PARTNERS_SLIDER_NAME, SLIDER_RIGHT_ATTR,
    SLIDER_TRACK_ATTR,
};
use crate::events::bus::{Event, EventBus};
use crate::form::submit::CONFIRMATION_MESSAGE;
use crate::net::transport::{HttpTransport, MockTransport, Transport};
use crate::page::bindings::bind_page;
use crate::page::contact::contact_page;
use crate::runtime::scheduler::Scheduler;

fn build_transport(name: &str) -> Result<Rc<dyn Transport>, Box<dyn std::error::Error>> {
    match name {
        "http" => Ok(Rc::new(HttpTransport::new())),
        "mock" => Ok(Rc::new(MockTransport::new())),
        other => Err(format!("Unknown transport '{}' (expected http or mock)", other).into()),
    }
}

// ============================================================================
// submit subcommand
// ============================================================================

/// Drive one contact-form submission end to end and return whether the
/// confirmation message appeared.
pub fn cmd_submit(
    endpoint: &str,
    values: &[(&str, &str)],
    transport_name: &str,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let document = contact_page(endpoint);
    let bus = EventBus::new();
    let scheduler = Scheduler::new();
    let transport = build_transport(transport_name)?;

    let bindings = bind_page(&document, &bus, &scheduler, transport)?;

    // Open the dialog the way a user would, through an opener.
    let opener = document
        .first_with_attr(MODAL_OPEN_ATTR, CONTACT_MODAL_NAME)
        .ok_or("Contact page has no modal opener")?;
    bus.dispatch(&Event::click(&opener));

    // Fill the form fields.
    let form = document
        .element_by_id(CONTACT_FORM_ID)
        .ok_or("Contact page has no contact form")?;
    for field in named_fields(&form) {
        let name = field.borrow().field_name().unwrap_or_default().to_string();
        if let Some((_, value)) = values.iter().find(|(n, _)| *n == name) {
            field.borrow_mut().set_value(value);
        }
    }

    if verbose > 0 {
        eprintln!(
            "Submitting to {} via {} transport...",
            endpoint, transport_name
        );
    }

    bus.dispatch(&Event::submit(&form));
    scheduler.run_until_idle();

    let status = document
        .element_by_id(CONTACT_HINT_ID)
        .map(|hint| hint.borrow().text_content().to_string())
        .unwrap_or_default();

    println!("{}", status);

    let confirmed = status == CONFIRMATION_MESSAGE && !bindings.dialog.is_open();
    if verbose > 0 {
        eprintln!(
            "Dialog open: {}, submission confirmed: {}",
            bindings.dialog.is_open(),
            confirmed
        );
    }

    Ok(confirmed)
}

// ============================================================================
// smoke subcommand
// ============================================================================

/// Walk the non-network interactions and print each state transition.
pub fn cmd_smoke(verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let document = contact_page("mock://contact");
    let bus = EventBus::new();
    let scheduler = Scheduler::new();

    let bindings = bind_page(&document, &bus, &scheduler, Rc::new(MockTransport::new()))?;

    if verbose > 0 {
        eprintln!("Bound {} listeners", bindings.subscription_count());
    }

    let opener = document
        .first_with_attr(MODAL_OPEN_ATTR, CONTACT_MODAL_NAME)
        .ok_or("Contact page has no modal opener")?;
    bus.dispatch(&Event::click(&opener));
    println!(
        "Dialog opened: open={}, scroll_locked={}",
        bindings.dialog.is_open(),
        document.scroll_locked()
    );

    bus.dispatch(&Event::keydown("Escape"));
    println!(
        "Escape pressed: open={}, scroll_locked={}",
        bindings.dialog.is_open(),
        document.scroll_locked()
    );

    for (i, item) in document
        .elements_with_class(ACCORDION_ITEM_CLASS)
        .iter()
        .enumerate()
    {
        if let Some(head) = descendant_with_class(item, ACCORDION_HEAD_CLASS) {
            bus.dispatch(&Event::click(&head));
            println!(
                "Accordion item {} toggled: open={}",
                i,
                item.borrow().has_class(OPEN_CLASS)
            );
        }
    }

    if let Some(right) = document.first_with_attr(SLIDER_RIGHT_ATTR, PARTNERS_SLIDER_NAME) {
        bus.dispatch(&Event::click(&right));
        let offset = document
            .first_with_attr(SLIDER_TRACK_ATTR, PARTNERS_SLIDER_NAME)
            .map(|track| track.borrow().scroll_left())
            .unwrap_or(0.0);
        println!("Slider scrolled right: offset={}", offset);
    }

    Ok(())
}
