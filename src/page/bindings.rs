use std::rc::Rc;

use crate::accordion::group::bind_accordion;
use crate::dialog::controller::DialogController;
use crate::dom::document::Document;
use crate::dom::selectors::{
    CONTACT_FORM_ID, CONTACT_HINT_ID, CONTACT_MODAL_ID, CONTACT_MODAL_NAME, MODAL_CLOSE_ATTR,
    MODAL_OPEN_ATTR,
};
use crate::events::bus::{EventBus, Subscription};
use crate::form::submit::FormSubmitter;
use crate::net::transport::Transport;
use crate::page::error::PageError;
use crate::runtime::scheduler::Scheduler;
use crate::slider::track::bind_slider;

/// Everything `bind_page` wired: the dialog controller, the form submitter
/// when the form exists, and every listener registration for teardown.
pub struct PageBindings {
    pub dialog: Rc<DialogController>,
    pub submitter: Option<Rc<FormSubmitter>>,
    subscriptions: Vec<Subscription>,
}

impl PageBindings {
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Detach every listener this binding registered. After this, dispatched
    /// events reach none of the page's handlers.
    pub fn detach_all(self) {
        for subscription in self.subscriptions {
            subscription.detach();
        }
    }
}

/// Wire the whole page against explicit environment references. Called once
/// from the entry point, and from tests with mock elements and transports.
///
/// The dialog container is required. The form, its status area, the slider
/// track, and each slider control are optional, and so are accordion items.
pub fn bind_page(
    document: &Rc<Document>,
    bus: &EventBus,
    scheduler: &Rc<Scheduler>,
    transport: Rc<dyn Transport>,
) -> Result<PageBindings, PageError> {
    let dialog_el =
        document
            .element_by_id(CONTACT_MODAL_ID)
            .ok_or_else(|| PageError::MissingElement {
                id: CONTACT_MODAL_ID.to_string(),
            })?;
    let dialog = DialogController::new(dialog_el, Rc::clone(document));

    let mut subscriptions = Vec::new();

    // Dialog openers and closers; all bind the same open/close pair.
    for opener in document.elements_with_attr(MODAL_OPEN_ATTR, CONTACT_MODAL_NAME) {
        let dialog = Rc::clone(&dialog);
        subscriptions.push(bus.on_click(&opener, move |event| {
            event.prevent_default();
            dialog.open();
        }));
    }
    for closer in document.elements_with_attr(MODAL_CLOSE_ATTR, CONTACT_MODAL_NAME) {
        let dialog = Rc::clone(&dialog);
        subscriptions.push(bus.on_click(&closer, move |event| {
            event.prevent_default();
            dialog.close();
        }));
    }

    // Escape closes the dialog only while it is open.
    {
        let dialog = Rc::clone(&dialog);
        subscriptions.push(bus.on_keydown(move |event| {
            if event.key.as_deref() == Some("Escape") {
                dialog.handle_escape();
            }
        }));
    }

    subscriptions.extend(bind_accordion(document, bus));
    subscriptions.extend(bind_slider(document, bus));

    // Contact form; absent form means no submission wiring at all.
    let submitter = match document.element_by_id(CONTACT_FORM_ID) {
        Some(form) => {
            let hint = document.element_by_id(CONTACT_HINT_ID);
            let submitter = FormSubmitter::new(
                form,
                hint,
                transport,
                Rc::clone(scheduler),
                Rc::clone(&dialog),
            )?;
            subscriptions.push(FormSubmitter::bind(&submitter, bus));
            Some(submitter)
        }
        None => None,
    };

    Ok(PageBindings {
        dialog,
        submitter,
        subscriptions,
    })
}
