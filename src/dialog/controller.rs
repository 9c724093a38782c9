use std::rc::Rc;

use crate::dom::document::Document;
use crate::dom::element::ElementRef;

/// Class carried by the dialog (and accordion items) while open.
pub const OPEN_CLASS: &str = "is-open";

const ARIA_HIDDEN: &str = "aria-hidden";

/// Toggles the contact modal. Visibility is tracked in three places that
/// must always agree: the `is-open` class, the `aria-hidden` attribute, and
/// the document scroll lock. `open` and `close` are the only writers.
pub struct DialogController {
    dialog: ElementRef,
    document: Rc<Document>,
}

impl DialogController {
    pub fn new(dialog: ElementRef, document: Rc<Document>) -> Rc<Self> {
        Rc::new(DialogController { dialog, document })
    }

    pub fn open(&self) {
        let mut dialog = self.dialog.borrow_mut();
        dialog.add_class(OPEN_CLASS);
        dialog.set_attribute(ARIA_HIDDEN, "false");
        self.document.lock_scroll();
    }

    pub fn close(&self) {
        let mut dialog = self.dialog.borrow_mut();
        dialog.remove_class(OPEN_CLASS);
        dialog.set_attribute(ARIA_HIDDEN, "true");
        self.document.unlock_scroll();
    }

    pub fn is_open(&self) -> bool {
        self.dialog.borrow().has_class(OPEN_CLASS)
    }

    /// Escape closes only while open; no state change otherwise.
    pub fn handle_escape(&self) {
        if self.is_open() {
            self.close();
        }
    }
}
