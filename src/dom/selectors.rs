//! Fixed selectors shared with the page templates. Renaming any of these
//! breaks the markup contract, so they live in one place.

/// Contact modal container id.
pub const CONTACT_MODAL_ID: &str = "modal-contact";

/// Attribute marking a dialog opener, e.g. `data-modal-open="contact"`.
pub const MODAL_OPEN_ATTR: &str = "data-modal-open";

/// Attribute marking a dialog closer.
pub const MODAL_CLOSE_ATTR: &str = "data-modal-close";

/// Value naming the contact modal in opener/closer attributes.
pub const CONTACT_MODAL_NAME: &str = "contact";

/// Accordion item class.
pub const ACCORDION_ITEM_CLASS: &str = "acc";

/// Clickable header inside an accordion item.
pub const ACCORDION_HEAD_CLASS: &str = "acc__head";

/// Attribute marking the slider track, e.g. `data-slider-track="partners"`.
pub const SLIDER_TRACK_ATTR: &str = "data-slider-track";

/// Attribute marking the scroll-left control.
pub const SLIDER_LEFT_ATTR: &str = "data-slider-left";

/// Attribute marking the scroll-right control.
pub const SLIDER_RIGHT_ATTR: &str = "data-slider-right";

/// Value naming the partners slider in track/control attributes.
pub const PARTNERS_SLIDER_NAME: &str = "partners";

/// Contact form id.
pub const CONTACT_FORM_ID: &str = "contactForm";

/// Status-text container id next to the contact form.
pub const CONTACT_HINT_ID: &str = "contactFormHint";
