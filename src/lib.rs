//! Client-side interaction layer for a contact page: modal dialog, FAQ
//! accordion, partner slider, and an asynchronous contact-form submission
//! flow, modelled over an explicit DOM-like document, event bus, scheduler
//! and transport so the whole page can be wired and driven from tests.

pub mod accordion;
pub mod cli;
pub mod dialog;
pub mod dom;
pub mod events;
pub mod form;
pub mod net;
pub mod page;
pub mod runtime;
pub mod slider;

pub use page::bindings::{PageBindings, bind_page};
pub use page::error::PageError;
