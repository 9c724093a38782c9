//! The canonical contact page structure, mirroring the production markup.
//! Used by the harness binary and by integration tests.

use std::rc::Rc;

use crate::dom::document::Document;
use crate::dom::element::Element;
use crate::dom::selectors::{
    ACCORDION_HEAD_CLASS, ACCORDION_ITEM_CLASS, CONTACT_FORM_ID, CONTACT_HINT_ID,
    CONTACT_MODAL_ID, CONTACT_MODAL_NAME, MODAL_CLOSE_ATTR, MODAL_OPEN_ATTR,
    PARTNERS_SLIDER_NAME, SLIDER_LEFT_ATTR, SLIDER_RIGHT_ATTR, SLIDER_TRACK_ATTR,
};

/// Build the contact page: header with a modal opener, the contact modal
/// (close button, form with the four contact fields, status area), an FAQ
/// accordion, and the partners slider.
pub fn contact_page(endpoint: &str) -> Rc<Document> {
    let document = Document::new();

    document.append(
        Element::new("header")
            .child(
                Element::new("button")
                    .attr(MODAL_OPEN_ATTR, CONTACT_MODAL_NAME)
                    .text("Contact us")
                    .into_ref(),
            )
            .into_ref(),
    );

    document.append(
        Element::new("div")
            .id(CONTACT_MODAL_ID)
            .class("modal")
            .attr("aria-hidden", "true")
            .child(
                Element::new("button")
                    .attr(MODAL_CLOSE_ATTR, CONTACT_MODAL_NAME)
                    .text("Close")
                    .into_ref(),
            )
            .child(
                Element::new("form")
                    .id(CONTACT_FORM_ID)
                    .attr("action", endpoint)
                    .child(Element::new("input").name("full_name").into_ref())
                    .child(
                        Element::new("input")
                            .name("email")
                            .attr("type", "email")
                            .into_ref(),
                    )
                    .child(
                        Element::new("input")
                            .name("phone")
                            .attr("type", "tel")
                            .into_ref(),
                    )
                    .child(Element::new("textarea").name("message").into_ref())
                    .into_ref(),
            )
            .child(Element::new("p").id(CONTACT_HINT_ID).into_ref())
            .into_ref(),
    );

    document.append(faq_item(
        "How fast do you reply?",
        "Within one business day.",
    ));
    document.append(faq_item(
        "Do you work with small teams?",
        "Yes, from a single founder up.",
    ));

    document.append(
        Element::new("section")
            .child(
                Element::new("button")
                    .attr(SLIDER_LEFT_ATTR, PARTNERS_SLIDER_NAME)
                    .into_ref(),
            )
            .child(
                Element::new("div")
                    .attr(SLIDER_TRACK_ATTR, PARTNERS_SLIDER_NAME)
                    .into_ref(),
            )
            .child(
                Element::new("button")
                    .attr(SLIDER_RIGHT_ATTR, PARTNERS_SLIDER_NAME)
                    .into_ref(),
            )
            .into_ref(),
    );

    document
}

fn faq_item(question: &str, answer: &str) -> crate::dom::element::ElementRef {
    Element::new("div")
        .class(ACCORDION_ITEM_CLASS)
        .child(
            Element::new("button")
                .class(ACCORDION_HEAD_CLASS)
                .text(question)
                .into_ref(),
        )
        .child(Element::new("div").class("acc__body").text(answer).into_ref())
        .into_ref()
}
