use std::rc::Rc;

use crate::dom::document::Document;
use crate::dom::element::ElementRef;
use crate::dom::selectors::{
    PARTNERS_SLIDER_NAME, SLIDER_LEFT_ATTR, SLIDER_RIGHT_ATTR, SLIDER_TRACK_ATTR,
};
use crate::events::bus::{EventBus, Subscription};

/// Scroll step per control activation, in track units.
pub const SCROLL_STEP: f64 = 320.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    fn sign(self) -> f64 {
        match self {
            ScrollDirection::Left => -1.0,
            ScrollDirection::Right => 1.0,
        }
    }
}

/// Smooth-scrolls the partners track by a fixed step. The track is optional:
/// with no track every activation is a no-op rather than an error.
pub struct HorizontalSlider {
    track: Option<ElementRef>,
}

impl HorizontalSlider {
    pub fn new(track: Option<ElementRef>) -> Rc<Self> {
        Rc::new(HorizontalSlider { track })
    }

    pub fn scroll(&self, direction: ScrollDirection) {
        let Some(track) = &self.track else {
            return;
        };
        track.borrow_mut().scroll_by(direction.sign() * SCROLL_STEP);
    }
}

/// Wire the partners slider: track by `data-slider-track`, directional
/// controls by `data-slider-left` / `data-slider-right`. Each control is
/// independently optional.
pub fn bind_slider(document: &Document, bus: &EventBus) -> Vec<Subscription> {
    let track = document.first_with_attr(SLIDER_TRACK_ATTR, PARTNERS_SLIDER_NAME);
    let slider = HorizontalSlider::new(track);

    let mut subscriptions = Vec::new();

    if let Some(left) = document.first_with_attr(SLIDER_LEFT_ATTR, PARTNERS_SLIDER_NAME) {
        let slider = Rc::clone(&slider);
        subscriptions.push(bus.on_click(&left, move |_event| {
            slider.scroll(ScrollDirection::Left);
        }));
    }

    if let Some(right) = document.first_with_attr(SLIDER_RIGHT_ATTR, PARTNERS_SLIDER_NAME) {
        let slider = Rc::clone(&slider);
        subscriptions.push(bus.on_click(&right, move |_event| {
            slider.scroll(ScrollDirection::Right);
        }));
    }

    subscriptions
}
