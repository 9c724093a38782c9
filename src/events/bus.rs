use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::dom::element::ElementRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Keydown,
    Submit,
}

/// A dispatched page event. `default_prevented` mirrors the browser flag:
/// the dispatcher reads it back to learn whether the native action (form
/// navigation, link follow) would have fired.
pub struct Event {
    pub kind: EventKind,
    pub target: Option<ElementRef>,
    pub key: Option<String>,
    default_prevented: Cell<bool>,
}

impl Event {
    pub fn click(target: &ElementRef) -> Self {
        Event {
            kind: EventKind::Click,
            target: Some(Rc::clone(target)),
            key: None,
            default_prevented: Cell::new(false),
        }
    }

    pub fn keydown(key: &str) -> Self {
        Event {
            kind: EventKind::Keydown,
            target: None,
            key: Some(key.to_string()),
            default_prevented: Cell::new(false),
        }
    }

    pub fn submit(form: &ElementRef) -> Self {
        Event {
            kind: EventKind::Submit,
            target: Some(Rc::clone(form)),
            key: None,
            default_prevented: Cell::new(false),
        }
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

enum Binding {
    /// Listener bound to a specific element (click, submit).
    Element(ElementRef),
    /// Document-level listener (keydown).
    Document,
}

type Handler = Rc<RefCell<dyn FnMut(&Event)>>;

struct Listener {
    id: u64,
    kind: EventKind,
    binding: Binding,
    handler: Handler,
}

struct BusInner {
    listeners: RefCell<Vec<Listener>>,
    next_id: Cell<u64>,
}

/// Single-threaded listener registry, cheap to clone (all clones share the
/// same registry). Handlers may attach or detach other listeners while a
/// dispatch is running; the matching set is snapshotted before any handler
/// fires.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<BusInner>,
}

impl EventBus {
    pub fn new() -> Self {
        EventBus {
            inner: Rc::new(BusInner {
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn on_click(
        &self,
        target: &ElementRef,
        handler: impl FnMut(&Event) + 'static,
    ) -> Subscription {
        self.attach(EventKind::Click, Binding::Element(Rc::clone(target)), handler)
    }

    pub fn on_keydown(&self, handler: impl FnMut(&Event) + 'static) -> Subscription {
        self.attach(EventKind::Keydown, Binding::Document, handler)
    }

    pub fn on_submit(
        &self,
        form: &ElementRef,
        handler: impl FnMut(&Event) + 'static,
    ) -> Subscription {
        self.attach(EventKind::Submit, Binding::Element(Rc::clone(form)), handler)
    }

    fn attach(
        &self,
        kind: EventKind,
        binding: Binding,
        handler: impl FnMut(&Event) + 'static,
    ) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        self.inner.listeners.borrow_mut().push(Listener {
            id,
            kind,
            binding,
            handler: Rc::new(RefCell::new(handler)),
        });

        Subscription {
            bus: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver an event to every matching listener in attach order.
    pub fn dispatch(&self, event: &Event) {
        let matching: Vec<Handler> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter(|l| l.kind == event.kind && binding_matches(&l.binding, event))
            .map(|l| Rc::clone(&l.handler))
            .collect();

        for handler in matching {
            (handler.borrow_mut())(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

fn binding_matches(binding: &Binding, event: &Event) -> bool {
    match binding {
        Binding::Document => true,
        Binding::Element(el) => event
            .target
            .as_ref()
            .is_some_and(|target| Rc::ptr_eq(el, target)),
    }
}

/// Handle to one registered listener. Dropping the subscription keeps the
/// listener attached; teardown is explicit via `detach`.
pub struct Subscription {
    bus: Weak<BusInner>,
    id: u64,
}

impl Subscription {
    pub fn detach(self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.listeners.borrow_mut().retain(|l| l.id != self.id);
        }
    }
}
