use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::dom::element::{ElementRef, for_each_descendant};

/// A flat-rooted document: a list of root elements plus the page-level
/// scroll lock (the stand-in for `body.style.overflow = "hidden"`).
///
/// Single-threaded by construction; all mutation happens on the event-loop
/// thread through interior mutability.
pub struct Document {
    roots: RefCell<Vec<ElementRef>>,
    scroll_locked: Cell<bool>,
}

impl Document {
    pub fn new() -> Rc<Self> {
        Rc::new(Document {
            roots: RefCell::new(Vec::new()),
            scroll_locked: Cell::new(false),
        })
    }

    pub fn append(&self, root: ElementRef) {
        self.roots.borrow_mut().push(root);
    }

    /// Visit every element in the document, depth-first, document order.
    pub fn for_each(&self, visit: &mut dyn FnMut(&ElementRef)) {
        let roots: Vec<ElementRef> = self.roots.borrow().to_vec();
        for root in &roots {
            visit(root);
            for_each_descendant(root, visit);
        }
    }

    pub fn element_by_id(&self, id: &str) -> Option<ElementRef> {
        let mut found = None;
        self.for_each(&mut |el| {
            if found.is_none() && el.borrow().element_id() == Some(id) {
                found = Some(Rc::clone(el));
            }
        });
        found
    }

    pub fn elements_with_class(&self, class: &str) -> Vec<ElementRef> {
        let mut matches = Vec::new();
        self.for_each(&mut |el| {
            if el.borrow().has_class(class) {
                matches.push(Rc::clone(el));
            }
        });
        matches
    }

    /// All elements whose attribute `name` equals `value`
    /// (e.g. `data-modal-open="contact"`).
    pub fn elements_with_attr(&self, name: &str, value: &str) -> Vec<ElementRef> {
        let mut matches = Vec::new();
        self.for_each(&mut |el| {
            if el.borrow().attribute(name) == Some(value) {
                matches.push(Rc::clone(el));
            }
        });
        matches
    }

    pub fn first_with_attr(&self, name: &str, value: &str) -> Option<ElementRef> {
        self.elements_with_attr(name, value).into_iter().next()
    }

    // ------------------------------------------------------------------
    // Page scroll lock
    // ------------------------------------------------------------------

    pub fn lock_scroll(&self) {
        self.scroll_locked.set(true);
    }

    pub fn unlock_scroll(&self) {
        self.scroll_locked.set(false);
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked.get()
    }
}
