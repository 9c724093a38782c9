use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// Shared handle to a DOM node. Listener targets are compared by pointer
/// identity (`Rc::ptr_eq`), so clones of the same handle refer to the same
/// element.
pub type ElementRef = Rc<RefCell<Element>>;

/// A single DOM-like node: tag, optional id, class list, attributes
/// (including `data-*` and `aria-*`), an optional form-field name with a
/// current value, text content, a horizontal scroll offset, and children.
#[derive(Debug, Default)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
    name: Option<String>,
    value: String,
    text: String,
    scroll_left: f64,
    children: Vec<ElementRef>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            ..Element::default()
        }
    }

    // ------------------------------------------------------------------
    // Builder-style constructors (consume self, chainable)
    // ------------------------------------------------------------------

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Mark this element as a named form field.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn child(mut self, child: ElementRef) -> Self {
        self.children.push(child);
        self
    }

    pub fn into_ref(self) -> ElementRef {
        Rc::new(RefCell::new(self))
    }

    // ------------------------------------------------------------------
    // Accessors and mutators
    // ------------------------------------------------------------------

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    pub fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Toggle a class; returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    pub fn field_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    pub fn text_content(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// The environment's smooth-scroll primitive: shift the horizontal
    /// offset by `delta`, clamped at zero on the left edge.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_left = (self.scroll_left + delta).max(0.0);
    }

    pub fn children(&self) -> &[ElementRef] {
        &self.children
    }

    pub fn append_child(&mut self, child: ElementRef) {
        self.children.push(child);
    }
}

/// Visit every descendant of `el` (depth-first, document order), excluding
/// `el` itself.
pub fn for_each_descendant(el: &ElementRef, visit: &mut dyn FnMut(&ElementRef)) {
    let children: Vec<ElementRef> = el.borrow().children.to_vec();
    for child in &children {
        visit(child);
        for_each_descendant(child, visit);
    }
}

/// First descendant of `el` carrying the given class, document order.
pub fn descendant_with_class(el: &ElementRef, class: &str) -> Option<ElementRef> {
    let mut found = None;
    for_each_descendant(el, &mut |node| {
        if found.is_none() && node.borrow().has_class(class) {
            found = Some(Rc::clone(node));
        }
    });
    found
}

/// All descendants of `el` that are named form fields, document order.
pub fn named_fields(el: &ElementRef) -> Vec<ElementRef> {
    let mut fields = Vec::new();
    for_each_descendant(el, &mut |node| {
        if node.borrow().field_name().is_some() {
            fields.push(Rc::clone(node));
        }
    });
    fields
}
