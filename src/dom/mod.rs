pub mod document;
pub mod element;
pub mod selectors;
