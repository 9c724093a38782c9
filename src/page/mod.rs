pub mod bindings;
pub mod contact;
pub mod error;
