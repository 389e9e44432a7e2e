//! Core, DOM-free primitives for the component library.
pub mod classes;
pub mod overlay;
pub mod slot;
pub mod store;
pub mod variants;
