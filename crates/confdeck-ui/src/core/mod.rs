//! Core, DOM-free primitives and helpers for the Web UI.
pub mod draft;
pub mod nav;
pub mod routing;
pub mod service;
pub mod view_state;
