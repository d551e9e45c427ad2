//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`stores`, `toasts`, `theme`) so individual
//! components can depend on small focused models. Everything is provided
//! via context from the root `App` component.

pub mod stores;
pub mod theme;
pub mod toasts;
