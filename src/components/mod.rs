//! Reusable screen components.
//!
//! `ListScreen` and `FormScreen` are the two generic screens every page is
//! built from; the rest are the smaller pieces they compose.

pub mod field_input;
pub mod form_screen;
pub mod line_editor;
pub mod list_screen;
pub mod pagination;
pub mod stat_card;
pub mod toast_host;
pub mod top_bar;
