//! UI Components - business-specific composite components
//!
//! Components combine widgets and basic iced elements with application
//! state and messages. They are the only UI layer that imports from
//! `crate::app`.

pub mod add_book_bar;
pub mod book_table;
pub mod edit_dialog;
pub mod header;
