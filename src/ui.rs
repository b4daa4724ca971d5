//! UI module for the book collection application
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): composable UI patterns without business logic
//! - **Components** (`components`): business-specific UI with Message handling
//! - **Theme** (`theme`): palette and style helpers for both color modes

pub mod components;
pub mod theme;
pub mod widgets;
