//! Reusable UI widgets - composable components without business logic
//!
//! Widgets must not depend on `crate::app` directly; they use generic
//! message types so components can reuse them.

mod toast;

pub use toast::{Toast, ToastStyle, view_toast};
