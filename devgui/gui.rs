//! Element builder functions.
//!
//! The functions in this module create elements and return the builder of each element, the
//! builder is the only way to configure the element.

pub use devgui_wgt_stack::{stack, stack_id};
