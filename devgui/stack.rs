//! Stack element.
//!
//! The [`Stack`] element arranges children in a row or column, with a spacing level in-between, and can
//! be configured to use the full height available. Each property has a change event.
//!
//! ```
//! use devgui::prelude::*;
//!
//! let s = stack_id("s1").vertical();
//! let view = s.view();
//!
//! let mut count = 0;
//! let (tx, rx) = std::sync::mpsc::channel();
//! let _h = view.orientation_changed().subscribe(move |_| tx.send(()).unwrap());
//!
//! let s = s.vertical().horizontal();
//! while rx.try_recv().is_ok() {
//!     count += 1;
//! }
//! assert_eq!(1, count);
//! # drop(s);
//! ```
//!
//! # Full API
//!
//! See [`devgui_wgt_stack`] for the full API.

pub use devgui_wgt_stack::{Orientation, Spacing, Stack, StackBuilder};
