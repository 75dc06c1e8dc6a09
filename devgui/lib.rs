#![doc = include_str!("../README.md")]
//!
//! Declarative UI element model.
//!
//! Elements are created and configured by builder functions, the builder is the only way to change an
//! element, the rest of the app sees a read-only handle that exposes the current state and one change event for
//! each property. Renderers subscribe to the events and update on each change, without polling.
//!
//! ```
//! use devgui::prelude::*;
//!
//! let header = stack_id("header").no_spacing().into_view();
//! let body = stack_id("body").vertical().with_children([header.clone()]).use_max_height();
//!
//! let view = body.view();
//! let _handle = view.orientation_changed().subscribe(|s: &Stack| {
//!     tracing::info!("{:?} is now {}", s.id(), s.orientation());
//! });
//!
//! let body = body.horizontal();
//! assert_eq!(Orientation::Horizontal, view.orientation());
//! assert_eq!(vec![header.into_element()], view.enumerate_children().collect::<Vec<_>>());
//! # drop(body);
//! ```
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

pub mod element;
pub mod gui;
pub mod stack;
pub mod var;

/// Types for general element use.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::__prelude::*;
}
mod __prelude {
    pub use crate::{
        element::{ChildList, Element, ElementHandle, ElementRef},
        gui::{stack, stack_id},
        stack::{Orientation, Spacing, Stack, StackBuilder},
        var::{EventHandle, EventHandles},
    };
}
