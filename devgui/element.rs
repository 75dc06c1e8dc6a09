//! Element contract and child enumeration.
//!
//! An [`Element`] has an identifier set on creation and, if it is a container, a lazy enumeration of its
//! children. Elements are shared using [`ElementRef`], a container stores its children in a [`ChildList`].
//!
//! # Full API
//!
//! See [`devgui_element`] for the full API.

pub use devgui_element::{
    ChildList, Descendants, Element, ElementChildren, ElementHandle, ElementRef,
};
