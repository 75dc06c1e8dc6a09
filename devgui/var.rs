//! Observable properties and events.
//!
//! Every element property is a [`Property<T>`] that only records a change when the new value is not equal to the current
//! value, each change notifies an [`Event<A>`]. Subscribers hold an [`EventHandle`], dropping the handle ends the subscription.
//!
//! ```
//! use devgui::var::*;
//!
//! let value = Property::new(1);
//! let changed = Event::<&str>::new();
//! let handle = changed.subscribe(|sender: &&str| tracing::info!("{sender} changed"));
//!
//! assert!(value.set(2, &changed, &"value"));
//! assert!(!value.set(2, &changed, &"value"));
//! assert_eq!(1, changed.subscriber_count());
//!
//! drop(handle);
//! assert_eq!(0, changed.subscriber_count());
//! ```
//!
//! # Full API
//!
//! See [`devgui_var`] for the full API.

pub use devgui_var::{
    ArcEq, Event, EventHandle, EventHandles, EventSubscriber, Property, PropertyValue,
};
