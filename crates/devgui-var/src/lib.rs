//!
//! Observable properties and synchronous multicast events.
//!
//! # Crate
//!
#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

mod property_value;
pub use property_value::*;

mod property;
pub use property::*;

mod event;
pub use event::*;
