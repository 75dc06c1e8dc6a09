//!
//! Stack element and builder.
//!
//! # Crate
//!
#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

mod types;
pub use types::*;

mod stack;
pub use stack::*;

mod builder;
pub use builder::*;
