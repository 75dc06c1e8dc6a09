//!
//! Base element contract, shared element references and lazy child enumeration.
//!
//! # Crate
//!
#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

mod element;
pub use element::*;

mod children;
pub use children::*;
