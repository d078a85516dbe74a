//! country-picker-rs: umbrella crate for the demos.
//!
//! Re-exports [`country_picker_core`] so `use country_picker_rs::prelude::*`
//! works the same as depending on the core crate directly.

pub use country_picker_core::*;
