//! Typed temperature data.
//!
//! Wrappers that keep the unit attached to a reading.

pub mod temperature;

pub use temperature::{Celsius, Fahrenheit};
