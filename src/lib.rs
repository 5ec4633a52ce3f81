//! # temperature-converter
//!
//! Converts temperatures from degrees Fahrenheit to degrees Celsius using
//! `celsius = (fahrenheit - 32) * 5 / 9`.
//!
//! ## Features
//!
//! - **Plain conversion**: [`fahrenheit_to_celsius`] on raw `f64` values
//! - **Typed temperatures**: [`Fahrenheit`] and [`Celsius`] newtypes with
//!   parsing and display
//! - **Pluggable converters**: the [`Converter`] trait, for code that wants
//!   to accept any conversion strategy (or a mock)
//!
//! ## Quick Start
//!
//! ```rust
//! use temperature_converter::{fahrenheit_to_celsius, Fahrenheit, Result};
//!
//! fn main() -> Result<()> {
//!     assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
//!
//!     let reading: Fahrenheit = "86°F".parse()?;
//!     println!("{} is {}", reading, reading.to_celsius());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for temperature types

// Public modules
pub mod conversion;
pub mod data;
pub mod error;

// Re-exports for convenience
pub use conversion::{convert_all, fahrenheit_to_celsius, Converter, FahrenheitToCelsius};
pub use data::{Celsius, Fahrenheit};
pub use error::{Error, Result};
