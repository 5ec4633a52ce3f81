//! Typed temperature values.
//!
//! [`Fahrenheit`] and [`Celsius`] wrap a plain `f64` so the unit travels
//! with the number. They add no range checks; any `f64` is accepted.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::conversion::fahrenheit_to_celsius;
use crate::error::{Error, Result};

/// A temperature in degrees Fahrenheit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Fahrenheit(pub f64);

impl Fahrenheit {
    /// Water freezes at this temperature.
    pub const FREEZING: Self = Self(32.0);

    /// Water boils at this temperature (at sea level).
    pub const BOILING: Self = Self(212.0);

    /// Create a new Fahrenheit temperature.
    pub fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Get the number of degrees.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Convert to Celsius.
    ///
    /// # Example
    ///
    /// ```
    /// use temperature_converter::Fahrenheit;
    ///
    /// assert_eq!(Fahrenheit(86.0).to_celsius().value(), 30.0);
    /// ```
    pub fn to_celsius(self) -> Celsius {
        Celsius(fahrenheit_to_celsius(self.0))
    }
}

/// A temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Celsius(pub f64);

impl Celsius {
    /// Create a new Celsius temperature.
    pub fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Get the number of degrees.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(fahrenheit: Fahrenheit) -> Self {
        fahrenheit.to_celsius()
    }
}

impl From<f64> for Fahrenheit {
    fn from(degrees: f64) -> Self {
        Self(degrees)
    }
}

impl From<Celsius> for f64 {
    fn from(celsius: Celsius) -> Self {
        celsius.0
    }
}

fn write_degrees(f: &mut fmt::Formatter<'_>, degrees: f64, unit: &str) -> fmt::Result {
    let precision = f.precision().unwrap_or(1);
    write!(f, "{:.*}°{}", precision, degrees, unit)
}

impl fmt::Display for Fahrenheit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_degrees(f, self.0, "F")
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_degrees(f, self.0, "C")
    }
}

const FAHRENHEIT_SUFFIXES: [&str; 4] = ["°F", "°f", "F", "f"];
const CELSIUS_SUFFIXES: [&str; 4] = ["°C", "°c", "C", "c"];

fn strip_unit<'a>(text: &'a str, suffixes: &[&'a str]) -> Option<(&'a str, &'a str)> {
    suffixes
        .iter()
        .find_map(|suffix| text.strip_suffix(suffix).map(|rest| (rest.trim_end(), *suffix)))
}

impl FromStr for Fahrenheit {
    type Err = Error;

    /// Parse a reading such as `"47"`, `"47F"` or `" 98.6 °F "`.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();

        // "inf" ends in 'f', so try the bare number first.
        if let Ok(degrees) = text.parse::<f64>() {
            return Ok(Self(degrees));
        }

        if let Some((number, _)) = strip_unit(text, &FAHRENHEIT_SUFFIXES) {
            if let Ok(degrees) = number.parse::<f64>() {
                return Ok(Self(degrees));
            }
        }

        if let Some((number, unit)) = strip_unit(text, &CELSIUS_SUFFIXES) {
            if number.parse::<f64>().is_ok() {
                debug!(input = s, unit, "Rejected temperature with non-Fahrenheit unit");
                return Err(Error::UnexpectedUnit {
                    unit: unit.to_string(),
                });
            }
        }

        debug!(input = s, "Failed to parse temperature");
        Err(Error::InvalidTemperature {
            input: s.to_string(),
        })
    }
}
