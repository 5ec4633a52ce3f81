//! Fahrenheit to Celsius conversion.
//!
//! The free function [`fahrenheit_to_celsius`] is the whole arithmetic core.
//! [`Converter`] wraps it behind a trait so code that consumes conversions
//! can be handed a different implementation (or a mock in tests).

use tracing::trace;

/// Convert Fahrenheit to Celsius.
///
/// # Arguments
///
/// * `fahrenheit` - Temperature in degrees Fahrenheit
///
/// # Returns
///
/// Temperature in degrees Celsius
///
/// Non-finite input propagates per IEEE-754: NaN stays NaN and infinities
/// keep their sign.
///
/// # Example
///
/// ```
/// use temperature_converter::fahrenheit_to_celsius;
///
/// let celsius = fahrenheit_to_celsius(212.0);
/// assert!((celsius - 100.0).abs() < 0.001);
/// ```
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// A capability that turns a Fahrenheit reading into Celsius.
#[cfg_attr(test, mockall::automock)]
pub trait Converter: Send + Sync {
    /// Convert a temperature in degrees Fahrenheit to degrees Celsius.
    fn convert(&self, fahrenheit: f64) -> f64;
}

/// The standard [`Converter`], backed by [`fahrenheit_to_celsius`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FahrenheitToCelsius;

impl FahrenheitToCelsius {
    /// Create a new converter.
    pub fn new() -> Self {
        Self
    }
}

impl Converter for FahrenheitToCelsius {
    fn convert(&self, fahrenheit: f64) -> f64 {
        let celsius = fahrenheit_to_celsius(fahrenheit);
        trace!(fahrenheit, celsius, "Converted temperature");
        celsius
    }
}

/// Convert a batch of Fahrenheit readings, preserving their order.
///
/// # Example
///
/// ```
/// use temperature_converter::{convert_all, FahrenheitToCelsius};
///
/// let celsius = convert_all(&FahrenheitToCelsius, &[32.0, 212.0]);
/// assert_eq!(celsius, vec![0.0, 100.0]);
/// ```
pub fn convert_all<C: Converter + ?Sized>(converter: &C, readings: &[f64]) -> Vec<f64> {
    readings.iter().map(|&f| converter.convert(f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fahrenheit_to_celsius_fixed_points() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert!((fahrenheit_to_celsius(-40.0) - (-40.0)).abs() < 0.001);
    }

    #[test]
    fn test_fahrenheit_to_celsius_non_finite() {
        assert!(fahrenheit_to_celsius(f64::NAN).is_nan());
        assert_eq!(fahrenheit_to_celsius(f64::INFINITY), f64::INFINITY);
        assert_eq!(fahrenheit_to_celsius(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_converter_matches_free_function() {
        let converter = FahrenheitToCelsius::new();
        for f in [-459.67, 0.0, 47.0, 98.6, 451.0] {
            assert_eq!(converter.convert(f), fahrenheit_to_celsius(f));
        }
    }

    #[test]
    fn test_mock_converter_returns_configured_value() {
        let mut mock = MockConverter::new();
        mock.expect_convert().with(eq(32.0)).times(1).return_const(0.0);

        assert_eq!(mock.convert(32.0), 0.0);
    }

    #[test]
    fn test_convert_all_uses_given_converter() {
        let mut mock = MockConverter::new();
        mock.expect_convert()
            .times(3)
            .returning(|f| if f < 50.0 { -1.0 } else { 1.0 });

        let converted = convert_all(&mock, &[10.0, 60.0, 20.0]);
        assert_eq!(converted, vec![-1.0, 1.0, -1.0]);
    }

    #[test]
    fn test_convert_all_through_trait_object() {
        let converter: Box<dyn Converter> = Box::new(FahrenheitToCelsius);
        assert_eq!(convert_all(converter.as_ref(), &[]), Vec::<f64>::new());
        assert_eq!(convert_all(converter.as_ref(), &[86.0]), vec![30.0]);
    }
}
