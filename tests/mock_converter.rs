//! Mock-object tests for code that depends on the `Converter` capability.

use mockall::mock;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use temperature_converter::{convert_all, Converter};

mock! {
    pub Thermometer {}

    impl Converter for Thermometer {
        fn convert(&self, fahrenheit: f64) -> f64;
    }
}

/// Reports whether a Fahrenheit reading is at or below freezing.
fn is_freezing(converter: &dyn Converter, fahrenheit: f64) -> bool {
    converter.convert(fahrenheit) <= 0.0
}

#[test]
fn test_mock_returns_expected_value() {
    let mut mock = MockThermometer::new();
    mock.expect_convert().with(eq(32.0)).times(1).return_const(0.0);

    assert_eq!(mock.convert(32.0), 0.0);
}

#[test]
fn test_consumer_sees_mocked_values() {
    let mut mock = MockThermometer::new();
    mock.expect_convert().with(eq(50.0)).return_const(-3.0);

    assert!(is_freezing(&mock, 50.0));
}

#[test]
fn test_batch_conversion_calls_converter_in_order() {
    let mut seq = mockall::Sequence::new();
    let mut mock = MockThermometer::new();
    for (input, output) in [(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)] {
        mock.expect_convert()
            .with(eq(input))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(output);
    }

    assert_eq!(convert_all(&mock, &[1.0, 2.0, 3.0]), vec![10.0, 20.0, 30.0]);
}
