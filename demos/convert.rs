//! Command-line Fahrenheit to Celsius conversion example
//!
//! Run with: cargo run --example convert -- 32 212 "98.6°F"

use temperature_converter::{Converter, Fahrenheit, FahrenheitToCelsius, Result};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("temperature_converter=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        println!("Usage: convert <fahrenheit>...");
        println!("Example: convert 32 212 98.6F");
        return Ok(());
    }

    println!("Fahrenheit to Celsius");
    println!("=====================\n");

    let converter = FahrenheitToCelsius::new();
    let mut first_error = None;

    for arg in &args {
        match arg.parse::<Fahrenheit>() {
            Ok(reading) => {
                let celsius = converter.convert(reading.value());
                println!("{:>10.1}°F = {:>8.2}°C", reading.value(), celsius);
            }
            Err(e) => {
                eprintln!("{:>10}   : {}", arg, e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
