// ============================================================================
// Basic Usage Example
// ============================================================================

use bounded_box::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Bounded Box Example ===\n");

    // Floating-point boxes
    let mut box1 = NumberBox::new();
    box1.set_value(5.0);
    let mut box2 = NumberBox::new();
    box2.set_value(8.0);
    println!("average(5.0, 8.0) = {}", box1.average(&box2)?);

    // Integer boxes: the mean is not truncated
    let ints = (NumberBox::with_value(2i32), NumberBox::with_value(4i32));
    println!("average(2, 4)     = {}", ints.0.average(&ints.1)?);
    let odd = (NumberBox::with_value(1u8), NumberBox::with_value(2u8));
    println!("average(1u8, 2u8) = {}", odd.0.average(&odd.1)?);

    // Arbitrary-precision decimals
    let price_a = NumberBox::with_value(Decimal::new(10025, 2)); // 100.25
    let price_b = NumberBox::with_value(Decimal::new(9975, 2)); // 99.75
    println!("average(100.25, 99.75) = {}", price_a.average(&price_b)?);

    // Many boxes at once
    let readings: Vec<NumberBox<i64>> = [3, 5, 7, 9].into_iter().map(NumberBox::from).collect();
    println!("mean_of([3, 5, 7, 9]) = {}", NumberBox::mean_of(&readings)?);

    // An empty box is an explicit error
    println!("\n=== Empty Box ===");
    let empty: NumberBox<f64> = NumberBox::new();
    match box1.average(&empty) {
        Ok(avg) => println!("unexpected average: {}", avg),
        Err(err) => println!("average with empty box: {}", err),
    }

    // Strict policy rejects NaN and infinities
    println!("\n=== Strict Policy ===");
    let nan = NumberBox::with_value(f64::NAN);
    println!("IEEE:   {:?}", box1.average(&nan));
    println!("Strict: {:?}", box1.average_with(&nan, &AverageConfig::strict()));

    // Unbounded boxes store anything but cannot average
    println!("\n=== Generic Box ===");
    let mut label = GenericBox::new();
    for fabric in ["hemp", "linen", "nylon"] {
        label.set_value(fabric);
        println!("label = {:?}", label.value());
    }
    let promoted = label.map(|s| s.len()).into_numeric();
    println!("len(label) as number box: {:?}", promoted.get_value());

    Ok(())
}
