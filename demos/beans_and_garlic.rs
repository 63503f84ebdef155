//! Beans and Garlic
//!
//! This example folds a small recipe into its full timeline.
//!
//! Key concepts:
//! - Steps are pure functions from one dish to the next
//! - The timeline keeps every intermediate dish
//! - Data-dependent steps read the dish they are applied to
//! - Failures abort the whole preparation with a typed error
//!
//! Run with: cargo run --example beans_and_garlic

use mise::core::WATER;
use mise::steps::{add, drain, fry, sit, soak, water_for};
use mise::{preparations, prepare, recipe};

fn main() {
    println!("=== Beans and Garlic ===\n");

    let beans = recipe!("beans and garlic" => [
        add("beans", 150.0),
        water_for("beans"),
        add("garlic", 5.0),
        sit(10.0),
        add("olive_oil", 5.0),
    ]);

    match preparations(&beans) {
        Ok(timeline) => {
            for (label, dish) in std::iter::once("start")
                .chain(beans.labels())
                .zip(timeline.iter())
            {
                println!("{label:>16}  {dish}");
            }
            println!("\nWater over time: {:?}", timeline.field_history(WATER));
        }
        Err(e) => println!("Preparation failed: {e}"),
    }

    println!("\n=== Soaked and fried ===\n");

    let soaked = recipe![
        add("beans", 100.0),
        water_for("beans"),
        soak("beans", 60.0),
        fry(5.0),
        drain(),
    ];
    match prepare(&soaked) {
        Ok(dish) => println!("Final dish: {dish}"),
        Err(e) => println!("Preparation failed: {e}"),
    }

    println!("\n=== Soaking too early ===\n");

    let broken = recipe![add("beans", 100.0), soak("beans", 60.0)];
    match prepare(&broken) {
        Ok(dish) => println!("Unexpected dish: {dish}"),
        Err(e) => println!("Preparation failed: {e} ({:?})", e.kind()),
    }

    println!("\n=== Example Complete ===");
}
