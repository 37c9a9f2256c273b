//! Computes the hull of random integer points and prints its boundary edges.
//!
//! Run with `cargo run --example random_points -- [count]`, and set `RUST_LOG=trace`
//! to follow the recursion.

use quickhull2d::{ConvexHull2d, Point};
use rand::Rng;

const DEFAULT_COUNT: usize = 25;
const MIN_COORD: i32 = 0;
const MAX_COORD: i32 = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let count = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_COUNT,
    };

    let mut rng = rand::rng();
    let points: Vec<Point> = (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(MIN_COORD..MAX_COORD) as f64,
                rng.random_range(MIN_COORD..MAX_COORD) as f64,
            )
        })
        .collect();

    let hull = ConvexHull2d::try_from_points(&points)?;

    println!("========================================");
    println!("======          OUTER LINE          ====");
    println!("========================================");
    for edge in &hull {
        println!("{edge}");
    }
    println!(
        "{} points, {} boundary edges, {} hull vertices",
        points.len(),
        hull.len(),
        hull.vertices().len()
    );

    Ok(())
}
