//! Basic example: plan a closed tour over a few cities and print the result.

use std::time::Duration;
use tsp_ls::problem::Coordinate;
use tsp_ls::{solve_with_config, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // (name, latitude, longitude)
    let cities = [
        ("Berlin", 52.520, 13.405),
        ("Hamburg", 53.551, 9.994),
        ("Munich", 48.137, 11.575),
        ("Cologne", 50.938, 6.960),
        ("Frankfurt", 50.110, 8.682),
        ("Stuttgart", 48.776, 9.182),
        ("Leipzig", 51.340, 12.375),
    ];
    let coordinates: Vec<Coordinate> = cities
        .iter()
        .map(|&(_, latitude, longitude)| Coordinate::new(latitude, longitude))
        .collect();

    let config = Config::new()
        .with_multi_start(3)
        .with_time_limit(Duration::from_secs(5));

    let result = solve_with_config(&coordinates, config)?;

    println!("Visit order:");
    for (stop, &node) in result.tour.nodes.iter().enumerate() {
        println!("  {}. {}", stop + 1, cities[node].0);
    }
    println!("Total length: {:.1} km", result.total_length);
    println!(
        "Local optimum: {} ({} sweeps, {:?})",
        result.is_local_optimum(),
        result.iterations,
        result.run_time
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
