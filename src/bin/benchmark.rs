//! Compares a freshly allocated grid per generation against the
//! double-buffered `Simulation::advance`.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use toroidal_life::{Grid, Simulation, step};

fn random_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size).expect("benchmark sizes are positive");
    grid.seed_random(&mut StdRng::seed_from_u64(size as u64));
    grid
}

fn benchmark_allocating(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_double_buffered(size: usize, iterations: u32) -> f64 {
    let mut simulation =
        Simulation::from_grid(random_grid(size), 1).expect("resolution is positive");

    let start = Instant::now();
    for _ in 0..iterations {
        simulation.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [40, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>14} {:>14} {:>10}", "Size", "Allocating", "Ping-pong", "Ratio");
    println!("{:-<52}", "");

    for size in sizes {
        let allocating_ms = benchmark_allocating(size, iterations);
        let buffered_ms = benchmark_double_buffered(size, iterations);
        let ratio = if buffered_ms > 0.0 { allocating_ms / buffered_ms } else { 0.0 };

        println!(
            "{:>10} {:>12.3}ms {:>12.3}ms {:>9.2}x",
            format!("{size}x{size}"),
            allocating_ms,
            buffered_ms,
            ratio
        );
    }
}
