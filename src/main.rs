use macroquad::prelude::*;
use toroidal_life::{Simulation, SimulationConfig, rendering};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 800,
        window_height: 600,
        // Grid size is fixed at startup
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let simulation = SimulationConfig::from_env(screen_width() as u32, screen_height() as u32)
        .and_then(|config| Simulation::initialize(&config));
    let mut simulation = match simulation {
        Ok(simulation) => simulation,
        Err(err) => {
            tracing::error!(%err, "failed to start simulation");
            return;
        }
    };

    loop {
        clear_background(BLACK);
        rendering::draw_grid(simulation.grid(), simulation.resolution());

        simulation.advance();

        next_frame().await;
    }
}
