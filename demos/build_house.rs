//! Builds a small stone house: a 5x5 floor, 4-block-high walls and an
//! overhanging 7x7 roof.
//!
//! The API key is resolved through the standard chain; point the client at
//! a local server running the Scripty plugin and run:
//!
//! ```bash
//! RUST_LOG=debug cargo run --example build_house
//! ```

use anyhow::Result;
use env_logger::Env;
use log::info;

use scriptymc::{Dimensions, Position, ScriptyClient};

fn main() -> Result<()> {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    let client = ScriptyClient::new()?;
    let start = Position::new(100.0, 64.0, 100.0);

    client.build_structure("floor", &start, &Dimensions::new().width(5).length(5))?;
    client.build_structure(
        "walls",
        &start,
        &Dimensions::new().width(5).length(5).height(4),
    )?;

    // Roof one block wider on every side, on top of the walls
    let roof = Position::new(start.x - 1.0, start.y + 4.0, start.z - 1.0);
    client.build_structure("roof", &roof, &Dimensions::new().width(7).length(7))?;

    info!("House built successfully!");
    Ok(())
}
