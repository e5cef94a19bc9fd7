//! Hexmesh command-line driver.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: surface.obj → output.vtk, loft with 10 layers
//! hexmesh-cli
//!
//! # Settings from a JSON file (missing keys take their defaults)
//! RUST_LOG=debug hexmesh-cli meshing.json
//! ```

use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

use hexmesh::{HexMeshError, MeshingConfig};
use log::{error, info};

fn load_config(path: &Path) -> Result<MeshingConfig, Box<dyn Error>> {
    let text = std::fs::read_to_string(path).map_err(|e| HexMeshError::io(path, e))?;
    let config = serde_json::from_str(&text)?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                error!("Invalid configuration: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => MeshingConfig::default(),
    };

    match hexmesh::run(&config) {
        Ok(summary) => {
            info!(
                "Done: {} hexahedra, {} vertices",
                summary.hexes, summary.vertices
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
