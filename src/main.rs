use std::path::Path;

use anyhow::Result;
use tracing::info;

use terramesh::utils::logging::init_logging;
use terramesh::{build_mosaic, TerrainSettings, APP_NAME, VERSION};

fn main() -> Result<()> {
    init_logging();
    info!("{APP_NAME} {VERSION}");

    let settings = match std::env::args().nth(1) {
        Some(path) => TerrainSettings::load(Path::new(&path))?,
        None => TerrainSettings::default(),
    };

    let patches = build_mosaic(&settings)?;
    for patch in &patches {
        let (min, max) = patch.heightmap.min_max();
        info!(
            vertices = patch.mesh.vertices.len(),
            indices = patch.mesh.indices.len(),
            "patch ({}, {}) elevation range [{:.3}, {:.3}]",
            patch.offset.x,
            patch.offset.y,
            min,
            max,
        );
    }

    Ok(())
}
