use anyhow::Result;
use glam::{Mat4, Vec2, Vec3};
use tracing::info;

use crate::config::TerrainSettings;
use crate::heightfield::HeightmapImage;
use crate::mesh::{build_grid, GridDescriptor, TerrainMesh};

/// One independently generated terrain grid, placed in the world by the
/// mosaic builder.
pub struct TerrainPatch {
    pub mesh: TerrainMesh,
    pub heightmap: HeightmapImage,
    /// Phase offset of this patch's height field, in grid units.
    pub offset: Vec2,
    pub world_matrix: Mat4,
}

/// Builds the full patch mosaic described by `settings`.
///
/// Patch (a, b) samples the shared fractal at a phase offset of (a, b) grid
/// units and is translated by the same amount in world units, so elevations
/// line up across patch seams.
pub fn build_mosaic(settings: &TerrainSettings) -> Result<Vec<TerrainPatch>> {
    let descriptor = GridDescriptor::new(settings.grid.columns, settings.grid.rows)?;
    let count = settings.mosaic.patches_x as usize * settings.mosaic.patches_z as usize;
    let mut patches = Vec::with_capacity(count);

    for b in 0..settings.mosaic.patches_z {
        for a in 0..settings.mosaic.patches_x {
            let offset = Vec2::new(a as f32, b as f32);
            let elevation = settings.noise.elevation().with_offset(offset);

            let mesh = build_grid(&descriptor, Some(&elevation))?;
            let heightmap = HeightmapImage::from_source(
                settings.grid.columns,
                settings.grid.rows,
                &elevation,
            )?;

            let world_matrix = Mat4::from_translation(Vec3::new(
                a as f32 * settings.mosaic.patch_size,
                0.0,
                b as f32 * settings.mosaic.patch_size,
            )) * Mat4::from_scale(Vec3::splat(settings.mosaic.patch_size));

            patches.push(TerrainPatch {
                mesh,
                heightmap,
                offset,
                world_matrix,
            });
        }
    }

    info!(count = patches.len(), "terrain mosaic built");
    Ok(patches)
}
