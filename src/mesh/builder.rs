use tracing::debug;

use super::{GridDescriptor, TerrainError, Vertex};
use crate::heightfield::ElevationSource;

/// Triangulated grid mesh, ready for upload to vertex/index buffers.
///
/// Built once per invocation and handed to the caller by value; regeneration
/// means rebuilding from scratch, never incremental mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Builds a triangulated plane over the descriptor's lattice.
///
/// Emits exactly `columns * rows` vertices in row-major order, position
/// `(i * sx, elevation, j * sy)` with texture coordinate `(i, j)`. Without an
/// elevation source the grid is flat with up normals; with one, the y
/// coordinate is displaced and normals follow the local slope. Interior quads
/// emit their two triangles in the same traversal, wound counter-clockwise
/// seen from +Y.
pub fn build_grid(
    descriptor: &GridDescriptor,
    elevation: Option<&dyn ElevationSource>,
) -> Result<TerrainMesh, TerrainError> {
    let columns = descriptor.columns();
    let rows = descriptor.rows();
    let (sx, sy) = descriptor.scale();

    // Heights are sampled up front so slope normals can reach the neighboring
    // lattice points while vertices are emitted below.
    let heights = match elevation {
        Some(source) => Some(sample_heights(descriptor, source)?),
        None => None,
    };

    let mut vertices = Vec::with_capacity(descriptor.vertex_count());
    let mut indices = Vec::with_capacity(descriptor.index_count());

    for j in 0..rows {
        for i in 0..columns {
            let y = match &heights {
                Some(h) => h[descriptor.index(i, j) as usize],
                None => 0.0,
            };
            let normal = match &heights {
                Some(h) => slope_normal(descriptor, h, i, j),
                None => [0.0, 1.0, 0.0],
            };
            vertices.push(Vertex {
                position: [i as f32 * sx, y, j as f32 * sy],
                normal,
                tex_coord: [i as f32, j as f32],
            });

            // Quad closed off by this vertex and the previous row/column.
            if i > 0 && j > 0 {
                let top_right = descriptor.index(i, j);
                let top_left = top_right - 1;
                let bottom_right = top_right - columns;
                let bottom_left = bottom_right - 1;

                indices.extend_from_slice(&[bottom_left, top_left, bottom_right]);
                indices.extend_from_slice(&[bottom_right, top_left, top_right]);
            }
        }
    }

    debug_assert_eq!(vertices.len(), descriptor.vertex_count());
    debug_assert_eq!(indices.len(), descriptor.index_count());

    debug!(
        columns,
        rows,
        vertices = vertices.len(),
        indices = indices.len(),
        "built terrain grid"
    );

    Ok(TerrainMesh { vertices, indices })
}

fn sample_heights(
    descriptor: &GridDescriptor,
    source: &dyn ElevationSource,
) -> Result<Vec<f32>, TerrainError> {
    let (sx, sy) = descriptor.scale();
    let mut heights = Vec::with_capacity(descriptor.vertex_count());

    for j in 0..descriptor.rows() {
        for i in 0..descriptor.columns() {
            let h = source
                .sample(i as f32 * sx, j as f32 * sy)
                .map_err(|e| TerrainError::HeightField(e.into()))?;
            heights.push(h);
        }
    }

    Ok(heights)
}

/// Normal from the local surface slope: central differences where both
/// neighbors exist, one-sided at the border.
fn slope_normal(descriptor: &GridDescriptor, heights: &[f32], i: u32, j: u32) -> [f32; 3] {
    let (sx, sy) = descriptor.scale();
    let columns = descriptor.columns();
    let rows = descriptor.rows();
    let h = |i: u32, j: u32| heights[descriptor.index(i, j) as usize];

    let dx = if i > 0 && i < columns - 1 {
        (h(i + 1, j) - h(i - 1, j)) / (2.0 * sx)
    } else if i == 0 {
        (h(1, j) - h(0, j)) / sx
    } else {
        (h(i, j) - h(i - 1, j)) / sx
    };

    let dz = if j > 0 && j < rows - 1 {
        (h(i, j + 1) - h(i, j - 1)) / (2.0 * sy)
    } else if j == 0 {
        (h(i, 1) - h(i, 0)) / sy
    } else {
        (h(i, j) - h(i, j - 1)) / sy
    };

    glam::Vec3::new(-dx, 1.0, -dz).normalize().to_array()
}
